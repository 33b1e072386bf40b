use super::grammar::Grammar;
use super::rule::{Action, LexerState, Pieces, Transition};
use crate::category::Category;
use crate::error::{Error, Result};
use crate::span::Span;
use crate::stream::StringStream;
use std::collections::VecDeque;
use std::iter::FusedIterator;
use tracing::{debug, trace};


/// # Summary
///
/// `Tokenizer` splits captured pytest output into categorized [`Span`]s.
/// It only holds the compiled [`Grammar`], which is never modified, so one
/// tokenizer can serve any number of inputs, from any number of threads.
///
/// # Methods
///
/// `new`: compile the rule tables.
/// `tokenize`: lazily split an input.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    grammar: Grammar,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        Ok(Self::with_grammar(Grammar::new()?))
    }

    pub fn with_grammar(grammar: Grammar) -> Self {
        Self { grammar }
    }

    /// Return the spans of `text`, computed as they are consumed.
    /// Each call starts over from the `Root` state.
    pub fn tokenize<'g, 'text>(&'g self, text: &'text str) -> Tokens<'g, 'text> {
        Tokens {
            grammar: &self.grammar,
            stream: StringStream::new(text),
            stack: vec![LexerState::Root],
            pending: VecDeque::new(),
            done: false,
        }
    }
}

/// # Summary
///
/// `Tokens` is the iterator returned by [`Tokenizer::tokenize`]. It owns the
/// cursor and the state stack of one tokenization. After an error, it yields
/// nothing more.
#[derive(Debug)]
pub struct Tokens<'g, 'text> {
    grammar: &'g Grammar,
    stream: StringStream<'text>,
    stack: Vec<LexerState>,
    pending: VecDeque<Span<'text>>,
    done: bool,
}

impl<'text> Tokens<'_, 'text> {
    /// Return the active state.
    pub fn state(&self) -> LexerState {
        self.stack.last().copied().unwrap_or(LexerState::Root)
    }

    /// Apply the first rule of the active state that matches at the cursor.
    fn step(&mut self) -> Result<()> {
        let grammar = self.grammar;
        let state = self.state();
        let haystack = self.stream.line();
        let pos = self.stream.byte_pos();
        for rule in grammar.rules(state) {
            let end = match rule.action() {
                Action::Emit(category) => {
                    let Some(end) = rule.matcher().find(haystack, pos) else {
                        continue;
                    };
                    self.emit(end, category);
                    end
                }
                Action::Callback(callback) => {
                    let Some(captures) = rule.matcher().captures(haystack, pos) else {
                        continue;
                    };
                    let length = captures.get(0).map_or(0, |found| found.end());
                    let mut pieces = Pieces::new(0..length);
                    callback(&captures, &mut pieces);
                    for (range, category) in pieces.finish() {
                        self.emit(pos + range.end, category);
                    }
                    pos + length
                }
            };
            if end == pos && rule.transition() == Transition::Stay {
                break;
            }
            self.transition(rule.transition());
            return Ok(());
        }
        Error::UnreachableState {
            state,
            offset: self.stream.pos(),
        }
        .err()
    }

    /// Queue a span from the cursor up to the byte index `end`.
    fn emit(&mut self, end: usize, category: Category) {
        let start = self.stream.byte_pos();
        if end <= start {
            return;
        }
        let span = Span::new(
            self.stream.pos(),
            start,
            category,
            &self.stream.borrow()[start..end],
        );
        self.stream.advance_to(end);
        self.pending.push_back(span);
    }

    fn transition(&mut self, transition: Transition) {
        match transition {
            Transition::Stay => return,
            Transition::Push(state) => self.stack.push(state),
            Transition::Pop => {
                if self.stack.len() > 1 {
                    self.stack.pop();
                }
            }
            Transition::Swap(state) => {
                if self.stack.len() > 1 {
                    self.stack.pop();
                }
                self.stack.push(state);
            }
        }
        trace!(offset = self.stream.pos(), stack = ?self.stack, "state transition");
    }
}

impl<'text> Iterator for Tokens<'_, 'text> {
    type Item = Result<Span<'text>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(span) = self.pending.pop_front() {
                return Some(Ok(span));
            }
            if self.done {
                return None;
            }
            if self.stream.is_empty() {
                self.done = true;
                debug!(
                    length = self.stream.pos(),
                    state = %self.state(),
                    "tokenization finished"
                );
                return None;
            }
            if let Err(error) = self.step() {
                self.done = true;
                return Some(Err(error));
            }
        }
    }
}

impl FusedIterator for Tokens<'_, '_> {}
