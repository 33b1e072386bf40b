use crate::category::Category;
use crate::error::{Error, Result};
use regex::{Captures, Regex, RegexBuilder};
use serde::Serialize;
use std::fmt;
use std::ops::Range;


/// The states of the tokenizer. `Root` is at the bottom of the state stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LexerState {
    Root,
    ProgressLine,
    ProgressLineWarn,
    ProgressLineError,
    Failures,
}

impl LexerState {
    pub const ALL: [LexerState; 5] = [
        LexerState::Root,
        LexerState::ProgressLine,
        LexerState::ProgressLineWarn,
        LexerState::ProgressLineError,
        LexerState::Failures,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            LexerState::Root => "root",
            LexerState::ProgressLine => "progress_line",
            LexerState::ProgressLineWarn => "progress_line_warn",
            LexerState::ProgressLineError => "progress_line_error",
            LexerState::Failures => "failures",
        }
    }
}

impl fmt::Display for LexerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What happens to the state stack once a rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Push(LexerState),
    /// Return to the enclosing state. `Root` is never popped.
    Pop,
    /// Pop, then push: the new state replaces the current one.
    Swap(LexerState),
}

/// A callback splits a match into categorized pieces.
pub type Callback = fn(&Captures<'_>, &mut Pieces);

#[derive(Clone, Copy)]
pub enum Action {
    /// Emit the whole match with a fixed category.
    Emit(Category),
    /// Let a callback decompose the match.
    Callback(Callback),
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Emit(category) => f.debug_tuple("Emit").field(category).finish(),
            Action::Callback(_) => f.write_str("Callback"),
        }
    }
}

/// A guard accepts or rejects what a pattern matched.
pub type Guard = fn(&Captures<'_>) -> bool;

/// # Summary
///
/// `Matcher` tests a pattern at a given position of a line. The match must
/// start exactly at that position: the pattern runs, anchored, on the rest of
/// the line, so the cost of a test never depends on what comes after the match.
/// A pattern that starts with `^` is only tried at the start of a line.
/// Patterns are compiled in multi-line mode, and `$` matches before `\r\n`.
///
/// A matcher either consumes what it matched, or, for a lookahead, only checks
/// that the pattern matches and consumes nothing. An optional [`Guard`] may
/// reject a match the pattern alone cannot rule out.
#[derive(Clone)]
pub struct Matcher {
    regex: Regex,
    lookahead: bool,
    line_start: bool,
    guard: Option<Guard>,
}

impl Matcher {
    pub fn new(pattern: &str) -> Result<Self> {
        Self::compile(pattern, false)
    }

    pub fn lookahead(pattern: &str) -> Result<Self> {
        Self::compile(pattern, true)
    }

    fn compile(pattern: &str, lookahead: bool) -> Result<Self> {
        let regex = RegexBuilder::new(&format!(r"\A(?:{pattern})"))
            .multi_line(true)
            .crlf(true)
            .build()
            .map_err(|source| Error::Pattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            regex,
            lookahead,
            line_start: pattern.starts_with('^'),
            guard: None,
        })
    }

    pub fn with_guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    pub fn is_lookahead(&self) -> bool {
        self.lookahead
    }

    fn applies(&self, line: &str, pos: usize) -> bool {
        !self.line_start || pos == 0 || line[..pos].ends_with('\n')
    }

    fn accepts(&self, captures: &Captures<'_>) -> bool {
        self.guard.map_or(true, |guard| guard(captures))
    }

    /// Return where the match starting exactly at `pos` ends, if there is one.
    pub fn find(&self, line: &str, pos: usize) -> Option<usize> {
        if !self.applies(line, pos) {
            return None;
        }
        let rest = &line[pos..];
        let length = if self.guard.is_some() {
            let captures = self.regex.captures(rest)?;
            if !self.accepts(&captures) {
                return None;
            }
            captures.get(0)?.end()
        } else {
            self.regex.find(rest)?.end()
        };
        Some(if self.lookahead { pos } else { pos + length })
    }

    /// Same as `find`, with capture groups. Their offsets are relative to `pos`.
    /// A lookahead never reports captures.
    pub fn captures<'h>(&self, line: &'h str, pos: usize) -> Option<Captures<'h>> {
        if self.lookahead || !self.applies(line, pos) {
            return None;
        }
        self.regex
            .captures(&line[pos..])
            .filter(|captures| self.accepts(captures))
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("regex", &self.regex)
            .field("lookahead", &self.lookahead)
            .field("guarded", &self.guard.is_some())
            .finish()
    }
}

/// # Summary
///
/// `Pieces` collects the categorized sub-ranges a callback emits for a match.
/// Pieces must come in order; anything left between them, or after the last
/// one, is plain text, so the whole match is always covered.
#[derive(Debug)]
pub struct Pieces {
    end: usize,
    cursor: usize,
    pieces: Vec<(Range<usize>, Category)>,
}

impl Pieces {
    pub fn new(range: Range<usize>) -> Self {
        Self {
            end: range.end,
            cursor: range.start,
            pieces: Vec::new(),
        }
    }

    /// Emit the capture group `index`, if it participated in the match.
    pub fn group(&mut self, captures: &Captures<'_>, index: usize, category: Category) {
        if let Some(group) = captures.get(index) {
            self.push(group.range(), category);
        }
    }

    /// Emit the named capture group `name`, if it participated in the match.
    pub fn name(&mut self, captures: &Captures<'_>, name: &str, category: Category) {
        if let Some(group) = captures.name(name) {
            self.push(group.range(), category);
        }
    }

    fn push(&mut self, range: Range<usize>, category: Category) {
        if range.is_empty() || range.start < self.cursor || range.end > self.end {
            return;
        }
        if range.start > self.cursor {
            self.pieces.push((self.cursor..range.start, Category::TEXT));
        }
        self.cursor = range.end;
        self.pieces.push((range, category));
    }

    pub fn finish(mut self) -> Vec<(Range<usize>, Category)> {
        if self.cursor < self.end {
            self.pieces.push((self.cursor..self.end, Category::TEXT));
        }
        self.pieces
    }
}

/// A rule of the tokenizer: a matcher, what to emit, and where to go next.
#[derive(Debug, Clone)]
pub struct Rule {
    matcher: Matcher,
    action: Action,
    transition: Transition,
}

impl Rule {
    pub fn new(matcher: Matcher, action: Action, transition: Transition) -> Self {
        Self {
            matcher,
            action,
            transition,
        }
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }
}
