use super::rule::{Action, Callback, LexerState, Matcher, Pieces, Rule, Transition};
use super::summary::{self, summary_line};
use crate::category::Category;
use crate::error::Result;
use const_format::concatcp;
use regex::Captures;
use tracing::debug;


/// Percentage marker closing a progress line, e.g. `[ 42%]`.
const PERCENT: &str = r"\[ *\d+%\]";

/// A line that ends with a percentage marker.
const PROGRESS_LINE: &str = concatcp!(r"^[^\n]*", PERCENT, r" *$");

/// Characters pytest uses as one-letter outcomes on a progress line.
const GLYPHS: &str = r".sxXEF";

/// A word that is not made only of outcome glyphs, such as a file name or a test id.
const OTHER_WORD: &str = concatcp!(
    r"[^ \n\[]*[^ \n\[",
    GLYPHS,
    r"][^ \n\[]*"
);

const CATCH_ALL: &str = r"(?s).";

/// # Summary
///
/// `StateBuilder` assembles the ordered rule list of one state.
/// Patterns are compiled as they are added, so every method
/// might fail if the provided pattern is malformed.
#[derive(Debug, Default)]
struct StateBuilder {
    rules: Vec<Rule>,
}

impl StateBuilder {
    fn new() -> Self {
        Self::default()
    }

    fn rule(mut self, matcher: Matcher, action: Action, transition: Transition) -> Self {
        self.rules.push(Rule::new(matcher, action, transition));
        self
    }

    fn emit(self, pattern: &str, category: Category) -> Result<Self> {
        self.emit_then(pattern, category, Transition::Stay)
    }

    fn emit_then(self, pattern: &str, category: Category, transition: Transition) -> Result<Self> {
        Ok(self.rule(Matcher::new(pattern)?, Action::Emit(category), transition))
    }

    fn callback(self, pattern: &str, callback: Callback) -> Result<Self> {
        Ok(self.rule(
            Matcher::new(pattern)?,
            Action::Callback(callback),
            Transition::Stay,
        ))
    }

    fn lookahead(self, pattern: &str, transition: Transition) -> Result<Self> {
        Ok(self.rule(
            Matcher::lookahead(pattern)?,
            Action::Emit(Category::TEXT),
            transition,
        ))
    }

    /// Every state ends with a single character catch-all, so that any input is consumed.
    fn build(self) -> Result<Vec<Rule>> {
        Ok(self.emit(CATCH_ALL, Category::TEXT)?.rules)
    }
}

fn root() -> Result<Vec<Rule>> {
    StateBuilder::new()
        .emit(r"^=+ test session starts =+$", Category::BOLD)?
        .emit(r"^collecting \.\.\.", Category::BOLD)?
        .emit_then(
            r"^=+ (?:ERRORS|FAILURES) =+$",
            Category::TEXT,
            Transition::Push(LexerState::Failures),
        )?
        .emit(r"^=+ warnings summary(?: \(final\))? =+$", Category::YELLOW)?
        .emit(r"^=+ short test summary info =+$", Category::CYAN)?
        .rule(summary::matcher()?, Action::Callback(summary_line), Transition::Stay)
        .lookahead(PROGRESS_LINE, Transition::Push(LexerState::ProgressLine))?
        .emit(r"^(?:FAILED|ERROR)\b", Category::RED)?
        .emit(r"^(?:SKIPPED|XFAIL|XPASS)\b", Category::YELLOW)?
        .emit(r"^PASSED\b", Category::GREEN)?
        .build()
}

/// How far a progress line has escalated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Level {
    Pass,
    Warn,
    Error,
}

impl Level {
    fn state(self) -> LexerState {
        match self {
            Level::Pass => LexerState::ProgressLine,
            Level::Warn => LexerState::ProgressLineWarn,
            Level::Error => LexerState::ProgressLineError,
        }
    }

    fn percent(self) -> Category {
        match self {
            Level::Pass => Category::GREEN,
            Level::Warn => Category::YELLOW,
            Level::Error => Category::RED,
        }
    }

    /// The transition taken by an outcome of level `seen`: escalate, never lower.
    fn escalate(self, seen: Level) -> Transition {
        if seen > self {
            Transition::Swap(seen.state())
        } else {
            Transition::Stay
        }
    }
}

fn progress_line(level: Level) -> Result<Vec<Rule>> {
    let warn = level.escalate(Level::Warn);
    let error = level.escalate(Level::Error);
    StateBuilder::new()
        .emit(PERCENT, level.percent())?
        .emit(r"PASSED\b", Category::GREEN)?
        .emit_then(r"(?:SKIPPED|XPASS|XFAIL|xfail)\b", Category::YELLOW, warn)?
        .emit_then(r"(?:ERROR|FAILED)\b", Category::RED, error)?
        .emit(OTHER_WORD, Category::TEXT)?
        .emit(r"\.", Category::GREEN)?
        .emit_then(r"[sxX]", Category::YELLOW, warn)?
        .emit_then(r"[EF]", Category::RED, error)?
        .emit(r" +", Category::TEXT)?
        .emit_then(r"\n", Category::TEXT, Transition::Pop)?
        .build()
}

fn filename_line(captures: &Captures<'_>, pieces: &mut Pieces) {
    pieces.group(captures, 1, Category::BOLD_RED);
    pieces.group(captures, 2, Category::TEXT);
}

fn failures() -> Result<Vec<Rule>> {
    StateBuilder::new()
        .lookahead(r"^=+ ", Transition::Pop)?
        .rule(summary::lookahead()?, Action::Emit(Category::TEXT), Transition::Pop)
        .emit(r"^_+ ERROR at (?:setup|teardown) of .+ _+$", Category::TEXT)?
        .emit(r"^_+ .+ _+$", Category::BOLD_RED)?
        .emit(r"^E(?: .*)?$", Category::BOLD_RED)?
        .callback(r"^(<[^>\n]+>|[^:\n]+)(:\d+:.*)$", filename_line)?
        .emit(r"^(?:    |>).+$", Category::BOLD)?
        .build()
}

/// # Summary
///
/// `Grammar` holds the compiled, ordered rule list of every [`LexerState`].
/// It is immutable once built: the three progress states are each built
/// from the same rule list, parameterized by how far the line escalated.
#[derive(Debug, Clone)]
pub struct Grammar {
    states: [Vec<Rule>; 5],
}

impl Grammar {
    pub fn new() -> Result<Self> {
        let grammar = Self {
            states: [
                root()?,
                progress_line(Level::Pass)?,
                progress_line(Level::Warn)?,
                progress_line(Level::Error)?,
                failures()?,
            ],
        };
        debug!(
            rules = grammar.states.iter().map(Vec::len).sum::<usize>(),
            "compiled pytest grammar"
        );
        Ok(grammar)
    }

    /// Return the rules of `state`, in the order they are tried.
    pub fn rules(&self, state: LexerState) -> &[Rule] {
        &self.states[state.index()]
    }

    #[cfg(test)]
    pub(crate) fn replace(&mut self, state: LexerState, rules: Vec<Rule>) {
        self.states[state.index()] = rules;
    }
}
