//! The run summary line, e.g. `=== 2 failed, 3 passed in 1.05s ===`.

use super::rule::{Matcher, Pieces};
use crate::category::{Category, Emphasis, Role};
use crate::error::Result;
use const_format::concatcp;
use itertools::Itertools;
use regex::Captures;


macro_rules! count {
    ($name: literal, $word: literal) => {
        concat!(r"(?:(?P<", $name, r">\d+ ", $word, r")(?:, )?)?")
    };
}

const ELAPSED: &str = r"(?P<elapsed> in \d+(?:\.\d+)?(?:s| seconds)(?: \(\d+:\d\d:\d\d\))?)";

/// The whole summary line. Counts come in the order pytest prints them.
/// The pattern alone is too lenient, see [`is_summary`].
const SUMMARY: &str = concatcp!(
    r"^(?P<open>=+ )?",
    count!("failed", "failed"),
    count!("passed", "passed"),
    count!("skipped", "skipped"),
    count!("deselected", "deselected"),
    count!("xfailed", "xfailed"),
    count!("xpassed", "xpassed"),
    count!("warnings", "warnings?"),
    count!("errors", "errors?"),
    r"(?P<no_tests>no tests ran)?",
    ELAPSED,
    r"(?P<close> =+)?$",
);

const COUNTS: [(&str, Role); 9] = [
    ("failed", Role::Red),
    ("passed", Role::Green),
    ("skipped", Role::Yellow),
    ("deselected", Role::Yellow),
    ("xfailed", Role::Yellow),
    ("xpassed", Role::Yellow),
    ("warnings", Role::Yellow),
    ("errors", Role::Red),
    ("no_tests", Role::Yellow),
];

/// Whether a match of [`SUMMARY`] is a real summary line: it has at least one
/// count, counts are separated by `, `, and the last one is directly followed
/// by the elapsed time.
fn is_summary(captures: &Captures<'_>) -> bool {
    let (Some(whole), Some(elapsed)) = (captures.get(0), captures.name("elapsed")) else {
        return false;
    };
    let segments: Vec<_> = COUNTS
        .iter()
        .filter_map(|(name, _)| captures.name(name))
        .collect();
    let Some(last) = segments.last() else {
        return false;
    };
    let gap = |end: usize, start: usize| {
        let base = whole.start();
        &whole.as_str()[end - base..start - base]
    };
    segments
        .iter()
        .tuple_windows()
        .all(|(left, right)| gap(left.end(), right.start()) == ", ")
        && last.end() == elapsed.start()
}

pub(super) fn matcher() -> Result<Matcher> {
    Ok(Matcher::new(SUMMARY)?.with_guard(is_summary))
}

/// Zero-width version of [`matcher`], to leave a state on a summary line.
pub(super) fn lookahead() -> Result<Matcher> {
    Ok(Matcher::lookahead(SUMMARY)?.with_guard(is_summary))
}

const WARNING_COUNTS: [&str; 5] = ["skipped", "xfailed", "xpassed", "warnings", "no_tests"];

fn bracket_color(captures: &Captures<'_>) -> Role {
    let present = |name: &str| captures.name(name).is_some();
    if present("failed") || present("errors") {
        Role::Red
    } else if WARNING_COUNTS.into_iter().any(present) {
        Role::Yellow
    } else {
        Role::Green
    }
}

/// Split a summary line: decorations in the line's color, each count in its
/// own color (bold when it is the line's color), and the elapsed time bold.
pub(super) fn summary_line(captures: &Captures<'_>, pieces: &mut Pieces) {
    let bracket = bracket_color(captures);
    pieces.name(captures, "open", Category::new(bracket, Emphasis::Normal));
    for (name, role) in COUNTS {
        let emphasis = if role == bracket {
            Emphasis::Bold
        } else {
            Emphasis::Normal
        };
        pieces.name(captures, name, Category::new(role, emphasis));
    }
    pieces.name(captures, "elapsed", Category::new(bracket, Emphasis::Bold));
    pieces.name(captures, "close", Category::new(bracket, Emphasis::Normal));
}
