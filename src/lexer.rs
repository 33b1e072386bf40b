//! # Lexer
//!
//! This module contains the tokenizer for pytest console output. The most useful are:
//!  - the [`Tokenizer`], which holds the compiled rule tables and splits an input into spans;
//!  - [`Tokens`], the lazy iterator a tokenization produces;
//!  - [`LexerState`], the states of the tokenizer. A tokenization keeps a stack of them,
//!    which starts and ends with [`LexerState::Root`];
//!  - [`Grammar`], the ordered [`Rule`]s of every state.
//!
//! Rules are tried in order and the first one matching at the cursor wins. A rule
//! consumes what it matched (or nothing, for a lookahead), emits one or more spans,
//! then pushes, pops or swaps states. Every state ends with a one character
//! catch-all, so every input is consumed entirely.

mod grammar;
#[allow(clippy::module_inception)]
mod lexer;
mod rule;
mod summary;

pub use grammar::Grammar;
pub use lexer::{Tokenizer, Tokens};
pub use rule::{Action, Callback, Guard, LexerState, Matcher, Pieces, Rule, Transition};

#[cfg(test)]
mod tests {
    use crate::category::Category;
    use crate::span::Span;
    use crate::test_utilities::*;

    fn spans_after<'a>(spans: &'a [Span<'a>], text: &str) -> &'a [Span<'a>] {
        let index = spans
            .iter()
            .position(|span| span.text() == text)
            .unwrap_or_else(|| panic!("no span {text:?}"));
        &spans[index..]
    }

    #[test]
    fn passing() {
        let spans = tokenize(PASSING);
        assert_eq!(
            category_of(
                &spans,
                "============================= test session starts =============================="
            ),
            Category::BOLD
        );
        let progress = spans_after(&spans, "f.py");
        assert_eq!(category_of(progress, "."), Category::GREEN);
        assert_eq!(category_of(progress, "[100%]"), Category::GREEN);
        assert_eq!(category_of(&spans, "============================== "), Category::GREEN);
        assert_eq!(category_of(&spans, "1 passed"), Category::BOLD_GREEN);
        assert_eq!(category_of(&spans, " in 0.01s"), Category::BOLD_GREEN);
        assert_eq!(category_of(&spans, " ==============================="), Category::GREEN);
    }

    #[test]
    fn warnings() {
        let spans = tokenize(WARNINGS);
        assert_eq!(
            category_of(
                &spans,
                "=============================== warnings summary ==============================="
            ),
            Category::YELLOW
        );
        assert_eq!(category_of(&spans, "1 passed"), Category::GREEN);
        assert_eq!(category_of(&spans, "1 warning"), Category::BOLD_YELLOW);
        assert_eq!(category_of(&spans, " in 0.01s"), Category::BOLD_YELLOW);
    }

    #[test]
    fn different_types() {
        let spans = tokenize(DIFFERENT_TYPES);
        assert_eq!(category_of(&spans, "[100%]"), Category::RED);
        assert_eq!(
            category_of(
                &spans,
                "_________________________ ERROR at setup of test_error _________________________"
            ),
            Category::TEXT
        );
        assert_eq!(
            category_of(
                &spans,
                "_________________________________ test_answer __________________________________"
            ),
            Category::BOLD_RED
        );
        assert_eq!(category_of(&spans, "    @pytest.fixture"), Category::BOLD);
        assert_eq!(category_of(&spans, ">       raise Exception('boom!')"), Category::BOLD);
        assert_eq!(category_of(&spans, "E       Exception: boom!"), Category::BOLD_RED);
        assert_eq!(category_of(&spans, "E        +  where 4 = inc(3)"), Category::BOLD_RED);
        assert_eq!(category_of(&spans, ":30: Exception"), Category::TEXT);
        assert_eq!(category_of(&spans, ":13:"), Category::TEXT);
        let located = spans_after(&spans, "==================================== ERRORS ====================================");
        assert_eq!(category_of(located, "f.py"), Category::BOLD_RED);
        assert_eq!(
            category_of(
                &spans,
                "=========================== short test summary info ============================"
            ),
            Category::CYAN
        );
        assert_eq!(category_of(&spans, "FAILED"), Category::RED);
        assert_eq!(category_of(&spans, "ERROR"), Category::RED);
        assert_eq!(category_of(&spans, "== "), Category::RED);
        assert_eq!(category_of(&spans, "2 failed"), Category::BOLD_RED);
        assert_eq!(category_of(&spans, "1 passed"), Category::GREEN);
        assert_eq!(category_of(&spans, "1 skipped"), Category::YELLOW);
        assert_eq!(category_of(&spans, "1 xfailed"), Category::YELLOW);
        assert_eq!(category_of(&spans, "1 xpassed"), Category::YELLOW);
        assert_eq!(category_of(&spans, "1 error"), Category::BOLD_RED);
        assert_eq!(category_of(&spans, " in 0.05s"), Category::BOLD_RED);
        assert_eq!(category_of(&spans, " ==="), Category::RED);
    }

    #[test]
    fn progress_glyphs() {
        let colored = colored("f.py FF.sxXE                [100%]\n");
        assert_eq!(
            colored,
            vec![
                (Category::RED, String::from("F")),
                (Category::RED, String::from("F")),
                (Category::GREEN, String::from(".")),
                (Category::YELLOW, String::from("s")),
                (Category::YELLOW, String::from("x")),
                (Category::YELLOW, String::from("X")),
                (Category::RED, String::from("E")),
                (Category::RED, String::from("[100%]")),
            ]
        );
    }

    #[test]
    fn verbose() {
        let spans = tokenize(VERBOSE);
        assert_eq!(category_of(&spans, "collecting ..."), Category::BOLD);
        assert_eq!(category_of(&spans, "f.py::test_answer"), Category::TEXT);
        assert_eq!(category_of(&spans, "[ 33%]"), Category::RED);
        assert_eq!(category_of(&spans, "SKIPPED"), Category::YELLOW);
        assert_eq!(category_of(&spans, "(unconditional"), Category::TEXT);
        assert_eq!(category_of(&spans, "[ 66%]"), Category::YELLOW);
        assert_eq!(category_of(&spans, "[100%]"), Category::GREEN);
        assert_eq!(category_of(&spans, "E       assert False"), Category::BOLD_RED);
        assert_eq!(category_of(&spans, "1 skipped"), Category::YELLOW);
        assert_eq!(category_of(&spans, " in 0.03s"), Category::BOLD_RED);
    }

    #[test]
    fn no_tests() {
        let spans = tokenize(NO_TESTS);
        assert_eq!(category_of(&spans, "no tests ran"), Category::BOLD_YELLOW);
        assert_eq!(category_of(&spans, " in 0.00s"), Category::BOLD_YELLOW);
    }

    #[test]
    fn quiet() {
        let spans = tokenize(QUIET);
        assert_eq!(category_of(&spans, "[100%]"), Category::YELLOW);
        assert_eq!(category_of(&spans, "1 passed"), Category::GREEN);
        assert_eq!(category_of(&spans, "1 skipped"), Category::BOLD_YELLOW);
        assert_eq!(category_of(&spans, "1 xfailed"), Category::BOLD_YELLOW);
    }

    #[test]
    fn summary_line_from_the_docs() {
        let spans = tokenize("=== 2 failed, 3 skipped in 1.05s ===");
        let pieces: Vec<_> = spans
            .iter()
            .map(|span| (span.text(), span.category()))
            .collect();
        assert_eq!(
            pieces,
            vec![
                ("=== ", Category::RED),
                ("2 failed", Category::BOLD_RED),
                (", ", Category::TEXT),
                ("3 skipped", Category::YELLOW),
                (" in 1.05s", Category::BOLD_RED),
                (" ===", Category::RED),
            ]
        );
    }
}
