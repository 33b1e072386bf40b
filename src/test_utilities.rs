use crate::category::Category;
use crate::lexer::Tokenizer;
use crate::span::Span;

/// Tokenize `text` with the default grammar, panicking on error.
pub fn tokenize(text: &str) -> Vec<Span<'_>> {
    Tokenizer::new()
        .unwrap()
        .tokenize(text)
        .collect::<crate::error::Result<_>>()
        .unwrap()
}

/// Every span of `text` that is not plain text.
pub fn colored(text: &str) -> Vec<(Category, String)> {
    tokenize(text)
        .into_iter()
        .filter(|span| span.category() != Category::TEXT)
        .map(|span| (span.category(), span.text().to_string()))
        .collect()
}

/// Find the span whose text is exactly `text` and return its category.
pub fn category_of(spans: &[Span<'_>], text: &str) -> Category {
    spans
        .iter()
        .find(|span| span.text() == text)
        .unwrap_or_else(|| panic!("no span {text:?} in {spans:#?}"))
        .category()
}

pub const PASSING: &str = "\
============================= test session starts ==============================
platform linux -- Python 3.11.4, pytest-7.4.0, pluggy-1.2.0
rootdir: /tmp/pytest-of-user/pytest-0/test_simple_test_passing0
collected 1 item

f.py .                                                                   [100%]

============================== 1 passed in 0.01s ===============================
";

pub const WARNINGS: &str = "\
============================= test session starts ==============================
platform linux -- Python 3.11.4, pytest-7.4.0, pluggy-1.2.0
rootdir: /tmp/pytest-of-user/pytest-0/test_warnings0
collected 1 item

f.py .                                                                   [100%]

=============================== warnings summary ===============================
f.py::test
  /tmp/pytest-of-user/pytest-0/test_warnings0/f.py:3: UserWarning: WARNING!
    warnings.warn(UserWarning(\"WARNING!\"))

-- Docs: https://docs.pytest.org/en/stable/how-to/capture-warnings.html
========================= 1 passed, 1 warning in 0.01s =========================
";

pub const DIFFERENT_TYPES: &str = "\
============================= test session starts ==============================
platform linux -- Python 3.11.4, pytest-7.4.0, pluggy-1.2.0
rootdir: /tmp/pytest-of-user/pytest-0/test_different_test_types0
collected 7 items

f.py FF.sxXE                                                             [100%]

==================================== ERRORS ====================================
_________________________ ERROR at setup of test_error _________________________

    @pytest.fixture
    def s():
>       raise Exception('boom!')
E       Exception: boom!

f.py:30: Exception
=================================== FAILURES ===================================
_________________________________ test_answer __________________________________

    def test_answer():
>       assert inc(3) == 5
E       assert 4 == 5
E        +  where 4 = inc(3)

f.py:7: AssertionError
_______________________________ test_fail_stack ________________________________

    def test_fail_stack():
>       fail2()

f.py:13:
_ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _ _

    def fail2():
>       raise RuntimeError('error!')
E       RuntimeError: error!

f.py:10: RuntimeError
=========================== short test summary info ============================
FAILED f.py::test_answer - assert 4 == 5
FAILED f.py::test_fail_stack - RuntimeError: error!
ERROR f.py::test_error - Exception: boom!
== 2 failed, 1 passed, 1 skipped, 1 xfailed, 1 xpassed, 1 error in 0.05s ===
";

pub const VERBOSE: &str = "\
============================= test session starts ==============================
collecting ... collected 3 items

f.py::test_answer FAILED                                                 [ 33%]
f.py::test_skip SKIPPED (unconditional skip)                             [ 66%]
f.py::test PASSED                                                        [100%]

=================================== FAILURES ===================================
_________________________________ test_answer __________________________________

    def test_answer():
>       assert False
E       assert False

f.py:2: AssertionError
=========================== short test summary info ============================
FAILED f.py::test_answer - assert False
==================== 1 failed, 1 passed, 1 skipped in 0.03s ====================
";

pub const NO_TESTS: &str = "\
============================= test session starts ==============================
collected 0 items

============================ no tests ran in 0.00s =============================
";

pub const QUIET: &str = "\
.sx                                                                      [100%]
1 passed, 1 skipped, 1 xfailed in 0.02s
";

pub const FIXTURES: [(&str, &str); 6] = [
    ("passing", PASSING),
    ("warnings", WARNINGS),
    ("different types", DIFFERENT_TYPES),
    ("verbose", VERBOSE),
    ("no tests", NO_TESTS),
    ("quiet", QUIET),
];
