//! # pytest-lexer
//!
//! A tokenizer for the console output of pytest. It splits a captured run into
//! [`Span`]s tagged with a [`Category`], the way pytest colors its terminal
//! output, so that any highlighter can render it. The [`style`] module maps
//! categories back to colors.
//!
//! ```
//! use pytest_lexer::{Category, Tokenizer};
//!
//! let tokenizer = Tokenizer::new()?;
//! let spans = tokenizer
//!     .tokenize("=== 2 failed, 3 skipped in 1.05s ===")
//!     .collect::<pytest_lexer::error::Result<Vec<_>>>()?;
//! assert_eq!(spans[1].text(), "2 failed");
//! assert_eq!(spans[1].category(), Category::BOLD_RED);
//! # Ok::<(), pytest_lexer::error::Error>(())
//! ```

pub mod category;
pub mod config;
pub mod error;
pub mod lexer;
pub mod location;
pub mod span;
pub mod stream;
pub mod style;
#[cfg(test)]
mod test_utilities;

pub use category::{Category, Emphasis, Role};
pub use lexer::{LexerState, Tokenizer, Tokens};
pub use span::Span;
pub use style::{stylesheet, ColorOverrides, Stylesheet};

/// The name highlighters register this lexer under.
pub const NAME: &str = "pytest";
pub const ALIASES: [&str; 1] = ["pytest"];
