use crate::lexer::LexerState;
use std::path::PathBuf;
use thiserror::Error;


/// # Summary
///
/// `Error` gathers everything that can go wrong in this crate.
///
/// # Error types
///
/// `UnknownColor`: a style override names a color that has no category.
/// `UnreachableState`: no rule of the active state matched, which is a defect
///   of the rule tables, never of the input.
/// `Pattern`: a rule pattern failed to compile, also a table defect.
/// `ConfigRead`, `ConfigSyntax`: a configuration file could not be loaded.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown color `{key}`, expected one of: {expected}")]
    UnknownColor { key: String, expected: String },
    #[error("no rule matches at offset {offset} in state `{state}`")]
    UnreachableState { state: LexerState, offset: usize },
    #[error("rule pattern `{pattern}` does not compile")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("cannot read configuration file {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed configuration")]
    ConfigSyntax(#[from] serde_json::Error),
}

impl Error {
    /// Wrap `self` in an `Err`.
    pub fn err<T>(self) -> Result<T> {
        Err(self)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
