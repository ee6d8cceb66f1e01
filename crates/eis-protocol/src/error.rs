//! Filename Format Errors

use thiserror::Error;

/// Errors decoding a filename-encoded test identity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Wrong number of underscore-separated tokens in the file stem
    #[error("unexpected EIS filename format {name:?}: expected 5 tokens, found {found}")]
    TokenCount { name: String, found: usize },

    /// A token did not parse as an integer after tag stripping
    #[error("unexpected EIS filename format {name:?}: token {token:?} is not an integer")]
    InvalidToken { name: String, token: String },

    /// The path has no decodable UTF-8 file stem
    #[error("spectrum path {name:?} has no readable file name")]
    MissingStem { name: String },
}
