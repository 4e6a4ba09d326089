//! Core error types

use thiserror::Error;

/// Selector parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// The selector string was empty or only whitespace
    #[error("empty selector")]
    Empty,

    /// The parser stopped before consuming the whole input
    #[error("invalid selector `{selector}` at column {column}: unexpected `{found}`")]
    Unexpected {
        /// The full selector that failed
        selector: String,
        /// 1-based column where parsing stopped
        column: usize,
        /// Preview of the remaining input
        found: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, SelectorError>;
