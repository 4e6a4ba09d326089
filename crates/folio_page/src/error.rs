//! Page error types

use std::path::PathBuf;

use folio_core::SelectorError;
use thiserror::Error;

/// Configuration and mount errors
#[derive(Error, Debug)]
pub enum PageError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`PageConfig`](crate::PageConfig)
    #[error("invalid page config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configured selector does not parse
    #[error("invalid selector for `{field}`: {source}")]
    Selector {
        field: &'static str,
        #[source]
        source: SelectorError,
    },
}

/// Result type for page operations
pub type Result<T> = std::result::Result<T, PageError>;
