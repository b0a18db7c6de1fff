//! All error types for the stringgen crate.
//!
//! These are returned from every fallible operation (reading the catalog, rendering, writing).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("String Catalog not found at {}", .0.display())]
    MissingCatalog(PathBuf),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog keys `{first}` and `{second}` both map to the Swift identifier `{identifier}`")]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },

    #[error("unknown placeholder mode `{0}`")]
    UnknownPlaceholderMode(String),
}

impl Error {
    /// Returns true when the failure is the explicitly checked missing-catalog condition.
    pub fn is_missing_catalog(&self) -> bool {
        matches!(self, Error::MissingCatalog(_))
    }
}
