//! Catalog errors.
//!
//! Only catalog construction can fail. Filtering, sorting, searching and
//! paging are total over an already-built catalog.

use std::path::PathBuf;

use crate::cards::CardId;

/// Errors raised while loading or registering the card catalog.
///
/// All of these are fatal at startup: an index cannot be built over
/// records without unique identifiers.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog JSON could not be parsed.
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog file could not be read.
    #[error("Failed to read catalog from {path}: {source}")]
    Io {
        /// Path that was attempted.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A record has no identifier.
    #[error("Card record #{index} has no id")]
    MissingId {
        /// Position of the record in the input.
        index: usize,
    },

    /// A record's identifier is not a non-negative integer.
    #[error("Card record #{index} has an invalid id: {value}")]
    InvalidId {
        /// Position of the record in the input.
        index: usize,
        /// The offending value, as JSON.
        value: String,
    },

    /// Two records share an identifier.
    #[error("Duplicate card id {0}")]
    DuplicateId(CardId),
}

/// Result alias for catalog construction.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// A string that is not part of a closed vocabulary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value {value:?}")]
pub struct UnknownValue {
    /// Vocabulary name (e.g. "size").
    pub kind: &'static str,
    /// The unrecognized input.
    pub value: String,
}

impl UnknownValue {
    /// Create a new unknown-value error.
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
