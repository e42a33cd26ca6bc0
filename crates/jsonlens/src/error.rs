//! Error types shared by documents, views, and searches.

use thiserror::Error;

/// Convenience alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing a document or navigating its views.
///
/// Every kind is terminal for the operation that raised it; nothing is
/// retried internally. Lookup failures carry the offending key or index so
/// callers can report which step of a path went wrong.
#[derive(Debug, Error)]
pub enum Error {
    /// The input was not valid JSON.
    ///
    /// The underlying diagnostic (with line and column) is preserved as the
    /// error source.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A document file could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A reparse was attempted while views from the current parse are still
    /// alive.
    ///
    /// Reparsing frees the storage those views point into, so the document
    /// refuses until every view has been dropped.
    #[error("cannot reparse while {live} live view(s) reference the current parse")]
    ReparseWhileLive {
        /// Number of views still referencing the current tree.
        live: usize,
    },

    /// An object lookup or pointer segment named a key that is absent.
    #[error("key not found: {key:?}")]
    KeyNotFound {
        /// The missing key, with pointer escapes already undone.
        key: String,
    },

    /// An array index or pointer segment was unusable or out of range.
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds {
        /// The index exactly as the caller supplied it, before any negative
        /// wraparound was applied.
        index: String,
        /// Length of the array that rejected it.
        len: usize,
    },

    /// A search found no element equal to the needle.
    #[error("value not found in array")]
    NotFound,
}
