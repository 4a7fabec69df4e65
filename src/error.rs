//! Error types for rtfdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for rtfdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or exporting RTF documents.
///
/// Most invalid input never reaches this type: setters that take a keyword
/// string keep the previous value and report [`crate::model::Outcome::Ignored`].
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when writing the exported document to a sink.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A keyword string does not name any variant of the property.
    #[error("Unknown {kind} keyword: {value:?}")]
    UnknownKeyword {
        /// Property the keyword was parsed for (e.g. "alignment")
        kind: &'static str,
        /// The rejected input
        value: String,
    },

    /// No page size is known for the format/orientation pair.
    #[error("No page size for format {format:?} in orientation {orientation:?}")]
    UnknownPageSize {
        /// Requested page format
        format: String,
        /// Requested orientation
        orientation: String,
    },

    /// Error serializing or deserializing a document description.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
