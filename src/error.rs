//! Error types for the doctoc library.

use std::io;
use thiserror::Error;

/// Result type alias for doctoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during outline extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No extractable text spans were found in the entire document.
    ///
    /// This is terminal for the document: without a single font-size
    /// observation there is no baseline to normalize against.
    #[error("No text spans found in document")]
    EmptyDocument,

    /// The input page dump could not be deserialized.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error serializing the outline for output.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidInput(err.to_string())
    }
}
