use std::io;

use thiserror::Error;

/// The file could not be turned into source text.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FailedReadFile {
    pub path: String,
    pub message: String,
    #[source]
    pub source: Option<io::Error>,
}

impl FailedReadFile {
    /// The read itself failed; the I/O error text becomes the message.
    pub fn io(path: &str, err: io::Error) -> Self {
        Self {
            path: path.to_string(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// The bytes were read but are not usable as text.
    pub fn unreadable(path: &str) -> Self {
        Self {
            path: path.to_string(),
            message: format!("Failed read file \"{path}\"."),
            source: None,
        }
    }
}
