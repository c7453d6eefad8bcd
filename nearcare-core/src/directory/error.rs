use thiserror::Error;

use crate::HospitalError;

/// Errors from [`crate::directory::DirectoryLookup::candidates_near`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DirectoryError {
    /// The backing source could not be read.
    #[error("directory source {source_name} is unavailable: {message}")]
    Unavailable {
        /// Name of the source, such as a file path or service URL.
        source_name: String,
        /// Diagnostic detail.
        message: String,
    },
    /// The source was read but its contents could not be decoded.
    #[error("failed to parse directory {source_name}: {message}")]
    Parse {
        /// Name of the source.
        source_name: String,
        /// Decoder message.
        message: String,
    },
    /// A decoded record failed validation.
    #[error("invalid directory record: {0}")]
    InvalidRecord(#[from] HospitalError),
}
