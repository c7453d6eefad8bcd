use thiserror::Error;

/// Errors from [`crate::geocode::ReverseGeocoder::reverse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The service had no address for the position.
    #[error("no address found for the requested position")]
    NoAddress,

    /// Request timed out.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// The URL that was being requested.
        url: String,
        /// The timeout duration in seconds.
        timeout_secs: u64,
    },

    /// Service returned a non-success status.
    #[error("request to {url} failed with HTTP {status}: {message}")]
    HttpError {
        /// The URL that was being requested.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },

    /// Connection or transport failure.
    #[error("network error for {url}: {message}")]
    NetworkError {
        /// The URL that was being requested.
        url: String,
        /// Error message.
        message: String,
    },

    /// Response body could not be decoded.
    #[error("failed to parse geocoding response: {message}")]
    ParseError {
        /// Description of the parse failure.
        message: String,
    },
}
