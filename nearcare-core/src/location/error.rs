use thiserror::Error;

/// Errors from [`crate::location::LocationProvider::current_location`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The user refused to share their position.
    #[error("location access denied")]
    PermissionDenied,
    /// The platform could not determine a position.
    #[error("position unavailable: {message}")]
    Unavailable {
        /// Diagnostic detail from the platform.
        message: String,
    },
    /// No fix arrived before the deadline.
    #[error("timed out after {timeout_secs}s waiting for a position fix")]
    Timeout {
        /// Deadline that elapsed, in seconds.
        timeout_secs: u64,
    },
    /// The platform has no geolocation capability.
    #[error("geolocation not supported")]
    Unsupported,
}
