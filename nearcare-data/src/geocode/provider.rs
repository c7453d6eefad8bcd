//! `ReverseGeocoder` backed by Nominatim's `/reverse` endpoint.
//!
//! # Architecture
//!
//! The [`ReverseGeocoder`] trait is synchronous so the core library stays
//! embeddable in synchronous contexts. This geocoder bridges the async HTTP
//! call to the sync interface by blocking on a Tokio runtime internally.

use std::time::Duration;

use log::debug;
use nearcare_core::{AddressLabel, Coordinate, GeocodeError, ReverseGeocoder};
use reqwest::Client;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use super::nominatim::ReverseResponse;

/// Error type for [`NominatimGeocoder`] construction failures.
#[derive(Debug)]
pub enum GeocoderBuildError {
    /// Failed to build the HTTP client.
    HttpClient(reqwest::Error),
    /// Failed to build the Tokio runtime.
    Runtime(std::io::Error),
}

impl std::fmt::Display for GeocoderBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HttpClient(err) => write!(f, "failed to build HTTP client: {err}"),
            Self::Runtime(err) => write!(f, "failed to build Tokio runtime: {err}"),
        }
    }
}

impl std::error::Error for GeocoderBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HttpClient(err) => Some(err),
            Self::Runtime(err) => Some(err),
        }
    }
}

/// Public Nominatim instance operated by OpenStreetMap.
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Default user agent; Nominatim's usage policy requires one.
pub const DEFAULT_USER_AGENT: &str = "nearcare-geocode/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`NominatimGeocoder`].
#[derive(Debug, Clone)]
pub struct NominatimGeocoderConfig {
    /// Base URL of the Nominatim server.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for NominatimGeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NOMINATIM_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl NominatimGeocoderConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Reverse geocoder calling a Nominatim server over HTTP.
///
/// Owns a current-thread Tokio runtime reused across calls. When invoked from
/// inside a multi-threaded runtime it borrows that runtime's handle through
/// [`tokio::task::block_in_place`] instead. Inside a caller's current-thread
/// runtime, where neither is allowed, the request runs on the owned runtime
/// from a scoped helper thread.
pub struct NominatimGeocoder {
    client: Client,
    config: NominatimGeocoderConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for NominatimGeocoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NominatimGeocoder")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl NominatimGeocoder {
    /// Create a geocoder for `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, GeocoderBuildError> {
        Self::with_config(NominatimGeocoderConfig::new(base_url))
    }

    /// Create a geocoder with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: NominatimGeocoderConfig) -> Result<Self, GeocoderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(GeocoderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(GeocoderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Build the lookup URL: `{base_url}/reverse?format=json&lat={lat}&lon={lon}`.
    fn build_reverse_url(&self, at: Coordinate) -> String {
        format!(
            "{}/reverse?format=json&lat={}&lon={}",
            self.config.base_url.trim_end_matches('/'),
            at.latitude(),
            at.longitude()
        )
    }

    async fn fetch_label_async(&self, at: Coordinate) -> Result<AddressLabel, GeocodeError> {
        let url = self.build_reverse_url(at);
        debug!("reverse geocoding via {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let body: ReverseResponse =
            response
                .json()
                .await
                .map_err(|err| GeocodeError::ParseError {
                    message: err.to_string(),
                })?;

        Self::convert_response(body)
    }

    /// Drive `future` on the owned runtime from a thread with no runtime context.
    fn block_on_helper_thread<F>(
        &self,
        at: Coordinate,
        future: F,
    ) -> Result<AddressLabel, GeocodeError>
    where
        F: std::future::Future<Output = Result<AddressLabel, GeocodeError>> + Send,
    {
        std::thread::scope(|scope| {
            scope
                .spawn(|| self.runtime.block_on(future))
                .join()
                .unwrap_or_else(|_| {
                    Err(GeocodeError::NetworkError {
                        url: self.build_reverse_url(at),
                        message: "reverse geocoding thread panicked".to_owned(),
                    })
                })
        })
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> GeocodeError {
        if error.is_timeout() {
            return GeocodeError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return GeocodeError::HttpError {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        GeocodeError::NetworkError {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }

    fn convert_response(response: ReverseResponse) -> Result<AddressLabel, GeocodeError> {
        if let Some(message) = response.error {
            debug!("nominatim reported: {message}");
            return Err(GeocodeError::NoAddress);
        }
        response
            .address
            .and_then(|address| address.label())
            .ok_or(GeocodeError::NoAddress)
    }
}

impl ReverseGeocoder for NominatimGeocoder {
    fn reverse(&self, at: Coordinate) -> Result<AddressLabel, GeocodeError> {
        let future = self.fetch_label_async(at);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            Ok(_) => self.block_on_helper_thread(at, future),
            Err(_) => self.runtime.block_on(future),
        }
    }
}
