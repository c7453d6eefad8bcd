//! Nominatim `/reverse` response types.
//!
//! Only the fields needed for a locality label are decoded.
//!
//! See: <https://nominatim.org/release-docs/latest/api/Reverse/>

use nearcare_core::AddressLabel;
use serde::Deserialize;

/// Body of a `format=json` reverse lookup.
///
/// Nominatim answers HTTP 200 with an `error` member when nothing is found.
#[derive(Debug, Deserialize)]
pub struct ReverseResponse {
    /// Structured address, absent when the lookup failed.
    pub address: Option<Address>,
    /// Error message such as `"Unable to geocode"`.
    pub error: Option<String>,
}

/// Address components of a reverse lookup.
#[derive(Debug, Default, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl Address {
    /// The most specific settlement name available.
    pub fn locality(&self) -> Option<&str> {
        self.city
            .as_deref()
            .or(self.town.as_deref())
            .or(self.village.as_deref())
    }

    /// Join locality, state and country into a label.
    pub fn label(&self) -> Option<AddressLabel> {
        AddressLabel::from_parts([
            self.locality(),
            self.state.as_deref(),
            self.country.as_deref(),
        ])
    }
}
