use std::fmt;

use crate::Coordinate;

/// A display label for a position, such as `"Brooklyn, New York, United States"`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AddressLabel(String);

impl AddressLabel {
    /// Join the non-empty address parts with `", "`.
    ///
    /// Returns `None` when every part is missing or blank.
    ///
    /// ```
    /// use nearcare_core::AddressLabel;
    ///
    /// let label = AddressLabel::from_parts([Some("Albany"), None, Some("United States")]);
    /// assert_eq!(label.map(|l| l.to_string()).as_deref(), Some("Albany, United States"));
    /// assert!(AddressLabel::from_parts([None, Some("  ")]).is_none());
    /// ```
    pub fn from_parts<'a, I>(parts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let joined = parts
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        (!joined.is_empty()).then_some(Self(joined))
    }

    /// Label a coordinate by its components, to four decimal places.
    #[must_use]
    pub fn from_coordinate(at: Coordinate) -> Self {
        Self(format!("{:.4}, {:.4}", at.latitude(), at.longitude()))
    }

    /// Wrap an already formatted label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Borrow the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AddressLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
