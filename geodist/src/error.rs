//! Error types for the geodist library.

use thiserror::Error;

/// Errors that can occur when geocoding or measuring distances.
#[derive(Error, Debug)]
pub enum GeodistError {
    /// The geocoder returned zero matches for the query.
    #[error("City not found: {city_name}")]
    CityNotFound { city_name: String },

    /// Coordinates are outside the valid WGS84 range.
    #[error("Coordinates out of bounds: lat={lat}, lon={lon} (valid: lat ±90°, lon ±180°)")]
    OutOfBounds { lat: f64, lon: f64 },

    /// The geocoding query was empty or otherwise unusable.
    #[error("Invalid query: {reason}")]
    InvalidQuery { reason: String },

    /// A configuration value could not be parsed.
    #[error("Invalid configuration for {name}: {reason}")]
    InvalidConfig { name: &'static str, reason: String },

    /// Transport or decoding failure talking to the geocoder.
    #[cfg(feature = "geocode")]
    #[error("Geocoder request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The geocoder answered with a non-success status.
    #[error("Geocoder returned status {status} for {url}")]
    GeocoderStatus { status: u16, url: String },
}

impl GeodistError {
    /// Whether the error was caused by bad caller input rather than a
    /// collaborator failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GeodistError::OutOfBounds { .. } | GeodistError::InvalidQuery { .. }
        )
    }
}

/// Result type alias using [`GeodistError`].
pub type Result<T> = std::result::Result<T, GeodistError>;
