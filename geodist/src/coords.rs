//! Coordinate types.
//!
//! Two shapes are used throughout the crate:
//!
//! - [`Coordinates`]: a validated numeric WGS84 position, input to the
//!   distance calculators.
//! - [`GeocodedLocation`]: a position exactly as the geocoder reported it.
//!   Nominatim serves latitude and longitude as decimal strings, and those
//!   strings are handed back to clients unchanged.

use serde::{Deserialize, Serialize};

use crate::error::{GeodistError, Result};

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees (-90 to 90).
    pub lat: f64,
    /// Longitude in decimal degrees (-180 to 180).
    pub lon: f64,
}

impl Coordinates {
    /// Create validated coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeodistError::OutOfBounds`] if either value is non-finite
    /// or outside the WGS84 range.
    ///
    /// # Examples
    ///
    /// ```
    /// use geodist::Coordinates;
    ///
    /// assert!(Coordinates::new(52.52, 13.405).is_ok());
    /// assert!(Coordinates::new(91.0, 0.0).is_err());
    /// ```
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if is_valid_coord(lat, lon) {
            Ok(Self { lat, lon })
        } else {
            Err(GeodistError::OutOfBounds { lat, lon })
        }
    }

    /// Convert to a `geo` point. Note `geo` orders components as (x=lon, y=lat).
    pub fn to_point(self) -> geo::Point<f64> {
        geo::Point::new(self.lon, self.lat)
    }
}

/// Check that coordinates are finite and within WGS84 range.
pub fn is_valid_coord(lat: f64, lon: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}

/// A geocoder match, with coordinates kept in the geocoder's textual form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodedLocation {
    pub latitude: String,
    pub longitude: String,
    /// Human readable name of the match, when the geocoder provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl GeocodedLocation {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
            display_name: None,
        }
    }

    /// Parse the textual coordinates into validated [`Coordinates`].
    ///
    /// # Errors
    ///
    /// Returns [`GeodistError::InvalidQuery`] if either field is not a
    /// decimal number, or [`GeodistError::OutOfBounds`] if it is out of range.
    pub fn to_coordinates(&self) -> Result<Coordinates> {
        let lat = parse_degrees("latitude", &self.latitude)?;
        let lon = parse_degrees("longitude", &self.longitude)?;
        Coordinates::new(lat, lon)
    }
}

fn parse_degrees(field: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| GeodistError::InvalidQuery {
            reason: format!("{} is not a decimal number: {:?}", field, value),
        })
}
