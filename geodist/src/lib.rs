//! # geodist - City Geocoding & Distance Library
//!
//! Resolve city names to coordinates and measure the distance between two
//! positions on the Earth's surface.
//!
//! ## Features
//!
//! - **Geodesic distances**: Karney's algorithm on the WGS84 ellipsoid (via `geo`)
//! - **Haversine distances**: cheaper spherical approximation
//! - **Geocoding** (`geocode` feature): Nominatim-compatible city lookup
//!
//! ## Quick Start
//!
//! ```
//! use geodist::{Coordinates, DistanceCalculator, GeodesicCalculator};
//!
//! let london = Coordinates::new(51.5074, -0.1278)?;
//! let paris = Coordinates::new(48.8566, 2.3522)?;
//!
//! let km = GeodesicCalculator.distance_km(london, paris);
//! assert!((km - 343.9).abs() < 5.0);
//! # Ok::<(), geodist::GeodistError>(())
//! ```
//!
//! ## Geocoding
//!
//! ```ignore
//! use geodist::{geocode::lookup_coordinates, GeodistConfigBuilder};
//!
//! let geocoder = GeodistConfigBuilder::from_env()?.build().build_geocoder()?;
//! let location = lookup_coordinates(&geocoder, "Lima, Peru").await?;
//! println!("{}, {}", location.latitude, location.longitude);
//! ```

pub mod config;
pub mod coords;
pub mod distance;
pub mod error;

#[cfg(feature = "geocode")]
pub mod geocode;

// Re-export main types at crate root for convenience
pub use config::{GeodistConfig, GeodistConfigBuilder};
pub use coords::{Coordinates, GeocodedLocation};
pub use distance::{DistanceCalculator, DistanceMethod, GeodesicCalculator, HaversineCalculator};
pub use error::{GeodistError, Result};

#[cfg(feature = "geocode")]
pub use geocode::{lookup_coordinates, Geocoder, GeocoderConfig, NominatimGeocoder};
