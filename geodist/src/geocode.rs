//! City name geocoding.
//!
//! This module is only available when the `geocode` feature is enabled.
//!
//! The lookup itself is delegated to a Nominatim-compatible search API
//! (OpenStreetMap Nominatim by default). Any provider speaking the same
//! `/search?q=...&format=json` dialect works, including hosted ones that
//! require a `key` query parameter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::config::{default_user_agent, DEFAULT_GEOCODER_URL, DEFAULT_TIMEOUT_SECS};
use crate::coords::GeocodedLocation;
use crate::error::{GeodistError, Result};

/// Maps a place name to candidate locations, best match first.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<GeocodedLocation>>;
}

/// Resolve a city name to the coordinates of the geocoder's first match.
///
/// # Errors
///
/// - [`GeodistError::InvalidQuery`] if `city_name` is blank
/// - [`GeodistError::CityNotFound`] if the geocoder returns no matches
/// - any error the geocoder itself reports
pub async fn lookup_coordinates(
    geocoder: &dyn Geocoder,
    city_name: &str,
) -> Result<GeocodedLocation> {
    let query = city_name.trim();
    if query.is_empty() {
        return Err(GeodistError::InvalidQuery {
            reason: "city_name must not be empty".to_string(),
        });
    }

    geocoder
        .search(query)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| GeodistError::CityNotFound {
            city_name: query.to_string(),
        })
}

/// Configuration for [`NominatimGeocoder`].
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Base URL of the search API, without the `/search` path.
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying User-Agent.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Credential for hosted providers, sent as `key`.
    pub api_key: Option<String>,
    /// Maximum number of matches requested.
    pub limit: u32,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEOCODER_URL.to_string(),
            user_agent: default_user_agent(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key: None,
            limit: 1,
        }
    }
}

impl GeocoderConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// One entry of a Nominatim `format=json` response.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

impl From<NominatimPlace> for GeocodedLocation {
    fn from(place: NominatimPlace) -> Self {
        GeocodedLocation {
            latitude: place.lat,
            longitude: place.lon,
            display_name: place.display_name,
        }
    }
}

/// [`Geocoder`] backed by a Nominatim-compatible HTTP API.
pub struct NominatimGeocoder {
    client: Client,
    search_url: Url,
    config: GeocoderConfig,
}

impl NominatimGeocoder {
    /// Create a new geocoder with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeodistError::InvalidConfig`] if the base URL cannot be
    /// parsed, or [`GeodistError::Http`] if the HTTP client cannot be built.
    pub fn new(config: GeocoderConfig) -> Result<Self> {
        let search_url = build_search_url(&config.base_url)?;
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            search_url,
            config,
        })
    }

    pub fn config(&self) -> &GeocoderConfig {
        &self.config
    }

    pub fn search_url(&self) -> &Url {
        &self.search_url
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn search(&self, query: &str) -> Result<Vec<GeocodedLocation>> {
        let limit = self.config.limit.to_string();
        let mut params = vec![("q", query), ("format", "json"), ("limit", limit.as_str())];
        if let Some(key) = self.config.api_key.as_deref() {
            params.push(("key", key));
        }

        tracing::debug!(query = query, url = %self.search_url, "Geocoder request");

        let response = self
            .client
            .get(self.search_url.clone())
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeodistError::GeocoderStatus {
                status: status.as_u16(),
                url: self.search_url.to_string(),
            });
        }

        let places: Vec<NominatimPlace> = response.json().await?;
        tracing::debug!(query = query, matches = places.len(), "Geocoder response");

        Ok(places.into_iter().map(GeocodedLocation::from).collect())
    }
}

/// Append `/search` to the base URL, tolerating a trailing slash.
fn build_search_url(base_url: &str) -> Result<Url> {
    let normalized = format!("{}/search", base_url.trim_end_matches('/'));
    Url::parse(&normalized).map_err(|e| GeodistError::InvalidConfig {
        name: "geocoder url",
        reason: format!("{} is not a valid url: {}", base_url, e),
    })
}
