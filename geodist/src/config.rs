//! Runtime configuration.
//!
//! [`GeodistConfig`] collects everything the collaborators need: where the
//! geocoder lives, how to identify to it, and which distance formula to use.
//! Build one with [`GeodistConfigBuilder`], either from scratch or from the
//! environment.
//!
//! ```ignore
//! use geodist::{DistanceMethod, GeodistConfigBuilder};
//!
//! let config = GeodistConfigBuilder::from_env()?
//!     .distance_method(DistanceMethod::Haversine)
//!     .build();
//! ```

use crate::distance::DistanceMethod;
use crate::error::{GeodistError, Result};

/// Default geocoder endpoint.
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Default geocoder timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User-Agent sent to the geocoder when none is configured.
pub fn default_user_agent() -> String {
    format!("geodist/{}", env!("CARGO_PKG_VERSION"))
}

/// Resolved configuration.
#[derive(Debug, Clone)]
pub struct GeodistConfig {
    pub geocoder_url: String,
    pub user_agent: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub distance_method: DistanceMethod,
}

impl Default for GeodistConfig {
    fn default() -> Self {
        GeodistConfigBuilder::new().build()
    }
}

impl GeodistConfig {
    /// Geocoder settings derived from this configuration.
    #[cfg(feature = "geocode")]
    pub fn geocoder_config(&self) -> crate::geocode::GeocoderConfig {
        let config = crate::geocode::GeocoderConfig::with_base_url(&self.geocoder_url)
            .with_user_agent(&self.user_agent)
            .with_timeout(self.timeout_secs);

        match &self.api_key {
            Some(key) => config.with_api_key(key),
            None => config,
        }
    }

    /// Build the Nominatim geocoder for this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the geocoder URL is invalid or the HTTP client
    /// cannot be created (e.g., due to TLS initialization failure).
    #[cfg(feature = "geocode")]
    pub fn build_geocoder(&self) -> Result<crate::geocode::NominatimGeocoder> {
        crate::geocode::NominatimGeocoder::new(self.geocoder_config())
    }
}

/// Builder for [`GeodistConfig`].
#[derive(Debug, Clone)]
pub struct GeodistConfigBuilder {
    geocoder_url: String,
    user_agent: Option<String>,
    api_key: Option<String>,
    timeout_secs: u64,
    distance_method: DistanceMethod,
}

impl Default for GeodistConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeodistConfigBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self {
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            user_agent: None,
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            distance_method: DistanceMethod::default(),
        }
    }

    /// Create a builder configured from environment variables.
    ///
    /// # Environment Variables
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `GEODIST_GEOCODER_URL` | Nominatim-compatible base URL | `https://nominatim.openstreetmap.org` |
    /// | `GEODIST_USER_AGENT` | User-Agent sent to the geocoder | `geodist/<version>` |
    /// | `GEODIST_API_KEY` | Credential for hosted geocoders | None |
    /// | `GEODIST_TIMEOUT_SECS` | Geocoder request timeout | 10 |
    /// | `GEODIST_DISTANCE_METHOD` | `geodesic` or `haversine` | `geodesic` |
    ///
    /// # Errors
    ///
    /// Returns [`GeodistError::InvalidConfig`] if `GEODIST_TIMEOUT_SECS` is
    /// not a positive integer or `GEODIST_DISTANCE_METHOD` is unknown.
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::new();

        if let Some(url) = non_empty_var("GEODIST_GEOCODER_URL") {
            builder.geocoder_url = url;
        }
        builder.user_agent = non_empty_var("GEODIST_USER_AGENT");
        builder.api_key = non_empty_var("GEODIST_API_KEY");

        if let Some(timeout) = non_empty_var("GEODIST_TIMEOUT_SECS") {
            builder.timeout_secs = parse_timeout(&timeout)?;
        }

        if let Some(method) = non_empty_var("GEODIST_DISTANCE_METHOD") {
            builder.distance_method = method.parse()?;
        }

        Ok(builder)
    }

    pub fn geocoder_url(mut self, url: impl Into<String>) -> Self {
        self.geocoder_url = url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the geocoder request timeout.
    ///
    /// Default is 10 seconds.
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn distance_method(mut self, method: DistanceMethod) -> Self {
        self.distance_method = method;
        self
    }

    /// Build the [`GeodistConfig`].
    pub fn build(self) -> GeodistConfig {
        GeodistConfig {
            geocoder_url: self.geocoder_url,
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
            api_key: self.api_key,
            timeout_secs: self.timeout_secs,
            distance_method: self.distance_method,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_timeout(value: &str) -> Result<u64> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(GeodistError::InvalidConfig {
            name: "GEODIST_TIMEOUT_SECS",
            reason: format!("expected a positive integer, got {:?}", value),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-global
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "GEODIST_GEOCODER_URL",
        "GEODIST_USER_AGENT",
        "GEODIST_API_KEY",
        "GEODIST_TIMEOUT_SECS",
        "GEODIST_DISTANCE_METHOD",
    ];

    /// Run `f` with the given variables set and all other GEODIST_* unset,
    /// restoring the original values afterwards.
    fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let original: Vec<_> = VARS.iter().map(|v| (*v, std::env::var(v).ok())).collect();

        for var in VARS {
            std::env::remove_var(var);
        }
        for (name, value) in vars {
            std::env::set_var(name, value);
        }

        let result = f();

        for (name, value) in original {
            match value {
                Some(v) => std::env::set_var(name, v),
                None => std::env::remove_var(name),
            }
        }
        result
    }

    #[test]
    fn test_defaults() {
        let config = GeodistConfigBuilder::new().build();
        assert_eq!(config.geocoder_url, DEFAULT_GEOCODER_URL);
        assert!(config.user_agent.starts_with("geodist/"));
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.distance_method, DistanceMethod::Geodesic);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = GeodistConfigBuilder::new()
            .geocoder_url("http://localhost:8088")
            .user_agent("my-app/2.0")
            .api_key("secret")
            .timeout_secs(3)
            .distance_method(DistanceMethod::Haversine)
            .build();

        assert_eq!(config.geocoder_url, "http://localhost:8088");
        assert_eq!(config.user_agent, "my-app/2.0");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.distance_method, DistanceMethod::Haversine);
    }

    #[test]
    fn test_from_env_empty() {
        let config = with_env(&[], || GeodistConfigBuilder::from_env().unwrap().build());
        assert_eq!(config.geocoder_url, DEFAULT_GEOCODER_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_from_env_with_values() {
        let config = with_env(
            &[
                ("GEODIST_GEOCODER_URL", "http://geocoder.internal"),
                ("GEODIST_USER_AGENT", "ops/1.0"),
                ("GEODIST_API_KEY", "k"),
                ("GEODIST_TIMEOUT_SECS", "30"),
                ("GEODIST_DISTANCE_METHOD", "haversine"),
            ],
            || GeodistConfigBuilder::from_env().unwrap().build(),
        );

        assert_eq!(config.geocoder_url, "http://geocoder.internal");
        assert_eq!(config.user_agent, "ops/1.0");
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.distance_method, DistanceMethod::Haversine);
    }

    #[test]
    fn test_from_env_invalid_timeout() {
        let result = with_env(&[("GEODIST_TIMEOUT_SECS", "soon")], GeodistConfigBuilder::from_env);
        assert!(matches!(result, Err(GeodistError::InvalidConfig { .. })));

        let result = with_env(&[("GEODIST_TIMEOUT_SECS", "0")], GeodistConfigBuilder::from_env);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_env_invalid_method() {
        let result = with_env(
            &[("GEODIST_DISTANCE_METHOD", "flat-earth")],
            GeodistConfigBuilder::from_env,
        );
        assert!(matches!(result, Err(GeodistError::InvalidConfig { .. })));
    }

    #[cfg(feature = "geocode")]
    #[test]
    fn test_geocoder_config() {
        let config = GeodistConfigBuilder::new()
            .geocoder_url("http://localhost:9000")
            .api_key("abc")
            .timeout_secs(5)
            .build()
            .geocoder_config();

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.timeout_secs, 5);
    }
}
