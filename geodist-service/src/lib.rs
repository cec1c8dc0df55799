//! geodist Service Library
//!
//! HTTP handlers, router and types for the geodist service.
//! This library is used by both the geodist-service binary and integration tests.

pub mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use geodist::{DistanceCalculator, Geocoder};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Application state shared across handlers.
pub struct AppState {
    /// Geocoding collaborator for city lookups.
    pub geocoder: Box<dyn Geocoder>,
    /// Distance formula used by `/get_distance/`.
    pub distance: Box<dyn DistanceCalculator>,
}

impl AppState {
    pub fn new(
        geocoder: impl Geocoder + 'static,
        distance: impl DistanceCalculator + 'static,
    ) -> Self {
        Self {
            geocoder: Box::new(geocoder),
            distance: Box::new(distance),
        }
    }
}

/// Build the service router.
///
/// Both lookup routes answer with and without a trailing slash.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/get_coordinates/", get(handlers::get_coordinates))
        .route("/get_coordinates", get(handlers::get_coordinates))
        .route("/get_distance/", get(handlers::get_distance))
        .route("/get_distance", get(handlers::get_distance))
        .route("/health", get(handlers::health_check))
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

// Re-export commonly used types for convenience
pub use handlers::{
    ApiError, CoordinatesQuery, CoordinatesResponse, DistanceQuery, DistanceResponse,
    ErrorResponse, HealthResponse,
};
