//! HTTP request handlers for the geodist service.

use axum::{
    extract::{rejection::QueryRejection, FromRequestParts, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use geodist::{lookup_coordinates, Coordinates, DistanceCalculator, GeodistError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::AppState;

/// Query parameters for the coordinates endpoint.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CoordinatesQuery {
    /// Free-form place name, e.g. "Lima, Peru".
    pub city_name: String,
}

/// Query parameters for the distance endpoint.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct DistanceQuery {
    /// Latitude of the first point in decimal degrees (-90 to 90).
    pub lat1: f64,
    /// Longitude of the first point in decimal degrees (-180 to 180).
    pub lon1: f64,
    /// Latitude of the second point in decimal degrees (-90 to 90).
    pub lat2: f64,
    /// Longitude of the second point in decimal degrees (-180 to 180).
    pub lon2: f64,
}

/// Coordinates of the first geocoder match.
///
/// Values are passed through exactly as the geocoder reported them
/// (Nominatim uses decimal strings).
#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct CoordinatesResponse {
    pub latitude: String,
    pub longitude: String,
}

/// Distance between two points.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DistanceResponse {
    /// Distance in kilometers.
    pub distance: f64,
}

/// Error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Errors surfaced by the handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Query string missing a parameter or carrying a malformed one.
    InvalidParameters(String),
    /// Failure reported by the library.
    Geodist(GeodistError),
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidParameters(rejection.body_text())
    }
}

impl From<GeodistError> for ApiError {
    fn from(e: GeodistError) -> Self {
        ApiError::Geodist(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameters(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Geodist(GeodistError::CityNotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Geodist(e) if e.is_validation() => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Geodist(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::InvalidParameters(reason) => {
                tracing::warn!(reason = %reason, "Rejected query parameters");
                reason.clone()
            }
            ApiError::Geodist(e) if status.is_server_error() => {
                // Collaborator details stay in the logs
                tracing::error!(error = %e, "Request failed");
                "Internal server error".to_string()
            }
            ApiError::Geodist(e) => {
                tracing::warn!(error = %e, "Request failed");
                e.to_string()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// `Query` extractor that rejects with a JSON 422 instead of axum's
/// plain-text 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Resolve a city name to coordinates.
///
/// # Query Parameters
///
/// - `city_name`: Place name to geocode
///
/// # Returns
///
/// - `200 OK` with the first match's latitude and longitude
/// - `404 Not Found` if the geocoder has no match
/// - `422 Unprocessable Entity` if `city_name` is missing or blank
/// - `500 Internal Server Error` if the geocoder fails
#[utoipa::path(
    get,
    path = "/get_coordinates/",
    params(CoordinatesQuery),
    responses(
        (status = 200, description = "Coordinates found", body = CoordinatesResponse),
        (status = 404, description = "No geocoder match", body = ErrorResponse),
        (status = 422, description = "Missing or invalid parameters", body = ErrorResponse),
        (status = 500, description = "Geocoder failure", body = ErrorResponse)
    ),
    tag = "geocoding"
)]
pub async fn get_coordinates(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<CoordinatesQuery>,
) -> Result<Json<CoordinatesResponse>, ApiError> {
    tracing::debug!(city_name = %query.city_name, "Coordinates query");

    let location = lookup_coordinates(state.geocoder.as_ref(), &query.city_name).await?;

    tracing::info!(
        city_name = %query.city_name,
        latitude = %location.latitude,
        longitude = %location.longitude,
        "Coordinates found"
    );

    Ok(Json(CoordinatesResponse {
        latitude: location.latitude,
        longitude: location.longitude,
    }))
}

/// Compute the distance between two coordinate pairs.
///
/// # Query Parameters
///
/// - `lat1`, `lon1`: First point in decimal degrees
/// - `lat2`, `lon2`: Second point in decimal degrees
///
/// # Returns
///
/// - `200 OK` with the distance in kilometers
/// - `422 Unprocessable Entity` if a parameter is missing, malformed, or out of range
#[utoipa::path(
    get,
    path = "/get_distance/",
    params(DistanceQuery),
    responses(
        (status = 200, description = "Distance computed", body = DistanceResponse),
        (status = 422, description = "Missing or invalid parameters", body = ErrorResponse)
    ),
    tag = "distance"
)]
pub async fn get_distance(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<DistanceQuery>,
) -> Result<Json<DistanceResponse>, ApiError> {
    tracing::debug!(
        lat1 = query.lat1,
        lon1 = query.lon1,
        lat2 = query.lat2,
        lon2 = query.lon2,
        "Distance query"
    );

    let from = Coordinates::new(query.lat1, query.lon1)?;
    let to = Coordinates::new(query.lat2, query.lon2)?;
    let distance = state.distance.distance_km(from, to);

    tracing::info!(distance_km = distance, "Distance computed");

    Ok(Json(DistanceResponse { distance }))
}

/// Health check endpoint.
///
/// Returns service status and version.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse)),
    tag = "system"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
