//! geodist Service - HTTP microservice for city coordinates and distances.
//!
//! A small REST API that resolves city names through a Nominatim-compatible
//! geocoder and measures geodesic distances between coordinate pairs.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `GEODIST_PORT` | HTTP server port | 8080 |
//! | `GEODIST_GEOCODER_URL` | Nominatim-compatible base URL | `https://nominatim.openstreetmap.org` |
//! | `GEODIST_USER_AGENT` | User-Agent sent to the geocoder | `geodist/<version>` |
//! | `GEODIST_API_KEY` | Credential for hosted geocoders | None |
//! | `GEODIST_TIMEOUT_SECS` | Geocoder request timeout | 10 |
//! | `GEODIST_DISTANCE_METHOD` | `geodesic` or `haversine` | `geodesic` |
//! | `RUST_LOG` | Log filter (e.g., "info", "debug") | "geodist_service=info,geodist=info,tower_http=info" |
//!
//! ## Endpoints
//!
//! - `GET /get_coordinates/?city_name=X` - Coordinates of the first geocoder match
//! - `GET /get_distance/?lat1=A&lon1=B&lat2=C&lon2=D` - Distance in kilometers
//! - `GET /health` - Health check
//! - `GET /docs` - OpenAPI documentation (Swagger UI)

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use geodist::GeodistConfigBuilder;
use geodist_service::{app, handlers, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation for the geodist service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "geodist Service",
        version = "0.1.0",
        description = "City geocoding and geodesic distance REST API.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "Pedro Sanz Martinez", url = "https://github.com/pedrosanzmtz/geodist")
    ),
    paths(
        handlers::get_coordinates,
        handlers::get_distance,
        handlers::health_check,
    ),
    components(
        schemas(
            handlers::CoordinatesResponse,
            handlers::DistanceResponse,
            handlers::ErrorResponse,
            handlers::HealthResponse,
        )
    ),
    tags(
        (name = "geocoding", description = "City name lookup"),
        (name = "distance", description = "Distance between coordinate pairs"),
        (name = "system", description = "System and health endpoints")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geodist_service=info,geodist=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load port from environment (service-specific config)
    let port: u16 = std::env::var("GEODIST_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);

    // The library handles: GEODIST_GEOCODER_URL, GEODIST_USER_AGENT,
    // GEODIST_API_KEY, GEODIST_TIMEOUT_SECS, GEODIST_DISTANCE_METHOD
    let config = GeodistConfigBuilder::from_env()?.build();
    let geocoder = config.build_geocoder()?;

    tracing::info!(
        geocoder_url = %config.geocoder_url,
        user_agent = %config.user_agent,
        api_key = config.api_key.is_some(),
        timeout_secs = config.timeout_secs,
        distance_method = %config.distance_method,
        port = port,
        "Starting geodist service"
    );

    let state = Arc::new(AppState {
        geocoder: Box::new(geocoder),
        distance: config.distance_method.calculator(),
    });

    // Build router
    let router = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(app(state));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
