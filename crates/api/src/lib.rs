//! # Studiobook API
//!
//! The API crate provides the web server for the fitness-studio booking
//! service: list upcoming classes, create classes, book a class, and list
//! bookings and clients.
//!
//! ## Architecture
//!
//! - **Routes**: define API endpoints and URL structure
//! - **Handlers**: translate requests into allocator/query calls
//! - **Middleware**: map domain errors onto HTTP responses
//! - **Config**: environment-driven application configuration
//!
//! The API uses Axum as the web framework; persistence is reached through
//! the `StudioStore` trait so tests can run the full router against an
//! in-memory store.

/// Configuration module for API settings
pub mod config;
/// Request handlers that invoke the allocator and query façade
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use chrono_tz::Tz;
use eyre::Result;
use studiobook_core::store::StudioStore;
use studiobook_db::DbPool;
use studiobook_db::store::PgStore;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state accessible to all request handlers.
pub struct ApiState {
    /// Persistence backend shared by the allocator and the query façade
    pub store: Arc<dyn StudioStore>,
    /// Timezone used when a request does not name a valid one
    pub default_timezone: Tz,
}

/// Builds the application router with all routes attached to `state`.
///
/// Factored out of [`start_server`] so tests can drive the exact same
/// router with an in-memory store.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Class catalog endpoints
        .merge(routes::classes::routes())
        // Booking endpoints
        .merge(routes::bookings::routes())
        // Client listing endpoint
        .merge(routes::clients::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and database pool.
///
/// Initializes logging, builds the router over a PostgreSQL-backed store,
/// applies CORS and timeout layers, and serves until shutdown.
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState {
        store: Arc::new(PgStore::new(db_pool)),
        default_timezone: config.default_timezone,
    });

    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .filter_map(|origin| origin.parse::<axum::http::HeaderValue>().ok())
            .collect::<Vec<_>>();
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(tower_http::cors::AllowOrigin::list(origins));

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
