//! # Maturity HTTP API Module
//!
//! HTTP REST API server using axum. Each client session owns one navigation
//! controller; every response carries the resolved `StageView`.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /stages` - Catalog listing
//! - `POST /sessions` - Start a session
//! - `GET /sessions/{id}` - Current view
//! - `DELETE /sessions/{id}` - End a session
//! - `POST /sessions/{id}/select` - Jump to a stage (`{"index": 2}`)
//! - `POST /sessions/{id}/next` - Step forward
//! - `POST /sessions/{id}/prev` - Step back
//! - `POST /sessions/{id}/view-mode` - Switch item list (`{"mode": "service"}`)
//!
//! Security settings (CORS, rate limit, API key) come from `ServerConfig`.

mod auth;
mod handlers;
mod middleware;
mod sessions;
mod types;

pub use auth::{ApiKey, keys_match};
pub use handlers::status_for;
pub use middleware::{GlobalRateLimiter, create_rate_limiter};
pub use sessions::{SessionId, SessionStore};
pub use types::{
    HealthResponse, SelectRequest, SessionResponse, StageSummary, StagesResponse,
    ViewModeRequest,
};

use crate::config::ServerConfig;
use crate::error::AppError;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use maturity_core::StageCatalog;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Request body limit. Navigation bodies are a few bytes.
const BODY_LIMIT_BYTES: usize = 64 * 1024;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state.
#[derive(Clone)]
pub struct AppState {
    /// Read-only catalog shared by every session.
    pub catalog: Arc<StageCatalog>,
    /// Live navigation sessions.
    pub sessions: Arc<RwLock<SessionStore>>,
    /// Settings the router was built from.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create state over a catalog.
    #[must_use]
    pub fn new(catalog: StageCatalog, config: ServerConfig) -> Self {
        let catalog = Arc::new(catalog);
        let sessions = SessionStore::new(Arc::clone(&catalog), config.max_sessions);
        Self {
            catalog,
            sessions: Arc::new(RwLock::new(sessions)),
            config: Arc::new(config),
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build the CORS layer from configured origins.
///
/// - `["*"]`: any origin (development only)
/// - empty: localhost only
/// - otherwise: the listed origins; unparsable entries are skipped
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS: Allowing ALL origins. This is insecure for production!");
        return CorsLayer::permissive();
    }

    if origins.is_empty() {
        tracing::info!("CORS: No origins configured, defaulting to localhost only");
        return build_localhost_cors();
    }

    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(hv) => {
                tracing::info!("CORS: Allowing origin: {}", origin);
                Some(hv)
            }
            Err(e) => {
                tracing::warn!("CORS: Invalid origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    if allowed_origins.is_empty() {
        tracing::warn!("CORS: No valid origins configured, defaulting to localhost only");
        return build_localhost_cors();
    }

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Restrictive CORS layer for local development front-ends.
fn build_localhost_cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        "http://localhost:3000",
        "http://localhost:5173",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:5173",
    ]
    .into_iter()
    .filter_map(|o| o.parse::<HeaderValue>().ok())
    .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests, rejections included
/// 2. CORS - handles preflight requests
/// 3. Body limit
/// 4. Rate Limiting - if `rate_limit > 0`
/// 5. Authentication - if an API key is configured
pub fn create_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);
    let cors = build_cors_layer(&config.cors_origins);

    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/stages", get(handlers::stages_handler))
        .route("/sessions", post(handlers::create_session_handler))
        .route(
            "/sessions/{id}",
            get(handlers::get_session_handler).delete(handlers::delete_session_handler),
        )
        .route("/sessions/{id}/select", post(handlers::select_handler))
        .route("/sessions/{id}/next", post(handlers::next_handler))
        .route("/sessions/{id}/prev", post(handlers::prev_handler))
        .route("/sessions/{id}/view-mode", post(handlers::view_mode_handler));

    if let Some(key) = config.api_key() {
        tracing::info!("API key authentication enabled");
        let key: ApiKey = Arc::from(key);
        router = router.layer(axum_middleware::from_fn_with_state(
            key,
            auth::api_key_auth_middleware,
        ));
    } else {
        tracing::warn!(
            "API key authentication DISABLED - all endpoints are publicly accessible! \
             Set MATURITY_API_KEY or server.api_key to enable authentication."
        );
    }

    if config.rate_limit > 0 {
        tracing::info!("Rate limiting enabled: {} requests/second", config.rate_limit);
        router = router.layer(axum_middleware::from_fn_with_state(
            create_rate_limiter(config.rate_limit),
            middleware::rate_limit_middleware,
        ));
    } else {
        tracing::info!("Rate limiting disabled");
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES)),
        )
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Bind and serve until Ctrl+C.
pub async fn run_server(state: AppState) -> Result<(), AppError> {
    let addr = state.config.bind_addr();
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Io(format!("Bind failed on {}: {}", addr, e)))?;

    tracing::info!("Maturity HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Io(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
