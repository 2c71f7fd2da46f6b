//! Web API module for kbd-led-web.
//!
//! This module provides the REST API that bridges a browser UI to the
//! external backlight control utility.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /colors` - Current per-zone backlight colors
//! - `PUT /colors?color=RRGGBB` - Set left, center, and right zones
//! - `PUT /colors/{region}?color=RRGGBB` - Set a single zone
//!
//! # Error shape
//!
//! The wire contract is inherited from the service this replaces and is
//! kept bug-for-bug compatible:
//!
//! - A malformed color answers `400` with an empty JSON object.
//! - An unknown region answers `200` with an embedded `status: 400`
//!   body rather than an HTTP 400.
//! - A failed write invocation is logged and still acknowledged with
//!   `200 OK`; only a failed read surfaces as `500`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::device::{LedController, SystemLedController};
use crate::models::{ColorValue, KeyboardState, SetCommand, Zone};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Backlight capability; a fake is injected in tests.
    controller: Arc<dyn LedController>,
}

impl AppState {
    /// Creates a new application state around a backlight controller.
    pub fn new(controller: Arc<dyn LedController>) -> Self {
        Self { controller }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Query parameters for the color-setting endpoints.
#[derive(Debug, Deserialize)]
pub struct ColorParam {
    /// Requested color as 6 hex digits, no `#` prefix.
    pub color: Option<String>,
}

/// Acknowledgment body with an embedded status code.
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    /// Embedded status code, not always equal to the HTTP status.
    pub status: u16,
    /// Human-readable message.
    pub message: String,
}

impl StatusMessage {
    fn ok() -> Self {
        Self {
            status: 200,
            message: "OK".to_string(),
        }
    }

    fn bad_region() -> Self {
        Self {
            status: 400,
            message: "Incorrect 'region' parameter.".to_string(),
        }
    }
}

/// Empty JSON object body used for bare client and server errors.
fn empty_object() -> Json<Value> {
    Json(serde_json::json!({}))
}

// ============================================================================
// Invocation helpers
// ============================================================================

/// Runs the blocking query invocation off the async runtime.
async fn run_query(controller: Arc<dyn LedController>) -> anyhow::Result<String> {
    tokio::task::spawn_blocking(move || controller.query())
        .await
        .map_err(|e| anyhow::anyhow!("query task failed: {e}"))?
}

/// Runs a blocking set invocation off the async runtime.
async fn run_apply(controller: Arc<dyn LedController>, command: SetCommand) -> anyhow::Result<()> {
    tokio::task::spawn_blocking(move || controller.apply(&command.args()))
        .await
        .map_err(|e| anyhow::anyhow!("apply task failed: {e}"))?
}

/// Validates the `color` query parameter.
///
/// Validation happens before any argument list is built; an invalid or
/// missing color answers `400 {}` and the utility is never invoked.
fn require_color(params: &ColorParam) -> Result<ColorValue, (StatusCode, Json<Value>)> {
    match params.color.as_deref().map(ColorValue::parse) {
        Some(Ok(color)) => Ok(color),
        Some(Err(err)) => {
            debug!("rejected color parameter: {err}");
            Err((StatusCode::BAD_REQUEST, empty_object()))
        }
        None => Err((StatusCode::BAD_REQUEST, empty_object())),
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /colors - Query the current per-zone state.
///
/// Each call invokes the utility afresh and returns a new snapshot;
/// nothing is cached between requests.
async fn get_colors(
    State(state): State<AppState>,
) -> Result<Json<KeyboardState>, (StatusCode, Json<Value>)> {
    match run_query(Arc::clone(&state.controller)).await {
        Ok(stdout) => Ok(Json(KeyboardState::from_output(&stdout))),
        Err(err) => {
            error!("backlight query failed: {err:#}");
            Err((StatusCode::INTERNAL_SERVER_ERROR, empty_object()))
        }
    }
}

/// PUT /colors - Set the left, center, and right zones to one color.
///
/// An invocation failure is logged and still acknowledged with `200 OK`;
/// a caller cannot distinguish a failed write from a successful one
/// without the server log.
async fn set_all_colors(
    State(state): State<AppState>,
    Query(params): Query<ColorParam>,
) -> Result<Json<StatusMessage>, (StatusCode, Json<Value>)> {
    let color = require_color(&params)?;

    match run_apply(Arc::clone(&state.controller), SetCommand::All(color)).await {
        Ok(()) => info!("set all zones"),
        Err(err) => error!("failed to set all zones: {err:#}"),
    }

    Ok(Json(StatusMessage::ok()))
}

/// PUT /colors/{region} - Set a single zone.
///
/// The color is validated before the region, so a request that is wrong
/// on both counts answers `400 {}`. An unknown region answers `200` with
/// an embedded `400` status, and the utility is not invoked.
async fn set_region_color(
    State(state): State<AppState>,
    Path(region): Path<String>,
    Query(params): Query<ColorParam>,
) -> Result<Json<StatusMessage>, (StatusCode, Json<Value>)> {
    let color = require_color(&params)?;

    let Some(zone) = Zone::from_param(&region) else {
        debug!("rejected region parameter: '{region}'");
        return Ok(Json(StatusMessage::bad_region()));
    };

    match run_apply(Arc::clone(&state.controller), SetCommand::Zone(zone, color)).await {
        Ok(()) => info!("set {zone} zone"),
        Err(err) => error!("failed to set {zone} zone: {err:#}"),
    }

    Ok(Json(StatusMessage::ok()))
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins for development.
    // The server is designed to run locally on the user's machine
    // alongside the frontend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Color endpoints
        .route("/colors", get(get_colors).put(set_all_colors))
        .route("/colors/{region}", put(set_region_color))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Arguments
///
/// * `config` - Application configuration
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let controller = Arc::new(SystemLedController::new(config.device.command));
    let state = AppState::new(controller);
    let app = create_router(state);

    info!("Starting kbd-led-web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
