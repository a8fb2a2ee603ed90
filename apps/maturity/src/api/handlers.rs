//! # API Endpoint Handlers
//!
//! Every navigation endpoint goes through [`apply_command`], so the HTTP host
//! and the interactive tour share the controller's command dispatch.

use super::{
    AppState,
    types::{
        HealthResponse, SelectRequest, SessionResponse, StageSummary, StagesResponse,
        ViewModeRequest,
    },
};
use crate::error::AppError;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use maturity_core::NavigationCommand;

// =============================================================================
// ERROR MAPPING
// =============================================================================

/// HTTP status for an application error.
pub fn status_for(error: &AppError) -> StatusCode {
    match error {
        AppError::Maturity(_) | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        AppError::SessionNotFound(_) => StatusCode::NOT_FOUND,
        AppError::SessionLimit(_) => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Config(_) | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(error: &AppError) -> (StatusCode, Json<SessionResponse>) {
    (status_for(error), Json(SessionResponse::error(error.to_string())))
}

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// STAGES HANDLER
// =============================================================================

/// List the catalog.
pub async fn stages_handler(State(state): State<AppState>) -> impl IntoResponse {
    let stages = state
        .catalog
        .iter()
        .enumerate()
        .map(|(index, stage)| StageSummary::new(index, stage))
        .collect();

    (StatusCode::OK, Json(StagesResponse { stages }))
}

// =============================================================================
// SESSION LIFECYCLE
// =============================================================================

/// Start a navigation session.
pub async fn create_session_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut sessions = state.sessions.write().await;
    match sessions.create() {
        Ok((id, nav)) => {
            tracing::debug!(session_id = id, "Session created");
            (StatusCode::CREATED, Json(SessionResponse::success(id, nav.view())))
        }
        Err(e) => {
            tracing::warn!("Session creation rejected: {}", e);
            error_response(&e)
        }
    }
}

/// Current view of a session.
pub async fn get_session_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> impl IntoResponse {
    let sessions = state.sessions.read().await;
    match sessions.get(id) {
        Ok(nav) => (StatusCode::OK, Json(SessionResponse::success(id, nav.view()))),
        Err(e) => error_response(&e),
    }
}

/// End a session.
pub async fn delete_session_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> impl IntoResponse {
    let mut sessions = state.sessions.write().await;
    match sessions.remove(id) {
        Ok(()) => {
            tracing::debug!(session_id = id, "Session closed");
            (StatusCode::OK, Json(SessionResponse::closed(id)))
        }
        Err(e) => error_response(&e),
    }
}

// =============================================================================
// NAVIGATION HANDLERS
// =============================================================================

/// Body rejection as an application error.
fn rejection_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::BytesRejection(r) if r.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            AppError::PayloadTooLarge(r.body_text())
        }
        other => AppError::InvalidRequest(other.body_text()),
    }
}

/// Jump to a stage.
pub async fn select_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Json<SelectRequest>, JsonRejection>,
) -> impl IntoResponse {
    let command = payload
        .map_err(rejection_error)
        .and_then(|Json(request)| request.to_command());
    apply_command(&state, id, command).await
}

/// Step forward.
pub async fn next_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> impl IntoResponse {
    apply_command(&state, id, Ok(NavigationCommand::Advance)).await
}

/// Step back.
pub async fn prev_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> impl IntoResponse {
    apply_command(&state, id, Ok(NavigationCommand::Retreat)).await
}

/// Switch the item list.
pub async fn view_mode_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Json<ViewModeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let command = payload
        .map_err(rejection_error)
        .and_then(|Json(request)| request.to_mode().map_err(AppError::from))
        .map(|mode| NavigationCommand::SetViewMode { mode });
    apply_command(&state, id, command).await
}

/// Run one command against a session and return the resulting view.
///
/// The session is resolved first: an unknown id is a 404 whatever the body
/// held. A bad body is reported only for a live session.
async fn apply_command(
    state: &AppState,
    id: u64,
    command: Result<NavigationCommand, AppError>,
) -> (StatusCode, Json<SessionResponse>) {
    let mut sessions = state.sessions.write().await;
    let nav = match sessions.get_mut(id) {
        Ok(nav) => nav,
        Err(e) => return error_response(&e),
    };

    let result = command.and_then(|cmd| nav.apply(cmd).map_err(AppError::from));
    match result {
        Ok(()) => (StatusCode::OK, Json(SessionResponse::success(id, nav.view()))),
        Err(e) => {
            tracing::debug!(session_id = id, "Command rejected: {}", e);
            error_response(&e)
        }
    }
}
