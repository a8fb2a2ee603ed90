//! Unit tests for API types serialization/deserialization.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use maturity::AppError;
use maturity::api::{
    HealthResponse, SelectRequest, SessionResponse, StageSummary, ViewModeRequest,
};
use maturity_core::{
    MaturityError, MaturityGrade, NavigationCommand, NavigationController, StageCatalog, StageId,
    ViewMode,
};

// =============================================================================
// HEALTH RESPONSE TESTS
// =============================================================================

#[test]
fn test_health_response_default() {
    let health = HealthResponse::default();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

// =============================================================================
// STAGE SUMMARY TESTS
// =============================================================================

#[test]
fn test_stage_summary_serialization() {
    let catalog = StageCatalog::reference();
    let summary = StageSummary::new(4, catalog.stage_at(4).unwrap());

    assert_eq!(summary.grade, MaturityGrade::A);
    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"id\":\"fly\""));
    assert!(json.contains("\"maturity\":100"));
    assert!(json.contains("\"grade\":\"A\""));
}

// =============================================================================
// REQUEST TESTS
// =============================================================================

fn select_command(body: &str) -> Result<NavigationCommand, AppError> {
    serde_json::from_str::<SelectRequest>(body).unwrap().to_command()
}

#[test]
fn test_select_request_accepts_negative() {
    assert!(matches!(
        select_command(r#"{"index":-1}"#),
        Ok(NavigationCommand::Select { index: -1 })
    ));
    assert_eq!(
        serde_json::to_string(&SelectRequest::new(3)).unwrap(),
        r#"{"index":3}"#
    );
}

#[test]
fn test_select_request_saturates_oversized_integers() {
    assert!(matches!(
        select_command(r#"{"index":9223372036854775808}"#),
        Ok(NavigationCommand::Select { index: i64::MAX })
    ));
    assert!(matches!(
        select_command(r#"{"index":18446744073709551616}"#),
        Ok(NavigationCommand::Select { index: i64::MAX })
    ));
    assert!(matches!(
        select_command(r#"{"index":-1e30}"#),
        Ok(NavigationCommand::Select { index: i64::MIN })
    ));
}

#[test]
fn test_select_request_rejects_fraction() {
    assert!(matches!(
        select_command(r#"{"index":2.5}"#),
        Err(AppError::InvalidRequest(_))
    ));
}

#[test]
fn test_view_mode_request_parsing() {
    let ok: ViewModeRequest = serde_json::from_str(r#"{"mode":"Service"}"#).unwrap();
    assert_eq!(ok.to_mode(), Ok(ViewMode::Service));

    let bad: ViewModeRequest = serde_json::from_str(r#"{"mode":"ops"}"#).unwrap();
    assert_eq!(
        bad.to_mode(),
        Err(MaturityError::InvalidViewMode("ops".to_string()))
    );
}

#[test]
fn test_navigation_command_wire_format() {
    let json = serde_json::to_string(&NavigationCommand::Select { index: 2 }).unwrap();
    assert_eq!(json, r#"{"type":"select","index":2}"#);

    let cmd: NavigationCommand =
        serde_json::from_str(r#"{"type":"set_view_mode","mode":"service"}"#).unwrap();
    assert_eq!(
        cmd,
        NavigationCommand::SetViewMode {
            mode: ViewMode::Service
        }
    );
}

// =============================================================================
// SESSION RESPONSE TESTS
// =============================================================================

#[test]
fn test_session_response_success() {
    let nav = NavigationController::default();
    let response = SessionResponse::success(7, nav.view());

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("\"session_id\":7"));
    assert!(json.contains("\"stage_id\":\"foundation\""));
    assert!(json.contains("\"view_mode\":\"application\""));
    assert!(json.contains("\"error\":null"));
}

#[test]
fn test_session_response_error() {
    let response = SessionResponse::error("Session not found: 3");

    assert!(!response.success);
    assert!(response.session_id.is_none());
    assert!(response.view.is_none());
    assert_eq!(response.error.as_deref(), Some("Session not found: 3"));
}

#[test]
fn test_session_response_round_trip_keeps_view() {
    let mut nav = NavigationController::default();
    nav.select_stage(2).unwrap();
    let response = SessionResponse::success(1, nav.view());

    let json = serde_json::to_string(&response).unwrap();
    let back: SessionResponse = serde_json::from_str(&json).unwrap();

    let view = back.view.unwrap();
    assert_eq!(view.stage_id, StageId::Walk);
    assert_eq!(view.track_percent, 50);
}
