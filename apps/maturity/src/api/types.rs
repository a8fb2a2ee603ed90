//! # API Request/Response Types
//!
//! JSON structures for the HTTP API.

use crate::error::AppError;
use maturity_core::{
    MaturityError, MaturityGrade, NavigationCommand, Stage, StageId, StageView, ViewMode,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// STAGES RESPONSE
// =============================================================================

/// One catalog entry, as listed by `GET /stages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSummary {
    pub index: usize,
    pub id: StageId,
    pub title: String,
    pub subtitle: String,
    pub maturity: u8,
    pub grade: MaturityGrade,
    pub application_items: usize,
    pub service_items: usize,
}

impl StageSummary {
    #[must_use]
    pub fn new(index: usize, stage: &Stage) -> Self {
        Self {
            index,
            id: stage.id,
            title: stage.title.clone(),
            subtitle: stage.subtitle.clone(),
            maturity: stage.maturity,
            grade: MaturityGrade::from_maturity(stage.maturity),
            application_items: stage.items[ViewMode::Application].len(),
            service_items: stage.items[ViewMode::Service].len(),
        }
    }
}

/// Catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagesResponse {
    pub stages: Vec<StageSummary>,
}

// =============================================================================
// NAVIGATION REQUESTS
// =============================================================================

/// Float indices at or above 2^63 do not fit in `i64`.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Float indices below -2^63 do not fit in `i64`.
const I64_LOWER: f64 = -I64_UPPER;

/// Body of `POST /sessions/{id}/select`.
///
/// Any JSON number is accepted so that negative and oversized indices reach
/// the controller and are rejected there as `InvalidIndex`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectRequest {
    pub index: serde_json::Number,
}

impl SelectRequest {
    #[must_use]
    pub fn new(index: i64) -> Self {
        Self {
            index: index.into(),
        }
    }

    /// Resolve the body into a select command.
    ///
    /// Integers outside `i64` saturate, so the controller still answers with
    /// `InvalidIndex`. A fractional index is not an index at all.
    pub fn to_command(&self) -> Result<NavigationCommand, AppError> {
        if let Some(index) = self.index.as_i64() {
            return Ok(NavigationCommand::Select { index });
        }
        if self.index.is_u64() {
            return Ok(NavigationCommand::Select { index: i64::MAX });
        }

        match self.index.as_f64() {
            Some(f) if f >= I64_UPPER => Ok(NavigationCommand::Select { index: i64::MAX }),
            Some(f) if f < I64_LOWER => Ok(NavigationCommand::Select { index: i64::MIN }),
            _ => Err(AppError::InvalidRequest(format!(
                "stage index must be an integer, got {}",
                self.index
            ))),
        }
    }
}

/// Body of `POST /sessions/{id}/view-mode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewModeRequest {
    pub mode: String,
}

impl ViewModeRequest {
    /// Parse the mode string into the closed enum.
    pub fn to_mode(&self) -> Result<ViewMode, MaturityError> {
        self.mode.parse()
    }
}

// =============================================================================
// SESSION RESPONSE
// =============================================================================

/// Envelope for every session endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub success: bool,
    pub session_id: Option<u64>,
    pub view: Option<StageView>,
    pub error: Option<String>,
}

impl SessionResponse {
    pub fn success(session_id: u64, view: StageView) -> Self {
        Self {
            success: true,
            session_id: Some(session_id),
            view: Some(view),
            error: None,
        }
    }

    /// Success without a view (session deleted).
    pub fn closed(session_id: u64) -> Self {
        Self {
            success: true,
            session_id: Some(session_id),
            view: None,
            error: None,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            session_id: None,
            view: None,
            error: Some(msg.into()),
        }
    }
}
