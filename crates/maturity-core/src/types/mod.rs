//! # Core Type Definitions
//!
//! This module contains the data model of the maturity simulator:
//! - Stage identifiers and view modes (`StageId`, `ViewMode`)
//! - Stage records and their payloads (`Stage`, `StageItems`, `Item`, `Kpi`)
//! - Error types (`MaturityError`)
//!
//! Both enums are closed. Free-form strings only enter the model through
//! `FromStr`, which is where `UnknownStage` and `InvalidViewMode` are raised.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// STAGE IDENTIFIER
// =============================================================================

/// Identifier of one step of the maturity journey.
///
/// The declaration order is the journey order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageId {
    Foundation,
    Crawl,
    Walk,
    Run,
    Fly,
}

impl StageId {
    /// All identifiers in journey order.
    pub const ALL: [StageId; 5] = [
        StageId::Foundation,
        StageId::Crawl,
        StageId::Walk,
        StageId::Run,
        StageId::Fly,
    ];

    /// Wire name of the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            StageId::Foundation => "foundation",
            StageId::Crawl => "crawl",
            StageId::Walk => "walk",
            StageId::Run => "run",
            StageId::Fly => "fly",
        }
    }
}

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageId {
    type Err = MaturityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        StageId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MaturityError::UnknownStage(trimmed.to_string()))
    }
}

// =============================================================================
// VIEW MODE
// =============================================================================

/// Perspective used to pick which item list of a stage is shown.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Application,
    Service,
}

impl ViewMode {
    /// Both modes, application first.
    pub const ALL: [ViewMode; 2] = [ViewMode::Application, ViewMode::Service];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Application => "application",
            ViewMode::Service => "service",
        }
    }

    /// The other mode. Used by toggle-style controls.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            ViewMode::Application => ViewMode::Service,
            ViewMode::Service => ViewMode::Application,
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = MaturityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ViewMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MaturityError::InvalidViewMode(trimmed.to_string()))
    }
}

// =============================================================================
// ITEM & KPI
// =============================================================================

/// A labeled entry shown inside a stage for one view mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique within its stage + mode list.
    pub id: String,
    pub label: String,
    pub description: String,
}

impl Item {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Simulated KPI shown on the stage scorecard. `value` is a percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: u8,
}

impl Kpi {
    #[must_use]
    pub fn new(label: impl Into<String>, value: u8) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

// =============================================================================
// STAGE ITEMS
// =============================================================================

/// The two item lists of a stage, one per [`ViewMode`].
///
/// Both lists are always present; either may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StageItems {
    pub application: Vec<Item>,
    pub service: Vec<Item>,
}

impl StageItems {
    #[must_use]
    pub fn new(application: Vec<Item>, service: Vec<Item>) -> Self {
        Self {
            application,
            service,
        }
    }

    /// Items for the given mode, in catalog order.
    #[must_use]
    pub fn for_mode(&self, mode: ViewMode) -> &[Item] {
        match mode {
            ViewMode::Application => &self.application,
            ViewMode::Service => &self.service,
        }
    }
}

impl std::ops::Index<ViewMode> for StageItems {
    type Output = [Item];

    fn index(&self, mode: ViewMode) -> &Self::Output {
        self.for_mode(mode)
    }
}

// =============================================================================
// STAGE
// =============================================================================

/// One step of the maturity journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub id: StageId,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Maturity score, 0..=100.
    pub maturity: u8,
    pub kpis: Vec<Kpi>,
    pub items: StageItems,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by the catalog and the navigation controller.
///
/// All of them are contract violations detected at the boundary. State is
/// never modified when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaturityError {
    /// Stage index outside `[0, len)`.
    #[error("Invalid stage index {index} (catalog has {len} stages)")]
    InvalidIndex { index: i64, len: usize },

    /// View mode string that is neither "application" nor "service".
    #[error("Invalid view mode: {0:?}")]
    InvalidViewMode(String),

    /// Stage identifier string outside the five known stages.
    #[error("Unknown stage: {0:?}")]
    UnknownStage(String),

    /// Navigation command text that could not be parsed.
    #[error("Invalid command: {0:?}")]
    InvalidCommand(String),

    /// A catalog must hold at least one stage.
    #[error("Stage catalog is empty")]
    EmptyCatalog,

    /// The same stage identifier appears twice in a catalog.
    #[error("Duplicate stage in catalog: {0}")]
    DuplicateStage(StageId),

    /// Maturity score above 100.
    #[error("Stage {stage} has maturity {value}, expected 0..=100")]
    InvalidMaturity { stage: StageId, value: u8 },

    /// KPI value above 100.
    #[error("Stage {stage} KPI {label:?} has value {value}, expected 0..=100")]
    InvalidKpi {
        stage: StageId,
        label: String,
        value: u8,
    },

    /// Two items of one stage + mode list share an id.
    #[error("Stage {stage} has duplicate {mode} item id {id:?}")]
    DuplicateItem {
        stage: StageId,
        mode: ViewMode,
        id: String,
    },
}

impl MaturityError {
    /// Build an `InvalidIndex` from an unsigned index.
    pub(crate) fn invalid_index(index: usize, len: usize) -> Self {
        Self::InvalidIndex {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_id_order_is_journey_order() {
        assert!(StageId::Foundation < StageId::Crawl);
        assert!(StageId::Crawl < StageId::Walk);
        assert!(StageId::Walk < StageId::Run);
        assert!(StageId::Run < StageId::Fly);
    }

    #[test]
    fn stage_id_parse() {
        assert_eq!("walk".parse::<StageId>(), Ok(StageId::Walk));
        assert_eq!(" Fly ".parse::<StageId>(), Ok(StageId::Fly));
        assert_eq!(
            "swim".parse::<StageId>(),
            Err(MaturityError::UnknownStage("swim".to_string()))
        );
    }

    #[test]
    fn view_mode_parse() {
        assert_eq!("service".parse::<ViewMode>(), Ok(ViewMode::Service));
        assert_eq!("APPLICATION".parse::<ViewMode>(), Ok(ViewMode::Application));
        assert!(matches!(
            "infrastructure".parse::<ViewMode>(),
            Err(MaturityError::InvalidViewMode(_))
        ));
        assert!(matches!(
            "".parse::<ViewMode>(),
            Err(MaturityError::InvalidViewMode(_))
        ));
    }

    #[test]
    fn view_mode_default_and_toggle() {
        assert_eq!(ViewMode::default(), ViewMode::Application);
        assert_eq!(ViewMode::Application.toggled(), ViewMode::Service);
        assert_eq!(ViewMode::Service.toggled(), ViewMode::Application);
    }

    #[test]
    fn view_mode_serializes_lowercase() {
        let json = serde_json::to_string(&ViewMode::Service).expect("serialize");
        assert_eq!(json, "\"service\"");
        let mode: ViewMode = serde_json::from_str("\"application\"").expect("deserialize");
        assert_eq!(mode, ViewMode::Application);
        assert!(serde_json::from_str::<ViewMode>("\"hybrid\"").is_err());
    }

    #[test]
    fn stage_items_index_by_mode() {
        let items = StageItems::new(
            vec![Item::new("a1", "A1", "first")],
            vec![Item::new("s1", "S1", "first"), Item::new("s2", "S2", "second")],
        );
        assert_eq!(items[ViewMode::Application].len(), 1);
        assert_eq!(items[ViewMode::Service].len(), 2);
        assert_eq!(items[ViewMode::Service][1].id, "s2");
    }

    #[test]
    fn invalid_index_saturates() {
        let err = MaturityError::invalid_index(usize::MAX, 5);
        assert_eq!(
            err,
            MaturityError::InvalidIndex {
                index: i64::MAX,
                len: 5
            }
        );
    }
}
