//! # Stage View
//!
//! The resolved snapshot handed to the presentation layer after every
//! navigation change. It owns its data so hosts can serialize it or keep it
//! after the controller moves on.

use crate::system::{MaturityGrade, track_percent};
use crate::types::{Item, Kpi, Stage, StageId, ViewMode};
use serde::{Deserialize, Serialize};

/// Everything needed to render the current stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageView {
    /// Position of the stage in the catalog.
    pub index: usize,
    /// Catalog length.
    pub total: usize,
    pub stage_id: StageId,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub maturity: u8,
    pub grade: MaturityGrade,
    /// Stepper fill, 0 at the first stage and 100 at the last.
    pub track_percent: u8,
    pub kpis: Vec<Kpi>,
    pub view_mode: ViewMode,
    /// `stage.items[view_mode]`, in catalog order.
    pub items: Vec<Item>,
    pub can_advance: bool,
    pub can_retreat: bool,
}

impl StageView {
    /// Compose a view of `stage` at `index` in a catalog of `total` stages.
    #[must_use]
    pub fn compose(stage: &Stage, index: usize, total: usize, view_mode: ViewMode) -> Self {
        let last = total.saturating_sub(1);
        Self {
            index,
            total,
            stage_id: stage.id,
            title: stage.title.clone(),
            subtitle: stage.subtitle.clone(),
            description: stage.description.clone(),
            maturity: stage.maturity,
            grade: MaturityGrade::from_maturity(stage.maturity),
            track_percent: track_percent(index, total),
            kpis: stage.kpis.clone(),
            view_mode,
            items: stage.items[view_mode].to_vec(),
            can_advance: index < last,
            can_retreat: index > 0,
        }
    }
}
