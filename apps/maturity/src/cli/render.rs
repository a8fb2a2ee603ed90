//! # Terminal Rendering
//!
//! Plain-text presentation of a `StageView`: stepper, scorecard, item list.

use maturity_core::{MaturityGrade, StageCatalog, StageView};

/// Width of the maturity and KPI bars, in cells.
const BAR_WIDTH: usize = 20;

/// Fixed-width percent bar, e.g. `[########------------]`.
fn bar(percent: u8) -> String {
    let filled = (usize::from(percent.min(100)) * BAR_WIDTH) / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH.saturating_sub(filled))
    )
}

/// Stepper line with the current stage bracketed.
fn stepper(catalog: &StageCatalog, current: usize) -> String {
    catalog
        .iter()
        .enumerate()
        .map(|(i, stage)| {
            if i == current {
                format!("[{}]", stage.title)
            } else {
                stage.title.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" > ")
}

/// Render a view as text.
pub fn render_view(view: &StageView, catalog: &StageCatalog) -> String {
    let mut out = String::new();

    out.push_str(&stepper(catalog, view.index));
    out.push('\n');
    out.push_str(&format!("Track  {} {}%\n\n", bar(view.track_percent), view.track_percent));

    out.push_str(&format!(
        "Stage {}/{}: {} - {}\n",
        view.index + 1,
        view.total,
        view.title,
        view.subtitle
    ));
    out.push_str(&view.description);
    out.push_str("\n\n");

    out.push_str(&format!(
        "Maturity {} {}% (grade {})\n",
        bar(view.maturity),
        view.maturity,
        view.grade
    ));
    for kpi in &view.kpis {
        out.push_str(&format!("  {:<22} {} {}%\n", kpi.label, bar(kpi.value), kpi.value));
    }
    out.push('\n');

    out.push_str(&format!("{} view:\n", view.view_mode));
    if view.items.is_empty() {
        out.push_str("  (no items)\n");
    }
    for item in &view.items {
        out.push_str(&format!("  - {}: {}\n", item.label, item.description));
    }
    out.push('\n');

    let prev = if view.can_retreat { "< prev" } else { "  ----" };
    let next = if view.can_advance { "next >" } else { "----  " };
    out.push_str(&format!("{}   |   {}\n", prev, next));

    out
}

/// Render the catalog as a table.
pub fn render_stage_list(catalog: &StageCatalog) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<3} {:<11} {:<12} {:>8} {:>5}\n",
        "#", "ID", "TITLE", "MATURITY", "GRADE"
    ));
    for (index, stage) in catalog.iter().enumerate() {
        out.push_str(&format!(
            "{:<3} {:<11} {:<12} {:>7}% {:>5}\n",
            index,
            stage.id,
            stage.title,
            stage.maturity,
            MaturityGrade::from_maturity(stage.maturity)
        ));
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================
