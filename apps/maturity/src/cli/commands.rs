//! # CLI Command Implementations

use super::render::{render_stage_list, render_view};
use crate::api::{self, AppState, StageSummary};
use crate::config::AppConfig;
use crate::error::AppError;
use maturity_core::{
    MaturityError, NavigationCommand, NavigationController, StageCatalog, StageId, ViewMode,
};
use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), AppError> {
    let mut config = AppConfig::load(config_path)?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let catalog = StageCatalog::reference();

    println!("Maturity Simulator Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:         {}", config.server.host);
    println!("  Port:         {}", config.server.port);
    println!("  Stages:       {}", catalog.len());
    println!("  Max sessions: {}", config.server.max_sessions);
    println!();
    println!("Endpoints:");
    println!("  GET    /stages                   - List stages");
    println!("  POST   /sessions                 - Start a session");
    println!("  GET    /sessions/{{id}}            - Current view");
    println!("  DELETE /sessions/{{id}}            - End a session");
    println!("  POST   /sessions/{{id}}/select     - Jump to a stage");
    println!("  POST   /sessions/{{id}}/next       - Step forward");
    println!("  POST   /sessions/{{id}}/prev       - Step back");
    println!("  POST   /sessions/{{id}}/view-mode  - Switch view mode");
    println!("  GET    /health                   - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    api::run_server(AppState::new(catalog, config.server)).await
}

// =============================================================================
// STAGES COMMAND
// =============================================================================

/// List the catalog.
pub fn cmd_stages(json_mode: bool) -> Result<(), AppError> {
    let catalog = StageCatalog::reference();

    if json_mode {
        let summaries: Vec<StageSummary> = catalog
            .iter()
            .enumerate()
            .map(|(index, stage)| StageSummary::new(index, stage))
            .collect();
        print_json(&serde_json::json!({ "stages": summaries }));
        return Ok(());
    }

    print!("{}", render_stage_list(&catalog));
    Ok(())
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Resolve a `--stage` argument: a 0-based index or a stage id.
pub fn resolve_stage(catalog: &StageCatalog, raw: &str) -> Result<usize, MaturityError> {
    let trimmed = raw.trim();

    if let Ok(index) = trimmed.parse::<i64>() {
        let index = usize::try_from(index).map_err(|_| MaturityError::InvalidIndex {
            index,
            len: catalog.len(),
        })?;
        catalog.stage_at(index)?;
        return Ok(index);
    }

    let id: StageId = trimmed.parse()?;
    catalog
        .position(id)
        .ok_or_else(|| MaturityError::UnknownStage(id.to_string()))
}

/// Render one stage.
pub fn cmd_show(stage: Option<&str>, mode: ViewMode, json_mode: bool) -> Result<(), AppError> {
    let mut nav = NavigationController::new(Arc::new(StageCatalog::reference()));

    if let Some(raw) = stage {
        let index = resolve_stage(nav.catalog(), raw)?;
        nav.select_stage(index)?;
    }
    nav.set_view_mode(mode);

    if json_mode {
        print_json(&nav.view());
    } else {
        print!("{}", render_view(&nav.view(), nav.catalog()));
    }
    Ok(())
}

// =============================================================================
// TOUR COMMAND
// =============================================================================

/// Interactive navigation over stdin/stdout.
pub fn cmd_tour(mode: ViewMode, json_mode: bool) -> Result<(), AppError> {
    let mut nav = NavigationController::new(Arc::new(StageCatalog::reference()));
    nav.set_view_mode(mode);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_tour(&mut nav, stdin.lock(), &mut stdout.lock(), json_mode)
}

const TOUR_HELP: &str =
    "Commands: next | prev | select <index> | mode <application|service> | toggle | reset | quit";

/// Drive a controller from line-oriented input.
///
/// The view is printed at start and after every accepted command. Rejected
/// input prints the error and leaves the controller as it was.
pub fn run_tour<R: BufRead, W: Write>(
    nav: &mut NavigationController,
    input: R,
    out: &mut W,
    json_mode: bool,
) -> Result<(), AppError> {
    write_view(nav, out, json_mode)?;
    if !json_mode {
        writeln!(out, "{}", TOUR_HELP)?;
    }

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();

        let command = match trimmed.to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "help" | "?" => {
                writeln!(out, "{}", TOUR_HELP)?;
                continue;
            }
            "toggle" | "t" => Ok(NavigationCommand::SetViewMode {
                mode: nav.view_mode().toggled(),
            }),
            _ => trimmed.parse::<NavigationCommand>(),
        };

        match command.and_then(|cmd| nav.apply(cmd)) {
            Ok(()) => write_view(nav, out, json_mode)?,
            Err(e) => {
                tracing::debug!("Tour input rejected: {}", e);
                if json_mode {
                    writeln!(
                        out,
                        "{}",
                        serde_json::json!({ "success": false, "error": e.to_string() })
                    )?;
                } else {
                    writeln!(out, "error: {}", e)?;
                }
            }
        }
    }

    Ok(())
}

fn write_view<W: Write>(
    nav: &NavigationController,
    out: &mut W,
    json_mode: bool,
) -> Result<(), AppError> {
    let view = nav.view();
    if json_mode {
        let line = serde_json::to_string(&view).map_err(|e| AppError::Io(e.to_string()))?;
        writeln!(out, "{}", line)?;
    } else {
        writeln!(out, "{}", render_view(&view, nav.catalog()))?;
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => tracing::error!("JSON serialization failed: {}", e),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_stage_by_index_and_id() {
        let catalog = StageCatalog::reference();
        assert_eq!(resolve_stage(&catalog, "2"), Ok(2));
        assert_eq!(resolve_stage(&catalog, "run"), Ok(3));
        assert_eq!(resolve_stage(&catalog, " Fly "), Ok(4));
    }

    #[test]
    fn resolve_stage_errors() {
        let catalog = StageCatalog::reference();
        assert_eq!(
            resolve_stage(&catalog, "-1"),
            Err(MaturityError::InvalidIndex { index: -1, len: 5 })
        );
        assert_eq!(
            resolve_stage(&catalog, "5"),
            Err(MaturityError::InvalidIndex { index: 5, len: 5 })
        );
        assert!(matches!(
            resolve_stage(&catalog, "sprint"),
            Err(MaturityError::UnknownStage(_))
        ));
    }
}
