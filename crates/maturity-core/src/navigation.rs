//! # Navigation Module
//!
//! The navigation controller: the single source of truth for what is shown.
//!
//! ## State
//!
//! `NavigationState` is the pair `(current_index, view_mode)`:
//! - `0 <= current_index < catalog.len()` at all times
//! - starts at `(0, Application)`
//! - volatile, never persisted
//!
//! ## Transitions
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | `select_stage(i)` | jump to `i`, or `InvalidIndex` with state unchanged |
//! | `advance()` | `+1`, no-op at the last stage |
//! | `retreat()` | `-1`, no-op at the first stage |
//! | `set_view_mode(m)` | switch item list, index untouched |
//!
//! No configuration is terminal; `select_stage` can always leave a boundary.

use crate::catalog::StageCatalog;
use crate::types::{Item, MaturityError, Stage, ViewMode};
use crate::view::StageView;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

// =============================================================================
// NAVIGATION STATE
// =============================================================================

/// The mutable pair behind the current display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationState {
    pub current_index: usize,
    pub view_mode: ViewMode,
}

// =============================================================================
// NAVIGATION COMMAND
// =============================================================================

/// A single user gesture, as delivered by a host.
///
/// Text form (used by the interactive tour):
/// `next`, `prev`, `select <index>`, `mode <application|service>`, `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavigationCommand {
    /// Jump to a stage. Signed so hosts can pass raw input through.
    Select { index: i64 },
    Advance,
    Retreat,
    SetViewMode { mode: ViewMode },
    Reset,
}

impl FromStr for NavigationCommand {
    type Err = MaturityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let verb = parts
            .next()
            .ok_or_else(|| MaturityError::InvalidCommand(s.trim().to_string()))?;
        let arg = parts.next();

        if parts.next().is_some() {
            return Err(MaturityError::InvalidCommand(s.trim().to_string()));
        }

        match (verb.to_ascii_lowercase().as_str(), arg) {
            ("next" | "advance" | "n", None) => Ok(Self::Advance),
            ("prev" | "retreat" | "p", None) => Ok(Self::Retreat),
            ("reset", None) => Ok(Self::Reset),
            ("select" | "goto" | "s", Some(raw)) => raw
                .parse::<i64>()
                .map(|index| Self::Select { index })
                .map_err(|_| MaturityError::InvalidCommand(s.trim().to_string())),
            ("mode" | "m", Some(raw)) => Ok(Self::SetViewMode { mode: raw.parse()? }),
            _ => Err(MaturityError::InvalidCommand(s.trim().to_string())),
        }
    }
}

// =============================================================================
// NAVIGATION CONTROLLER
// =============================================================================

/// Owns one `NavigationState` over a shared catalog.
///
/// One controller per session. It is a plain value: hosts that share it across
/// threads wrap it in their own lock.
#[derive(Debug, Clone)]
pub struct NavigationController {
    catalog: Arc<StageCatalog>,
    state: NavigationState,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(Arc::new(StageCatalog::reference()))
    }
}

impl NavigationController {
    /// Create a controller at the initial state `(0, Application)`.
    #[must_use]
    pub fn new(catalog: Arc<StageCatalog>) -> Self {
        Self {
            catalog,
            state: NavigationState::default(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &StageCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode
    }

    fn last_index(&self) -> usize {
        self.catalog.len().saturating_sub(1)
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Jump to `index`. Out of range leaves the state unchanged.
    pub fn select_stage(&mut self, index: usize) -> Result<(), MaturityError> {
        if index >= self.catalog.len() {
            return Err(MaturityError::invalid_index(index, self.catalog.len()));
        }
        self.state.current_index = index;
        Ok(())
    }

    /// Move one stage forward. No-op at the last stage.
    pub fn advance(&mut self) {
        if self.can_advance() {
            self.state.current_index = self.state.current_index.saturating_add(1);
        }
    }

    /// Move one stage back. No-op at the first stage.
    pub fn retreat(&mut self) {
        if self.can_retreat() {
            self.state.current_index = self.state.current_index.saturating_sub(1);
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.state.view_mode = mode;
    }

    /// Return to `(0, Application)`.
    pub fn reset(&mut self) {
        self.state = NavigationState::default();
    }

    /// Dispatch a host command.
    pub fn apply(&mut self, command: NavigationCommand) -> Result<(), MaturityError> {
        match command {
            NavigationCommand::Select { index } => {
                let index = usize::try_from(index).map_err(|_| MaturityError::InvalidIndex {
                    index,
                    len: self.catalog.len(),
                })?;
                self.select_stage(index)
            }
            NavigationCommand::Advance => {
                self.advance();
                Ok(())
            }
            NavigationCommand::Retreat => {
                self.retreat();
                Ok(())
            }
            NavigationCommand::SetViewMode { mode } => {
                self.set_view_mode(mode);
                Ok(())
            }
            NavigationCommand::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.state.current_index < self.last_index()
    }

    #[must_use]
    pub fn can_retreat(&self) -> bool {
        self.state.current_index > 0
    }

    /// The stage at the current index.
    #[must_use]
    pub fn current_stage(&self) -> &Stage {
        // current_index < len is held by every mutation above.
        &self.catalog.stages()[self.state.current_index]
    }

    /// Items of the current stage for the current view mode.
    #[must_use]
    pub fn current_items(&self) -> &[Item] {
        &self.current_stage().items[self.state.view_mode]
    }

    /// Resolve the current state into a renderable snapshot.
    #[must_use]
    pub fn view(&self) -> StageView {
        StageView::compose(
            self.current_stage(),
            self.state.current_index,
            self.catalog.len(),
            self.state.view_mode,
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
