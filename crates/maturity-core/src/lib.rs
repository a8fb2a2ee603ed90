//! # maturity-core
//!
//! The navigation engine of the maturity simulator - THE LOGIC.
//!
//! This crate holds a fixed, ordered catalog of maturity stages and a
//! controller that tracks which stage and which item list is on screen.
//! Rendering is somebody else's job: the controller resolves its state into a
//! [`StageView`] and hosts draw that.
//!
//! ## Architectural Constraints
//!
//! - The catalog is read-only after construction
//! - All state changes go through [`NavigationController`]
//! - Rejected operations leave state untouched
//! - NO async, NO network, NO logging dependencies (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod navigation;
pub mod primitives;
pub mod system;
pub mod types;
pub mod view;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Item, Kpi, MaturityError, Stage, StageId, StageItems, ViewMode};

// =============================================================================
// RE-EXPORTS: Catalog & Navigation
// =============================================================================

pub use catalog::StageCatalog;
pub use navigation::{NavigationCommand, NavigationController, NavigationState};
pub use view::StageView;

// =============================================================================
// RE-EXPORTS: System (from system module)
// =============================================================================

pub use system::{MaturityGrade, track_percent};
