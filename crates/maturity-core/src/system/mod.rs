//! # System Module
//!
//! Derived gauges shown next to the current stage.
//!
//! These are pure functions of catalog data and the navigation index. They
//! never feed back into navigation.

mod gauge;

pub use gauge::*;
