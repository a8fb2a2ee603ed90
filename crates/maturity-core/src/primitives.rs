//! # Primitives
//!
//! Fixed constants of the maturity model. Compiled in, immutable at runtime.

/// Upper bound for every percent-valued field (maturity, KPI values, gauges).
pub const MAX_PERCENT: u8 = 100;

/// Minimum maturity for grade A.
pub const GRADE_A_THRESHOLD: u8 = 90;

/// Minimum maturity for grade B.
pub const GRADE_B_THRESHOLD: u8 = 75;

/// Minimum maturity for grade C.
pub const GRADE_C_THRESHOLD: u8 = 50;

/// Minimum maturity for grade D. Anything lower is grade E.
pub const GRADE_D_THRESHOLD: u8 = 25;
