//! # Gauges
//!
//! Scorecard values derived from the current stage.
//!
//! ## Grade Table
//!
//! | Grade | Maturity |
//! |-------|----------|
//! | A | >= 90 |
//! | B | >= 75 |
//! | C | >= 50 |
//! | D | >= 25 |
//! | E | below 25 |
//!
//! Track progress is the fill of the stage stepper: `index * 100 / (len - 1)`,
//! integer division, so the first stage is 0 and the last is 100.

use crate::primitives::{
    GRADE_A_THRESHOLD, GRADE_B_THRESHOLD, GRADE_C_THRESHOLD, GRADE_D_THRESHOLD, MAX_PERCENT,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// MATURITY GRADE
// =============================================================================

/// Letter grade for a maturity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MaturityGrade {
    A,
    B,
    C,
    D,
    E,
}

impl MaturityGrade {
    /// Grade a maturity score. Scores above 100 grade as A.
    #[must_use]
    pub fn from_maturity(maturity: u8) -> Self {
        if maturity >= GRADE_A_THRESHOLD {
            MaturityGrade::A
        } else if maturity >= GRADE_B_THRESHOLD {
            MaturityGrade::B
        } else if maturity >= GRADE_C_THRESHOLD {
            MaturityGrade::C
        } else if maturity >= GRADE_D_THRESHOLD {
            MaturityGrade::D
        } else {
            MaturityGrade::E
        }
    }

    /// Minimum maturity needed for this grade.
    #[must_use]
    pub fn threshold(&self) -> u8 {
        match self {
            MaturityGrade::A => GRADE_A_THRESHOLD,
            MaturityGrade::B => GRADE_B_THRESHOLD,
            MaturityGrade::C => GRADE_C_THRESHOLD,
            MaturityGrade::D => GRADE_D_THRESHOLD,
            MaturityGrade::E => 0,
        }
    }

    #[must_use]
    pub fn letter(&self) -> char {
        match self {
            MaturityGrade::A => 'A',
            MaturityGrade::B => 'B',
            MaturityGrade::C => 'C',
            MaturityGrade::D => 'D',
            MaturityGrade::E => 'E',
        }
    }
}

impl std::fmt::Display for MaturityGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// =============================================================================
// TRACK PROGRESS
// =============================================================================

/// Stepper fill percent for `index` in a catalog of `len` stages.
///
/// A single-stage catalog is always full. Indices past the end clamp to 100.
#[must_use]
pub fn track_percent(index: usize, len: usize) -> u8 {
    let last = len.saturating_sub(1);
    if last == 0 {
        return MAX_PERCENT;
    }

    let percent = (index.min(last) as u64).saturating_mul(u64::from(MAX_PERCENT)) / (last as u64);
    percent.min(u64::from(MAX_PERCENT)) as u8
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_boundaries() {
        assert_eq!(MaturityGrade::from_maturity(100), MaturityGrade::A);
        assert_eq!(MaturityGrade::from_maturity(90), MaturityGrade::A);
        assert_eq!(MaturityGrade::from_maturity(89), MaturityGrade::B);
        assert_eq!(MaturityGrade::from_maturity(75), MaturityGrade::B);
        assert_eq!(MaturityGrade::from_maturity(74), MaturityGrade::C);
        assert_eq!(MaturityGrade::from_maturity(50), MaturityGrade::C);
        assert_eq!(MaturityGrade::from_maturity(49), MaturityGrade::D);
        assert_eq!(MaturityGrade::from_maturity(25), MaturityGrade::D);
        assert_eq!(MaturityGrade::from_maturity(24), MaturityGrade::E);
        assert_eq!(MaturityGrade::from_maturity(0), MaturityGrade::E);
    }

    #[test]
    fn grade_threshold_round_trips() {
        for grade in [
            MaturityGrade::A,
            MaturityGrade::B,
            MaturityGrade::C,
            MaturityGrade::D,
            MaturityGrade::E,
        ] {
            assert_eq!(MaturityGrade::from_maturity(grade.threshold()), grade);
        }
    }

    #[test]
    fn grade_display() {
        assert_eq!(format!("{}", MaturityGrade::C), "C");
    }

    #[test]
    fn track_percent_five_stages() {
        assert_eq!(track_percent(0, 5), 0);
        assert_eq!(track_percent(1, 5), 25);
        assert_eq!(track_percent(2, 5), 50);
        assert_eq!(track_percent(3, 5), 75);
        assert_eq!(track_percent(4, 5), 100);
    }

    #[test]
    fn track_percent_degenerate() {
        assert_eq!(track_percent(0, 1), 100);
        assert_eq!(track_percent(0, 0), 100);
        assert_eq!(track_percent(9, 3), 100);
        assert_eq!(track_percent(1, 4), 33);
    }
}
