// solution-check-core/src/core/strategy.rs
// ============================================================================
// Module: Solution Check Comparison Strategies
// Description: Pass/fail policies applied to a test input and expected value.
// Purpose: Provide the closed set of comparison strategies used by test cases.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A comparison strategy is a pure function `(input, expected) -> bool`.
//! The variant set is closed: [`ComparisonStrategy::Exact`] certifies
//! structural equality, and [`ComparisonStrategy::Gated`] certifies equality
//! only when its configured threshold exceeds [`GATED_MINIMUM_THRESHOLD`].
//! Strategies are immutable once constructed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Threshold a gated strategy must exceed before it certifies equality.
pub const GATED_MINIMUM_THRESHOLD: i64 = 2;

// ============================================================================
// SECTION: Strategy
// ============================================================================

/// Comparison policy bound to a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ComparisonStrategy {
    /// Passes when input and expected are equal.
    Exact,
    /// Passes when input and expected are equal and `threshold` exceeds
    /// [`GATED_MINIMUM_THRESHOLD`].
    Gated {
        /// Configured capability level of the runner.
        threshold: i64,
    },
}

impl ComparisonStrategy {
    /// Creates an exact-equality strategy.
    #[must_use]
    pub const fn exact() -> Self {
        Self::Exact
    }

    /// Creates a gated strategy with the given threshold.
    #[must_use]
    pub const fn gated(threshold: i64) -> Self {
        Self::Gated {
            threshold,
        }
    }

    /// Evaluates the strategy against an input and expected value.
    #[must_use]
    pub fn evaluate(&self, input: &str, expected: &str) -> bool {
        match self {
            Self::Exact => input == expected,
            Self::Gated {
                threshold,
            } => input == expected && *threshold > GATED_MINIMUM_THRESHOLD,
        }
    }
}

impl fmt::Display for ComparisonStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => f.write_str("exact"),
            Self::Gated {
                threshold,
            } => write!(f, "gated(threshold={threshold})"),
        }
    }
}
