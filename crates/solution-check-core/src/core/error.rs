// solution-check-core/src/core/error.rs
// ============================================================================
// Module: Solution Check Errors
// Description: Error taxonomy for construction and per-test evaluation.
// Purpose: Distinguish fail-fast construction errors from isolated test failures.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Construction-time invariant violations surface as
//! [`CheckError::InvalidArgument`] and reject the object being built.
//! Evaluation failures surface as [`CheckError::ComparisonFailure`] and are
//! isolated to a single execution result by the checker; they never abort a
//! whole submission.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by the Solution Check core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// A value was rejected at construction time.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A comparison strategy could not evaluate a test case.
    #[error("comparison failed for test {index}: {reason}")]
    ComparisonFailure {
        /// Index of the test case within its suite.
        index: usize,
        /// Human-readable failure reason.
        reason: String,
    },
    /// A result write targeted a slot outside the submission.
    #[error("result index {index} out of range for submission of {len} results")]
    ResultIndexOutOfRange {
        /// Requested result index.
        index: usize,
        /// Number of result slots in the submission.
        len: usize,
    },
}
