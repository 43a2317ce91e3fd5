// solution-check-core/src/interfaces/mod.rs
// ============================================================================
// Module: Solution Check Interfaces
// Description: Backend-agnostic audit surface for the checker.
// Purpose: Let deployments route checker events without hard dependencies.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! The checker reports systemic conditions (isolated comparison failures,
//! suites whose reported count diverges from their tests, completed
//! submissions, rejected result writes) as [`CheckAuditEvent`] values handed to a
//! [`CheckAuditSink`]. Sinks must not fail the check; recording is
//! best-effort.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::core::hashing::HashDigest;

// ============================================================================
// SECTION: Event Kinds
// ============================================================================

/// Event label for a comparison isolated to one result slot.
pub const EVENT_COMPARISON_FAILED: &str = "comparison_failed";
/// Event label for a suite whose reported count differs from its tests.
pub const EVENT_SUITE_COUNT_MISMATCH: &str = "suite_count_mismatch";
/// Event label for a result that could not be written into its slot.
pub const EVENT_RESULT_WRITE_REJECTED: &str = "result_write_rejected";
/// Event label for a completed submission.
pub const EVENT_SUBMISSION_CHECKED: &str = "submission_checked";

// ============================================================================
// SECTION: Types
// ============================================================================

/// Checker audit event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Description of the task being checked.
    pub task: String,
    /// Result slot index when the event concerns one test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_index: Option<usize>,
    /// Count reported by the suite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_count: Option<usize>,
    /// Number of enumerable tests in the suite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enumerable_count: Option<usize>,
    /// Number of passed results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_passed: Option<usize>,
    /// Digest of the checked solution payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_hash: Option<HashDigest>,
    /// Failure reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CheckAuditEvent {
    /// Builds an empty event of the given kind.
    fn base(event: &'static str, task: &str) -> Self {
        Self {
            event,
            timestamp_ms: now_ms(),
            task: task.to_string(),
            test_index: None,
            reported_count: None,
            enumerable_count: None,
            total_passed: None,
            solution_hash: None,
            reason: None,
        }
    }

    /// Builds a `comparison_failed` event.
    #[must_use]
    pub fn comparison_failed(task: &str, test_index: usize, reason: impl Into<String>) -> Self {
        Self {
            test_index: Some(test_index),
            reason: Some(reason.into()),
            ..Self::base(EVENT_COMPARISON_FAILED, task)
        }
    }

    /// Builds a `result_write_rejected` event.
    #[must_use]
    pub fn result_write_rejected(task: &str, test_index: usize, reason: impl Into<String>) -> Self {
        Self {
            test_index: Some(test_index),
            reason: Some(reason.into()),
            ..Self::base(EVENT_RESULT_WRITE_REJECTED, task)
        }
    }

    /// Builds a `suite_count_mismatch` event.
    #[must_use]
    pub fn suite_count_mismatch(
        task: &str,
        reported_count: usize,
        enumerable_count: usize,
    ) -> Self {
        Self {
            reported_count: Some(reported_count),
            enumerable_count: Some(enumerable_count),
            ..Self::base(EVENT_SUITE_COUNT_MISMATCH, task)
        }
    }

    /// Builds a `submission_checked` event.
    #[must_use]
    pub fn submission_checked(
        task: &str,
        reported_count: usize,
        total_passed: usize,
        solution_hash: HashDigest,
    ) -> Self {
        Self {
            reported_count: Some(reported_count),
            total_passed: Some(total_passed),
            solution_hash: Some(solution_hash),
            ..Self::base(EVENT_SUBMISSION_CHECKED, task)
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for checker events.
pub trait CheckAuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &CheckAuditEvent);
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the current time in milliseconds since the Unix epoch.
fn now_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |duration| duration.as_millis())
}
