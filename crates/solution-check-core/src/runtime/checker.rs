// solution-check-core/src/runtime/checker.rs
// ============================================================================
// Module: Solution Check Checker
// Description: Runs a task's tests and aggregates a submission.
// Purpose: Produce index-aligned results and a pass total for one solution.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! [`Checker::check`] sizes the submission from the suite's reported count,
//! runs every enumerable test in index order, and writes each outcome into
//! its own slot. The pass total is computed by a reduction over the result
//! buffer once all writes are done.
//!
//! Operands are unbounded by default, so a default checker judges every test
//! exactly as its strategy does. When an operand byte limit is configured, a
//! test whose comparison cannot be evaluated under it is isolated: its slot records
//! [`COMPARISON_FAILURE_MARKER`](crate::COMPARISON_FAILURE_MARKER) with
//! `passed = false`, an audit event is emitted, and checking continues.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use crate::core::error::CheckError;
use crate::core::submission::ExecutionResult;
use crate::core::submission::Submission;
use crate::core::task::Task;
use crate::core::task::UserSolution;
use crate::core::test_case::TestCase;
use crate::interfaces::CheckAuditEvent;
use crate::interfaces::CheckAuditSink;
use crate::runtime::audit::NoopAuditSink;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Evaluation limits applied to every test case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckLimits {
    /// Maximum size of an input or expected value in bytes, unbounded when `None`.
    pub max_operand_bytes: Option<usize>,
}

// ============================================================================
// SECTION: Checker
// ============================================================================

/// Checks user solutions against tasks.
#[derive(Clone)]
pub struct Checker {
    /// Evaluation limits.
    limits: CheckLimits,
    /// Destination for audit events.
    audit: Arc<dyn CheckAuditSink>,
}

impl Default for Checker {
    fn default() -> Self {
        Self::new(CheckLimits::default(), Arc::new(NoopAuditSink))
    }
}

impl Checker {
    /// Creates a checker with explicit limits and audit sink.
    #[must_use]
    pub fn new(limits: CheckLimits, audit: Arc<dyn CheckAuditSink>) -> Self {
        Self {
            limits,
            audit,
        }
    }

    /// Checks `solution` against every test of `task`.
    #[must_use]
    pub fn check(&self, solution: UserSolution, task: &Task) -> Submission {
        let suite = task.suite();
        let slots = suite.count();
        if suite.count_diverges() {
            self.audit.record(&CheckAuditEvent::suite_count_mismatch(
                task.description(),
                slots,
                suite.len(),
            ));
        }

        let mut submission = Submission::new(solution, slots);
        for (index, test) in suite.tests().iter().enumerate() {
            let result = self.evaluate_case(index, test).unwrap_or_else(|err| {
                self.audit.record(&CheckAuditEvent::comparison_failed(
                    task.description(),
                    index,
                    err.to_string(),
                ));
                ExecutionResult::comparison_failed()
            });
            // Slots come from count(), which never reports fewer than the held tests.
            if let Err(err) = submission.record(index, result) {
                self.audit.record(&CheckAuditEvent::result_write_rejected(
                    task.description(),
                    index,
                    err.to_string(),
                ));
            }
        }

        self.audit.record(&CheckAuditEvent::submission_checked(
            task.description(),
            slots,
            submission.total_passed(),
            submission.solution().digest(),
        ));
        submission
    }

    /// Evaluates one test case under the configured limits.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::ComparisonFailure`] when an operand exceeds
    /// [`CheckLimits::max_operand_bytes`].
    pub fn evaluate_case(
        &self,
        index: usize,
        test: &TestCase,
    ) -> Result<ExecutionResult, CheckError> {
        let Some(limit) = self.limits.max_operand_bytes else {
            return Ok(test.run());
        };
        for (label, operand) in [("input", test.input()), ("expected", test.expected())] {
            if operand.len() > limit {
                return Err(CheckError::ComparisonFailure {
                    index,
                    reason: format!("{label} is {} bytes (limit {limit})", operand.len()),
                });
            }
        }
        Ok(test.run())
    }
}

/// Checks `solution` against `task` with unbounded operands and no audit sink.
#[must_use]
pub fn check(solution: UserSolution, task: &Task) -> Submission {
    Checker::default().check(solution, task)
}
