// solution-check-core/src/core/submission.rs
// ============================================================================
// Module: Solution Check Submissions
// Description: Per-test execution results and the submission aggregate.
// Purpose: Hold index-aligned outcomes for one solution checked against one task.
// Dependencies: crate::core::{error, task}, serde
// ============================================================================

//! ## Overview
//! A [`Submission`] is allocated with one default [`ExecutionResult`] per
//! reported test slot. Results are written by index so that `results[i]`
//! always describes `tests[i]`. The pass total is never stored: it is a
//! reduction over the buffer, so it cannot drift from the results through
//! later writes or deserialization.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::error::CheckError;
use crate::core::task::UserSolution;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Actual output recorded when a comparison could not be evaluated.
pub const COMPARISON_FAILURE_MARKER: &str = "<comparison-failure>";

// ============================================================================
// SECTION: Execution Result
// ============================================================================

/// Outcome of running one test case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Observed output recorded for the test.
    pub actual_output: String,
    /// Whether the comparison strategy certified a pass.
    pub passed: bool,
}

impl ExecutionResult {
    /// Creates an execution result.
    #[must_use]
    pub fn new(actual_output: impl Into<String>, passed: bool) -> Self {
        Self {
            actual_output: actual_output.into(),
            passed,
        }
    }

    /// Creates the distinguished result for a comparison that failed to evaluate.
    #[must_use]
    pub fn comparison_failed() -> Self {
        Self::new(COMPARISON_FAILURE_MARKER, false)
    }

    /// Returns true when this result records a comparison failure.
    #[must_use]
    pub fn is_comparison_failure(&self) -> bool {
        !self.passed && self.actual_output == COMPARISON_FAILURE_MARKER
    }
}

// ============================================================================
// SECTION: Submission
// ============================================================================

/// Full outcome of checking one solution against one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Solution that was checked.
    solution: UserSolution,
    /// Index-aligned execution results.
    results: Vec<ExecutionResult>,
}

impl Submission {
    /// Allocates a submission with `slots` default results.
    #[must_use]
    pub fn new(solution: UserSolution, slots: usize) -> Self {
        Self {
            solution,
            results: vec![ExecutionResult::default(); slots],
        }
    }

    /// Writes a result into its slot.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::ResultIndexOutOfRange`] when `index` has no slot.
    pub fn record(&mut self, index: usize, result: ExecutionResult) -> Result<(), CheckError> {
        let len = self.results.len();
        let slot = self.results.get_mut(index).ok_or(CheckError::ResultIndexOutOfRange {
            index,
            len,
        })?;
        *slot = result;
        Ok(())
    }

    /// Returns the checked solution.
    #[must_use]
    pub const fn solution(&self) -> &UserSolution {
        &self.solution
    }

    /// Returns the index-aligned results.
    #[must_use]
    pub fn results(&self) -> &[ExecutionResult] {
        &self.results
    }

    /// Returns the number of passed results.
    #[must_use]
    pub fn total_passed(&self) -> usize {
        self.results.iter().filter(|result| result.passed).count()
    }

    /// Returns the number of result slots.
    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Returns true when every slot passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|result| result.passed)
    }
}
