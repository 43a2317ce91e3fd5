// solution-check-core/src/core/report.rs
// ============================================================================
// Module: Solution Check Reports
// Description: Serializable summaries of a checked submission.
// Purpose: Hand structured outcomes to presentation layers without formatting.
// Dependencies: crate::core::{hashing, submission, task}, serde
// ============================================================================

//! ## Overview
//! A [`SubmissionReport`] joins a submission's results with the task's tests
//! by index. Slots beyond the enumerable tests (bonus slots) carry no test
//! details. The solution payload appears only as a digest.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::hashing::DEFAULT_HASH_ALGORITHM;
use crate::core::hashing::HashDigest;
use crate::core::hashing::HashError;
use crate::core::hashing::hash_canonical_json;
use crate::core::strategy::ComparisonStrategy;
use crate::core::submission::Submission;
use crate::core::task::Task;
use crate::core::test_case::TestCase;

// ============================================================================
// SECTION: Report Types
// ============================================================================

/// Report line for one result slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Slot index.
    pub index: usize,
    /// Input as rendered for display, absent for bonus slots.
    pub display_input: Option<String>,
    /// Expected value, absent for bonus slots.
    pub expected: Option<String>,
    /// Strategy used to judge the test, absent for bonus slots.
    pub strategy: Option<ComparisonStrategy>,
    /// Recorded actual output.
    pub actual_output: String,
    /// Pass flag.
    pub passed: bool,
}

/// Structured outcome of one checking session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReport {
    /// Task description.
    pub task: String,
    /// Digest of the checked solution payload.
    pub solution_hash: HashDigest,
    /// Number of result slots.
    pub total: usize,
    /// Number of passed slots.
    pub total_passed: usize,
    /// Per-slot entries in index order.
    pub entries: Vec<ReportEntry>,
}

impl SubmissionReport {
    /// Builds a report for `submission` checked against `task`.
    #[must_use]
    pub fn build(task: &Task, submission: &Submission) -> Self {
        let tests = task.suite().tests();
        let entries = submission
            .results()
            .iter()
            .enumerate()
            .map(|(index, result)| {
                let test = tests.get(index);
                ReportEntry {
                    index,
                    display_input: test.map(TestCase::display_input),
                    expected: test.map(|test| test.expected().to_string()),
                    strategy: test.map(|test| *test.strategy()),
                    actual_output: result.actual_output.clone(),
                    passed: result.passed,
                }
            })
            .collect();
        Self {
            task: task.description().to_string(),
            solution_hash: submission.solution().digest(),
            total: submission.total(),
            total_passed: submission.total_passed(),
            entries,
        }
    }

    /// Returns the canonical digest of the report.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] when the report cannot be canonicalized.
    pub fn digest(&self) -> Result<HashDigest, HashError> {
        hash_canonical_json(DEFAULT_HASH_ALGORITHM, self)
    }
}

impl Submission {
    /// Builds a structured report of this submission against `task`.
    #[must_use]
    pub fn report(&self, task: &Task) -> SubmissionReport {
        SubmissionReport::build(task, self)
    }
}
