// solution-check-core/src/core/mod.rs
// ============================================================================
// Module: Solution Check Core Types
// Description: Test cases, suites, tasks, and submission records.
// Purpose: Provide the immutable inputs and mutable outcome records of a check.
// Dependencies: serde, serde_jcs, sha2, thiserror
// ============================================================================

//! ## Overview
//! Core types model everything a checking session reads (strategies, test
//! cases, suites, tasks) and everything it writes (execution results and the
//! submission aggregate). Inputs are constructed before a session and are
//! read-only while it runs.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod error;
pub mod hashing;
pub mod lookup;
pub mod report;
pub mod session;
pub mod strategy;
pub mod submission;
pub mod suite;
pub mod task;
pub mod test_case;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::CheckError;
pub use hashing::DEFAULT_HASH_ALGORITHM;
pub use hashing::HashAlgorithm;
pub use hashing::HashDigest;
pub use hashing::HashError;
pub use lookup::find_by_expected;
pub use lookup::sort_by_input;
pub use report::ReportEntry;
pub use report::SubmissionReport;
pub use session::CheckSession;
pub use strategy::ComparisonStrategy;
pub use strategy::GATED_MINIMUM_THRESHOLD;
pub use submission::COMPARISON_FAILURE_MARKER;
pub use submission::ExecutionResult;
pub use submission::Submission;
pub use suite::CountPolicy;
pub use suite::TestSuite;
pub use task::Task;
pub use task::UserSolution;
pub use test_case::TestCase;
pub use test_case::TestCaseBuilder;
