// solution-check-core/src/core/session.rs
// ============================================================================
// Module: Solution Check Sessions
// Description: Session-owned bookkeeping for suite construction.
// Purpose: Count suites created within one checking session.
// Dependencies: crate::core::{suite, test_case}
// ============================================================================

//! ## Overview
//! The number of suites created is tracked by an explicit [`CheckSession`]
//! value owned by the orchestrating caller. There is no process-wide counter.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::suite::CountPolicy;
use crate::core::suite::TestSuite;
use crate::core::test_case::TestCase;

// ============================================================================
// SECTION: Session
// ============================================================================

/// Orchestration context for a checking session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckSession {
    /// Number of suites created through this session.
    suites_created: u64,
}

impl CheckSession {
    /// Creates an empty session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            suites_created: 0,
        }
    }

    /// Creates a suite with the given count policy.
    pub fn create_suite(
        &mut self,
        tests: Vec<TestCase>,
        count_policy: CountPolicy,
    ) -> TestSuite {
        self.suites_created = self.suites_created.saturating_add(1);
        TestSuite::with_policy(tests, count_policy)
    }

    /// Returns the number of suites created so far.
    #[must_use]
    pub const fn suites_created(&self) -> u64 {
        self.suites_created
    }
}
