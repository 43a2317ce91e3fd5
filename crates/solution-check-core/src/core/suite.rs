// solution-check-core/src/core/suite.rs
// ============================================================================
// Module: Solution Check Test Suites
// Description: Ordered test case collections with a reported count policy.
// Purpose: Define the indexing used to correlate results with test cases.
// Dependencies: crate::core::{lookup, test_case}, serde
// ============================================================================

//! ## Overview
//! A [`TestSuite`] owns an ordered sequence of [`TestCase`] values. Insertion
//! order is significant: it defines the index at which each result is
//! recorded. The reported [`TestSuite::count`] is a policy and may diverge
//! from the number of enumerable tests; [`CountPolicy::BonusTest`] reports one
//! slot more than the suite holds. Callers sizing a submission must use
//! `count()`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::lookup;
use crate::core::test_case::TestCase;

// ============================================================================
// SECTION: Count Policy
// ============================================================================

/// Policy deciding the count a suite reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountPolicy {
    /// Reports exactly the number of held tests.
    #[default]
    Enumerated,
    /// Reports one bonus test beyond the held tests.
    BonusTest,
}

// ============================================================================
// SECTION: Test Suite
// ============================================================================

/// Ordered collection of test cases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuite {
    /// Test cases in insertion order.
    tests: Vec<TestCase>,
    /// Reported count policy.
    #[serde(default)]
    count_policy: CountPolicy,
}

impl TestSuite {
    /// Creates a suite whose count matches its tests.
    #[must_use]
    pub const fn new(tests: Vec<TestCase>) -> Self {
        Self::with_policy(tests, CountPolicy::Enumerated)
    }

    /// Creates a suite that reports one bonus test.
    #[must_use]
    pub const fn with_bonus_test(tests: Vec<TestCase>) -> Self {
        Self::with_policy(tests, CountPolicy::BonusTest)
    }

    /// Creates a suite with an explicit count policy.
    #[must_use]
    pub const fn with_policy(tests: Vec<TestCase>, count_policy: CountPolicy) -> Self {
        Self {
            tests,
            count_policy,
        }
    }

    /// Returns the enumerable tests in order.
    #[must_use]
    pub fn tests(&self) -> &[TestCase] {
        &self.tests
    }

    /// Returns the number of enumerable tests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Returns true when the suite holds no tests.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Returns the count policy.
    #[must_use]
    pub const fn count_policy(&self) -> CountPolicy {
        self.count_policy
    }

    /// Returns the reported test count.
    #[must_use]
    pub fn count(&self) -> usize {
        match self.count_policy {
            CountPolicy::Enumerated => self.tests.len(),
            CountPolicy::BonusTest => self.tests.len().saturating_add(1),
        }
    }

    /// Returns true when the reported count diverges from the held tests.
    #[must_use]
    pub fn count_diverges(&self) -> bool {
        self.count() != self.tests.len()
    }

    /// Returns the first test whose expected value equals `expected`.
    #[must_use]
    pub fn find_by_expected(&self, expected: &str) -> Option<&TestCase> {
        lookup::find_by_expected(&self.tests, expected)
    }

    /// Returns a new suite with tests stably ordered by input.
    #[must_use]
    pub fn sorted_by_input(&self) -> Self {
        let mut tests = self.tests.clone();
        lookup::sort_by_input(&mut tests);
        Self::with_policy(tests, self.count_policy)
    }
}

impl FromIterator<TestCase> for TestSuite {
    fn from_iter<I: IntoIterator<Item = TestCase>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
