// solution-check-core/src/core/lookup.rs
// ============================================================================
// Module: Solution Check Lookup Helpers
// Description: Search and ordering over test case collections.
// Purpose: Locate tests by expected value and order them by input.
// Dependencies: crate::core::test_case
// ============================================================================

//! ## Overview
//! Both helpers preserve original order where it matters: lookup returns the
//! first match, and sorting is stable so equal inputs keep their relative
//! positions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::test_case::TestCase;

// ============================================================================
// SECTION: Lookup
// ============================================================================

/// Returns the first test case whose expected value equals `expected`.
#[must_use]
pub fn find_by_expected<'a>(tests: &'a [TestCase], expected: &str) -> Option<&'a TestCase> {
    tests.iter().find(|test| test.expected() == expected)
}

/// Stably orders test cases by lexicographic comparison of their input.
pub fn sort_by_input(tests: &mut [TestCase]) {
    tests.sort_by(|left, right| left.input().cmp(right.input()));
}
