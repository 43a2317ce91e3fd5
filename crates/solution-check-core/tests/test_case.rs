// solution-check-core/tests/test_case.rs
// ============================================================================
// Module: Test Case Tests
// Description: Construction, run, and display tests for test cases.
// Purpose: Ensure test cases fail fast on missing fields and run faithfully.
// Dependencies: solution-check-core
// ============================================================================
//! ## Overview
//! Covers builder validation, the run contract (raw input recorded as the
//! actual output), and described display rendering.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use solution_check_core::CheckError;
use solution_check_core::ComparisonStrategy;
use solution_check_core::TestCase;

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Verifies a fully specified builder produces the test case.
#[test]
fn builder_builds_complete_test_case() {
    let test = TestCase::builder()
        .input("input3")
        .expected("expected3")
        .strategy(ComparisonStrategy::exact())
        .description("Test A")
        .build()
        .unwrap();

    assert_eq!(test.input(), "input3");
    assert_eq!(test.expected(), "expected3");
    assert_eq!(test.strategy(), &ComparisonStrategy::Exact);
    assert_eq!(test.description(), Some("Test A"));
}

/// Verifies missing strategy is rejected as an invalid argument.
#[test]
fn builder_rejects_missing_strategy() {
    let err = TestCase::builder().input("a").expected("a").build().unwrap_err();
    assert!(matches!(err, CheckError::InvalidArgument(message) if message.contains("strategy")));
}

/// Verifies missing input and expected values are rejected.
#[test]
fn builder_rejects_missing_input_or_expected() {
    let missing_input = TestCase::builder()
        .expected("a")
        .strategy(ComparisonStrategy::exact())
        .build()
        .unwrap_err();
    assert!(
        matches!(missing_input, CheckError::InvalidArgument(message) if message.contains("input"))
    );

    let missing_expected = TestCase::builder()
        .input("a")
        .strategy(ComparisonStrategy::exact())
        .build()
        .unwrap_err();
    assert!(matches!(
        missing_expected,
        CheckError::InvalidArgument(message) if message.contains("expected")
    ));
}

// ============================================================================
// SECTION: Run
// ============================================================================

/// Verifies run records the raw input as actual output.
#[test]
fn run_records_input_as_actual_output() {
    let failing = TestCase::new("input1", "expected1", ComparisonStrategy::exact());
    let result = failing.run();
    assert_eq!(result.actual_output, "input1");
    assert!(!result.passed);

    let passing = TestCase::new("input2", "input2", ComparisonStrategy::gated(3));
    let result = passing.run();
    assert_eq!(result.actual_output, "input2");
    assert!(result.passed);
}

/// Verifies the description never leaks into the comparison.
#[test]
fn described_test_compares_base_input() {
    let test =
        TestCase::new("same", "same", ComparisonStrategy::exact()).with_description("Test B");
    assert!(test.passes());
    assert_eq!(test.run().actual_output, "same");
}

// ============================================================================
// SECTION: Display
// ============================================================================

/// Verifies display input rendering for plain and described tests.
#[test]
fn display_input_prefixes_description() {
    let plain = TestCase::new("input4", "expected4", ComparisonStrategy::gated(5));
    assert_eq!(plain.display_input(), "input4");

    let described = plain.with_description("Test C");
    assert_eq!(described.display_input(), "Description: Test C, Input: input4");
    assert_eq!(described.input(), "input4");
}
