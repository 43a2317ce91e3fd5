// solution-check-core/tests/checker.rs
// ============================================================================
// Module: Checker Tests
// Description: End-to-end checking, failure isolation, and audit events.
// Purpose: Ensure submissions are index-aligned and totals are reductions.
// Dependencies: solution-check-core
// ============================================================================
//! ## Overview
//! Runs the checker over small tasks and verifies result sizing, per-index
//! verdicts, bonus slots, isolated comparison failures, and audit output.

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

use std::sync::Arc;

use solution_check_core::COMPARISON_FAILURE_MARKER;
use solution_check_core::CheckError;
use solution_check_core::CheckLimits;
use solution_check_core::Checker;
use solution_check_core::ComparisonStrategy;
use solution_check_core::ExecutionResult;
use solution_check_core::MemoryAuditSink;
use solution_check_core::Task;
use solution_check_core::TestCase;
use solution_check_core::TestSuite;
use solution_check_core::UserSolution;
use solution_check_core::interfaces::CheckAuditEvent;
use solution_check_core::interfaces::EVENT_COMPARISON_FAILED;
use solution_check_core::interfaces::EVENT_RESULT_WRITE_REJECTED;
use solution_check_core::interfaces::EVENT_SUBMISSION_CHECKED;
use solution_check_core::interfaces::EVENT_SUITE_COUNT_MISMATCH;
use solution_check_core::runtime::check;

fn echo_task() -> Task {
    let suite = TestSuite::new(vec![
        TestCase::new("input1", "expected1", ComparisonStrategy::exact()),
        TestCase::new("input2", "input2", ComparisonStrategy::gated(3)),
    ]);
    Task::new("Echo task", suite).unwrap()
}

// ============================================================================
// SECTION: End-to-End
// ============================================================================

/// Verifies the reference task yields [false, true] with one pass.
#[test]
fn check_reference_task() {
    let submission = check(UserSolution::new("any solution"), &echo_task());

    let verdicts: Vec<bool> = submission.results().iter().map(|result| result.passed).collect();
    assert_eq!(verdicts, vec![false, true]);
    assert_eq!(submission.total_passed(), 1);
    assert_eq!(submission.total(), 2);
    assert!(!submission.all_passed());
    assert_eq!(submission.solution().payload(), "any solution");
}

/// Verifies each slot matches its test's own verdict.
#[test]
fn results_align_with_tests() {
    let task = Task::new(
        "Mixed task",
        TestSuite::new(vec![
            TestCase::new("b", "b", ComparisonStrategy::gated(1)),
            TestCase::new("a", "a", ComparisonStrategy::exact()),
            TestCase::new("c", "d", ComparisonStrategy::gated(9)),
            TestCase::new("e", "e", ComparisonStrategy::gated(9)),
        ]),
    )
    .unwrap();
    let submission = Checker::default().check(UserSolution::new("s"), &task);

    for (test, result) in task.suite().tests().iter().zip(submission.results()) {
        assert_eq!(result.passed, test.strategy().evaluate(test.input(), test.expected()));
        assert_eq!(result.actual_output, test.input());
    }
    assert_eq!(submission.total_passed(), 2);
}

/// Verifies an empty task produces an empty, fully passed submission.
#[test]
fn empty_task_yields_empty_submission() {
    let task = Task::new("Empty", TestSuite::new(Vec::new())).unwrap();
    let submission = check(UserSolution::new(""), &task);
    assert!(submission.results().is_empty());
    assert_eq!(submission.total_passed(), 0);
    assert!(submission.all_passed());
}

// ============================================================================
// SECTION: Bonus Slots
// ============================================================================

/// Verifies bonus suites size the submission by count and leave the extra slot default.
#[test]
fn bonus_suite_sizes_submission_by_count() {
    let sink = Arc::new(MemoryAuditSink::new());
    let checker = Checker::new(CheckLimits::default(), sink.clone());
    let task = Task::new(
        "Bonus task",
        TestSuite::with_bonus_test(vec![TestCase::new("x", "x", ComparisonStrategy::exact())]),
    )
    .unwrap();

    let submission = checker.check(UserSolution::new("s"), &task);

    assert_eq!(submission.results().len(), task.suite().count());
    assert_eq!(submission.results()[0], ExecutionResult::new("x", true));
    assert_eq!(submission.results()[1], ExecutionResult::default());
    assert_eq!(submission.total_passed(), 1);

    let mismatches = sink.events_of(EVENT_SUITE_COUNT_MISMATCH);
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].reported_count, Some(2));
    assert_eq!(mismatches[0].enumerable_count, Some(1));
}

// ============================================================================
// SECTION: Failure Isolation
// ============================================================================

/// Verifies an oversized operand fails only its own slot.
#[test]
fn oversized_operand_is_isolated() {
    let sink = Arc::new(MemoryAuditSink::new());
    let checker = Checker::new(
        CheckLimits {
            max_operand_bytes: Some(8),
        },
        sink.clone(),
    );
    let task = Task::new(
        "Limits task",
        TestSuite::new(vec![
            TestCase::new("ok", "ok", ComparisonStrategy::exact()),
            TestCase::new("way-too-long", "way-too-long", ComparisonStrategy::exact()),
            TestCase::new("fine", "fine", ComparisonStrategy::gated(3)),
        ]),
    )
    .unwrap();

    let submission = checker.check(UserSolution::new("s"), &task);

    assert!(submission.results()[0].passed);
    assert!(submission.results()[1].is_comparison_failure());
    assert_eq!(submission.results()[1].actual_output, COMPARISON_FAILURE_MARKER);
    assert!(submission.results()[2].passed);
    assert_eq!(submission.total_passed(), 2);

    let failures = sink.events_of(EVENT_COMPARISON_FAILED);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].test_index, Some(1));
    assert!(failures[0].reason.as_deref().unwrap().contains("input"));
}

/// Verifies the default checker judges large operands by their strategy alone.
#[test]
fn default_checker_has_no_operand_limit() {
    let large = "x".repeat(70 * 1024);
    let test = TestCase::new(large.clone(), large, ComparisonStrategy::exact());
    assert!(test.passes());
    let task = Task::new("Large task", TestSuite::new(vec![test])).unwrap();

    let submission = check(UserSolution::new("s"), &task);

    assert!(submission.results()[0].passed);
    assert!(!submission.results()[0].is_comparison_failure());
    assert_eq!(submission.results()[0].actual_output.len(), 70 * 1024);
    assert_eq!(submission.total_passed(), 1);
    assert_eq!(CheckLimits::default().max_operand_bytes, None);
}

/// Verifies evaluate_case reports the failing operand.
#[test]
fn evaluate_case_reports_comparison_failure() {
    let checker = Checker::new(
        CheckLimits {
            max_operand_bytes: Some(3),
        },
        Arc::new(MemoryAuditSink::new()),
    );
    let test = TestCase::new("abc", "abcd", ComparisonStrategy::exact());
    let err = checker.evaluate_case(7, &test).unwrap_err();
    assert_eq!(
        err,
        CheckError::ComparisonFailure {
            index: 7,
            reason: "expected is 4 bytes (limit 3)".to_string(),
        }
    );
}

// ============================================================================
// SECTION: Audit
// ============================================================================

/// Verifies a completed check emits a submission summary event.
#[test]
fn check_emits_submission_checked_event() {
    let sink = Arc::new(MemoryAuditSink::new());
    let checker = Checker::new(CheckLimits::default(), sink.clone());
    let solution = UserSolution::new("payload");
    let digest = solution.digest();

    let _ = checker.check(solution, &echo_task());

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event, EVENT_SUBMISSION_CHECKED);
    assert_eq!(events[0].task, "Echo task");
    assert_eq!(events[0].total_passed, Some(1));
    assert_eq!(events[0].solution_hash, Some(digest));

    let line = serde_json::to_value(&events[0]).unwrap();
    assert_eq!(line["event"], "submission_checked");
    assert!(line.get("test_index").is_none());
}

/// Verifies rejected writes carry their own event label.
#[test]
fn rejected_write_event_is_distinct() {
    let event = CheckAuditEvent::result_write_rejected(
        "Echo task",
        4,
        "result index 4 out of range for submission of 2 results",
    );
    assert_eq!(event.event, EVENT_RESULT_WRITE_REJECTED);
    assert_ne!(event.event, EVENT_COMPARISON_FAILED);
    assert_eq!(event.test_index, Some(4));

    let line = serde_json::to_value(&event).unwrap();
    assert_eq!(line["event"], "result_write_rejected");
    assert!(line["reason"].as_str().unwrap().contains("out of range"));
}
