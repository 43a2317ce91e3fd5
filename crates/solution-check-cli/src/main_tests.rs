// solution-check-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for locale resolution, lookup text, and the demo.
// Purpose: Ensure entry-point helpers behave as the commands expect.
// Dependencies: solution-check-cli main helpers
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only panic-based assertions are permitted."
)]

use clap::Parser;
use solution_check_cli::i18n::Locale;
use solution_check_core::sort_by_input;

use super::Cli;
use super::Commands;
use super::LangArg;
use super::OutputFormat;
use super::demo_run_lines;
use super::demo_tests;
use super::describe_lookup;
use super::resolve_locale;

#[test]
fn flag_locale_wins_over_environment() {
    let locale = resolve_locale(Some(LangArg::Ca), Some("en")).unwrap();
    assert_eq!(locale, Locale::Ca);
}

#[test]
fn environment_locale_is_parsed() {
    assert_eq!(resolve_locale(None, Some("ca-ES")).unwrap(), Locale::Ca);
    assert_eq!(resolve_locale(None, None).unwrap(), Locale::En);
}

#[test]
fn invalid_environment_locale_fails_closed() {
    let err = resolve_locale(None, Some("klingon")).unwrap_err();
    assert!(err.to_string().contains("klingon"));
}

#[test]
fn demo_lookup_misses_expected3_in_plain_tests() {
    let (tests, described) = demo_tests();
    assert_eq!(describe_lookup(&tests, "expected3"), "Test with expected 'expected3' not found.");
    assert_eq!(describe_lookup(&described, "expected3"), "Found test with expected: expected3");
}

#[test]
fn demo_runs_match_reference_outcome() {
    let (mut tests, _) = demo_tests();
    sort_by_input(&mut tests);
    let outcomes: Vec<(String, bool)> =
        tests.iter().map(|test| (test.input().to_string(), test.run().passed)).collect();
    assert_eq!(outcomes, vec![("input1".to_string(), false), ("input2".to_string(), true)]);
}

#[test]
fn demo_gated_run_announces_complexity_first() {
    let (mut tests, _) = demo_tests();
    sort_by_input(&mut tests);
    assert_eq!(
        demo_run_lines(&tests),
        vec![
            "Test with input: input1 passed: false",
            "Executing with complexity level: 3",
            "Test with input: input2 passed: true",
        ]
    );
}

#[test]
fn demo_described_tests_sort_by_input() {
    let (_, mut described) = demo_tests();
    sort_by_input(&mut described);
    let displayed: Vec<String> = described.iter().map(|test| test.display_input()).collect();
    assert_eq!(
        displayed,
        vec![
            "Description: Test A, Input: input3",
            "Description: Test C, Input: input4",
            "Description: Test B, Input: input5",
        ]
    );
}

#[test]
fn check_command_parses_defaults() {
    let cli = Cli::try_parse_from([
        "solution-check",
        "check",
        "--task",
        "task.toml",
        "--solution",
        "payload",
    ])
    .unwrap();
    let Some(Commands::Check(command)) = cli.command else {
        panic!("expected check command");
    };
    assert!(matches!(command.format, OutputFormat::Text));
    assert_eq!(command.solution, "payload");
    assert!(command.task.config.is_none());
}

#[test]
fn check_command_requires_solution() {
    assert!(Cli::try_parse_from(["solution-check", "check", "--task", "task.toml"]).is_err());
}
