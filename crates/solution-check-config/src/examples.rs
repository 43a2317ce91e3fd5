// solution-check-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration and task payloads.
// Purpose: Deterministic examples for docs and the CLI demo.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical examples for Solution Check files. Both examples parse and
//! validate with default limits.

/// Returns a canonical example `solution-check.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[limits]
max_operand_bytes = 65536
max_tests = 4096

[audit]
sink = "stderr"
"#,
    )
}

/// Returns a canonical example task definition.
#[must_use]
pub fn task_toml_example() -> String {
    String::from(
        r#"description = "Echo task"
count_policy = "enumerated"

[[tests]]
input = "input1"
expected = "expected1"
strategy = { type = "exact" }

[[tests]]
input = "input2"
expected = "input2"
strategy = { type = "gated", threshold = 3 }
"#,
    )
}
