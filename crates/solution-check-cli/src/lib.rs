// solution-check-cli/src/lib.rs
// ============================================================================
// Module: Solution Check CLI Library
// Description: Shared helpers for the solution-check binary.
// Purpose: Expose localization and audit sink selection to the entry point.
// Dependencies: solution-check-core, solution-check-config
// ============================================================================

//! ## Overview
//! Library half of the `solution-check` binary: the message catalog behind
//! the [`t!`] macro and the config-driven audit sink builder.

pub mod audit;
pub mod i18n;

#[cfg(test)]
mod tests;
