// solution-check-config/src/lib.rs
// ============================================================================
// Module: Solution Check Config Library
// Description: Checker configuration and task definition loading.
// Purpose: Single source of truth for solution-check.toml and task file semantics.
// Dependencies: solution-check-core, serde, toml
// ============================================================================

//! ## Overview
//! `solution-check-config` parses the checker configuration and task
//! definition files. Both are TOML, both are size-limited, and both fail
//! closed: an invalid file is rejected as a whole rather than partially
//! applied.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;
pub mod task_file;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
pub use examples::task_toml_example;
pub use task_file::TaskDefinition;
pub use task_file::TestDefinition;
