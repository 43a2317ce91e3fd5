// solution-check-core/src/lib.rs
// ============================================================================
// Module: Solution Check Core Library
// Description: Public API surface for the Solution Check core.
// Purpose: Expose the data model, comparison strategies, and checker runtime.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Solution Check core runs an opaque user solution against the test cases of
//! a task and aggregates the per-test outcomes into a submission. Each test
//! case judges its input against an expected value through a closed set of
//! comparison strategies. The core performs no file or network I/O and never
//! interprets the solution payload.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::CheckAuditEvent;
pub use interfaces::CheckAuditSink;
pub use runtime::CheckLimits;
pub use runtime::Checker;
pub use runtime::MemoryAuditSink;
pub use runtime::NoopAuditSink;
pub use runtime::StderrAuditSink;
