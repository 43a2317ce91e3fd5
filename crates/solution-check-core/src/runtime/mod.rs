// solution-check-core/src/runtime/mod.rs
// ============================================================================
// Module: Solution Check Runtime
// Description: Checker algorithm and built-in audit sinks.
// Purpose: Execute tasks against user solutions and report systemic events.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules run checking sessions. Every caller (CLI, embedding
//! service, test harness) goes through [`Checker::check`] so results are
//! aggregated the same way everywhere.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod audit;
pub mod checker;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::MemoryAuditSink;
pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use checker::CheckLimits;
pub use checker::Checker;
pub use checker::check;
