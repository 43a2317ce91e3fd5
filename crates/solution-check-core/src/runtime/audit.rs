// solution-check-core/src/runtime/audit.rs
// ============================================================================
// Module: Solution Check Audit Sinks
// Description: Built-in sinks for checker audit events.
// Purpose: Provide no-op, stderr JSON-lines, and in-memory event sinks.
// Dependencies: crate::interfaces, serde_json
// ============================================================================

//! ## Overview
//! Built-in sinks cover the common deployments: discard everything, emit one
//! JSON object per line on stderr, or collect events in memory for embedders
//! and tests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Mutex;

use crate::interfaces::CheckAuditEvent;
use crate::interfaces::CheckAuditSink;

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAuditSink;

impl CheckAuditSink for NoopAuditSink {
    fn record(&self, _event: &CheckAuditEvent) {}
}

/// Audit sink that logs JSON lines to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrAuditSink;

impl CheckAuditSink for StderrAuditSink {
    fn record(&self, event: &CheckAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that keeps events in memory.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    /// Recorded events in arrival order.
    events: Mutex<Vec<CheckAuditEvent>>,
}

impl MemoryAuditSink {
    /// Creates an empty in-memory sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<CheckAuditEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }

    /// Returns the recorded events with the given label.
    #[must_use]
    pub fn events_of(&self, event: &str) -> Vec<CheckAuditEvent> {
        self.events().into_iter().filter(|recorded| recorded.event == event).collect()
    }
}

impl CheckAuditSink for MemoryAuditSink {
    fn record(&self, event: &CheckAuditEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
