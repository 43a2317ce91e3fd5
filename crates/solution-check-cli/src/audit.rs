// solution-check-cli/src/audit.rs
// ============================================================================
// Module: CLI Audit Sinks
// Description: File-backed audit sink and config-driven sink selection.
// Purpose: Route checker audit events to the destination named in config.
// Dependencies: solution-check-core, solution-check-config, serde_json
// ============================================================================

//! ## Overview
//! The core ships sinks that never touch the filesystem. The CLI adds an
//! append-only JSON-lines file sink and selects a sink from `[audit]`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;

use solution_check_config::AuditConfig;
use solution_check_config::AuditSinkKind;
use solution_check_core::CheckAuditEvent;
use solution_check_core::CheckAuditSink;
use solution_check_core::NoopAuditSink;
use solution_check_core::StderrAuditSink;

// ============================================================================
// SECTION: File Sink
// ============================================================================

/// Audit sink that appends JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl CheckAuditSink for FileAuditSink {
    fn record(&self, event: &CheckAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

// ============================================================================
// SECTION: Selection
// ============================================================================

/// Builds the audit sink selected by `config`.
///
/// # Errors
///
/// Returns an error when the file sink cannot open its destination.
pub fn build_audit_sink(config: &AuditConfig) -> io::Result<Arc<dyn CheckAuditSink>> {
    match (config.sink, &config.path) {
        (AuditSinkKind::File, Some(path)) => Ok(Arc::new(FileAuditSink::new(path)?)),
        (AuditSinkKind::File, None) => {
            Err(io::Error::new(io::ErrorKind::InvalidInput, "audit.path is not set"))
        }
        (AuditSinkKind::Stderr, _) => Ok(Arc::new(StderrAuditSink)),
        (AuditSinkKind::None, _) => Ok(Arc::new(NoopAuditSink)),
    }
}
