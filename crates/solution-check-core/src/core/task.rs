// solution-check-core/src/core/task.rs
// ============================================================================
// Module: Solution Check Tasks
// Description: Task definitions and opaque user solutions.
// Purpose: Pair a description with a test suite and carry the candidate payload.
// Dependencies: crate::core::{error, hashing, suite}, serde
// ============================================================================

//! ## Overview
//! A [`Task`] pairs a human-readable description with a shared
//! [`TestSuite`] handle. Two copy operations are offered:
//! [`Task::copy_reference`] shares the suite handle, while
//! [`Task::copy_value`] allocates an independent suite with the same tests.
//!
//! A [`UserSolution`] is an opaque payload. The core never parses or executes
//! it; reports carry only its digest.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::core::error::CheckError;
use crate::core::hashing::DEFAULT_HASH_ALGORITHM;
use crate::core::hashing::HashDigest;
use crate::core::hashing::hash_bytes;
use crate::core::suite::TestSuite;

// ============================================================================
// SECTION: User Solution
// ============================================================================

/// Opaque candidate solution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserSolution {
    /// Uninterpreted solution payload.
    payload: String,
}

impl UserSolution {
    /// Creates a user solution from its payload.
    #[must_use]
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// Returns the raw payload.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Returns the payload digest.
    #[must_use]
    pub fn digest(&self) -> HashDigest {
        hash_bytes(DEFAULT_HASH_ALGORITHM, self.payload.as_bytes())
    }
}

impl From<&str> for UserSolution {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UserSolution {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Task
// ============================================================================

/// Described test suite presented to a solver.
#[derive(Debug, Clone)]
pub struct Task {
    /// Human-readable task description.
    description: String,
    /// Shared handle to the task's suite.
    suite: Arc<TestSuite>,
}

impl Task {
    /// Creates a task that owns `suite`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::InvalidArgument`] when the description is blank.
    pub fn new(description: impl Into<String>, suite: TestSuite) -> Result<Self, CheckError> {
        Self::with_shared_suite(description, Arc::new(suite))
    }

    /// Creates a task over an existing suite handle.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::InvalidArgument`] when the description is blank.
    pub fn with_shared_suite(
        description: impl Into<String>,
        suite: Arc<TestSuite>,
    ) -> Result<Self, CheckError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(CheckError::InvalidArgument("task description is empty".to_string()));
        }
        Ok(Self {
            description,
            suite,
        })
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task's suite.
    #[must_use]
    pub fn suite(&self) -> &TestSuite {
        &self.suite
    }

    /// Returns a copy that shares this task's suite handle.
    #[must_use]
    pub fn copy_reference(&self) -> Self {
        Self {
            description: self.description.clone(),
            suite: Arc::clone(&self.suite),
        }
    }

    /// Returns a copy with an independently allocated suite.
    #[must_use]
    pub fn copy_value(&self) -> Self {
        Self {
            description: self.description.clone(),
            suite: Arc::new(TestSuite::clone(&self.suite)),
        }
    }

    /// Returns true when both tasks point at the same suite allocation.
    #[must_use]
    pub fn shares_suite_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.suite, &other.suite)
    }
}
