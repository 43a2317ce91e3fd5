// solution-check-config/src/task_file.rs
// ============================================================================
// Module: Task Definition Files
// Description: TOML task definitions that build core tasks.
// Purpose: Load tasks from disk with the same validation as in-process construction.
// Dependencies: solution-check-core, serde, toml
// ============================================================================

//! ## Overview
//! A task file names a description, an optional count policy, and an ordered
//! `[[tests]]` array. File order becomes suite order. Each test is built
//! through the core test case builder, so a missing field is rejected with
//! the same invalid-argument error as in-process construction, tagged with
//! the test's position.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use solution_check_core::CheckError;
use solution_check_core::CheckSession;
use solution_check_core::ComparisonStrategy;
use solution_check_core::CountPolicy;
use solution_check_core::Task;
use solution_check_core::TestCase;

use crate::config::ConfigError;
use crate::config::LimitsConfig;
use crate::config::read_limited_utf8;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Task definition file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDefinition {
    /// Human-readable task description.
    pub description: String,
    /// Reported count policy for the suite.
    #[serde(default)]
    pub count_policy: CountPolicy,
    /// Ordered test definitions.
    #[serde(default)]
    pub tests: Vec<TestDefinition>,
}

/// One `[[tests]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestDefinition {
    /// Test input.
    pub input: Option<String>,
    /// Expected value.
    pub expected: Option<String>,
    /// Comparison strategy.
    pub strategy: Option<ComparisonStrategy>,
    /// Optional reporting description.
    #[serde(default)]
    pub description: Option<String>,
}

impl TaskDefinition {
    /// Loads a task definition from disk and checks it against `limits`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, parsed, or
    /// exceeds the configured limits.
    pub fn load(path: &Path, limits: &LimitsConfig) -> Result<Self, ConfigError> {
        let content = read_limited_utf8(path)?;
        Self::from_toml_str(&content, limits)
    }

    /// Parses a task definition and checks it against `limits`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing fails or limits are exceeded.
    pub fn from_toml_str(content: &str, limits: &LimitsConfig) -> Result<Self, ConfigError> {
        let definition: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        definition.validate(limits)?;
        Ok(definition)
    }

    /// Checks the definition against `limits`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the definition has too many tests.
    pub fn validate(&self, limits: &LimitsConfig) -> Result<(), ConfigError> {
        if self.tests.len() > limits.max_tests {
            return Err(ConfigError::Invalid(format!(
                "task defines {} tests (limit {})",
                self.tests.len(),
                limits.max_tests
            )));
        }
        Ok(())
    }

    /// Builds the test cases in file order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a test is missing a required field.
    pub fn test_cases(&self) -> Result<Vec<TestCase>, ConfigError> {
        self.tests
            .iter()
            .enumerate()
            .map(|(index, test)| {
                test.to_test_case()
                    .map_err(|err| ConfigError::Invalid(format!("tests[{index}]: {err}")))
            })
            .collect()
    }

    /// Builds a core task, creating its suite through `session`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a test or the description is invalid.
    pub fn to_task(&self, session: &mut CheckSession) -> Result<Task, ConfigError> {
        let tests = self.test_cases()?;
        let suite = session.create_suite(tests, self.count_policy);
        Task::new(self.description.clone(), suite)
            .map_err(|err| ConfigError::Invalid(err.to_string()))
    }
}

impl TestDefinition {
    /// Builds the core test case.
    fn to_test_case(&self) -> Result<TestCase, CheckError> {
        let mut builder = TestCase::builder();
        if let Some(input) = &self.input {
            builder = builder.input(input.clone());
        }
        if let Some(expected) = &self.expected {
            builder = builder.expected(expected.clone());
        }
        if let Some(strategy) = self.strategy {
            builder = builder.strategy(strategy);
        }
        if let Some(description) = &self.description {
            builder = builder.description(description.clone());
        }
        builder.build()
    }
}
