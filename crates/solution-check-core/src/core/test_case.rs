// solution-check-core/src/core/test_case.rs
// ============================================================================
// Module: Solution Check Test Cases
// Description: Input/expected pairs bound to a comparison strategy.
// Purpose: Provide immutable test cases and their single run operation.
// Dependencies: crate::core::{error, strategy, submission}, serde
// ============================================================================

//! ## Overview
//! A [`TestCase`] binds an input, an expected value, and a
//! [`ComparisonStrategy`]. Running it records the raw input as the observed
//! output and the strategy verdict as the pass flag; the user solution is
//! never executed against the input.
//!
//! An optional description only affects presentation through
//! [`TestCase::display_input`]. The strategy always receives the base input.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::error::CheckError;
use crate::core::strategy::ComparisonStrategy;
use crate::core::submission::ExecutionResult;

// ============================================================================
// SECTION: Test Case
// ============================================================================

/// Immutable test case owned by a test suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Input handed to the comparison strategy.
    input: String,
    /// Value the input is compared against.
    expected: String,
    /// Comparison policy used to judge the input.
    strategy: ComparisonStrategy,
    /// Optional human-readable description used for reporting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl TestCase {
    /// Creates a test case from its input, expected value, and strategy.
    #[must_use]
    pub fn new(
        input: impl Into<String>,
        expected: impl Into<String>,
        strategy: ComparisonStrategy,
    ) -> Self {
        Self {
            input: input.into(),
            expected: expected.into(),
            strategy,
            description: None,
        }
    }

    /// Returns a builder that validates every required field.
    #[must_use]
    pub fn builder() -> TestCaseBuilder {
        TestCaseBuilder::default()
    }

    /// Returns a copy of this test case carrying a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the raw input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the expected value.
    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Returns the bound comparison strategy.
    #[must_use]
    pub const fn strategy(&self) -> &ComparisonStrategy {
        &self.strategy
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the input as shown in reports.
    ///
    /// Described test cases render as `Description: X, Input: Y`; all others
    /// render the raw input unchanged.
    #[must_use]
    pub fn display_input(&self) -> String {
        match &self.description {
            Some(description) => format!("Description: {description}, Input: {}", self.input),
            None => self.input.clone(),
        }
    }

    /// Evaluates the strategy without producing a result record.
    #[must_use]
    pub fn passes(&self) -> bool {
        self.strategy.evaluate(&self.input, &self.expected)
    }

    /// Runs the test case.
    ///
    /// The raw input is recorded as the actual output.
    #[must_use]
    pub fn run(&self) -> ExecutionResult {
        ExecutionResult::new(self.input.clone(), self.passes())
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builder that rejects test cases with missing fields.
#[derive(Debug, Clone, Default)]
pub struct TestCaseBuilder {
    /// Pending input value.
    input: Option<String>,
    /// Pending expected value.
    expected: Option<String>,
    /// Pending comparison strategy.
    strategy: Option<ComparisonStrategy>,
    /// Pending description.
    description: Option<String>,
}

impl TestCaseBuilder {
    /// Sets the input value.
    #[must_use]
    pub fn input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Sets the expected value.
    #[must_use]
    pub fn expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Sets the comparison strategy.
    #[must_use]
    pub const fn strategy(mut self, strategy: ComparisonStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Sets the reporting description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds the test case.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::InvalidArgument`] when the input, expected value,
    /// or strategy was never set.
    pub fn build(self) -> Result<TestCase, CheckError> {
        let input = self
            .input
            .ok_or_else(|| CheckError::InvalidArgument("test case input is missing".to_string()))?;
        let expected = self.expected.ok_or_else(|| {
            CheckError::InvalidArgument("test case expected value is missing".to_string())
        })?;
        let strategy = self.strategy.ok_or_else(|| {
            CheckError::InvalidArgument("test case comparison strategy is missing".to_string())
        })?;
        Ok(TestCase {
            input,
            expected,
            strategy,
            description: self.description,
        })
    }
}
