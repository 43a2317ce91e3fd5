// solution-check-config/src/config.rs
// ============================================================================
// Module: Solution Check Configuration
// Description: Configuration loading and validation for the checker.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: solution-check-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file resolved from an explicit path,
//! the `SOLUTION_CHECK_CONFIG` environment variable, or the default file
//! name. A missing default file yields the built-in defaults; a missing
//! explicit file is an error. Every loaded value is range-checked before use.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use solution_check_core::CheckLimits;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "solution-check.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "SOLUTION_CHECK_CONFIG";
/// Maximum configuration or task file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Largest accepted comparison operand limit in bytes.
pub(crate) const MAX_OPERAND_BYTES_CEILING: usize = 16 * 1024 * 1024;
/// Default maximum number of tests per task definition.
pub(crate) const DEFAULT_MAX_TESTS: usize = 4096;
/// Largest accepted per-task test limit.
pub(crate) const MAX_TESTS_CEILING: usize = 65_536;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Solution Check configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionCheckConfig {
    /// Evaluation and task size limits.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Audit event routing.
    #[serde(default)]
    pub audit: AuditConfig,
}

impl SolutionCheckConfig {
    /// Loads configuration using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (resolved, required) = resolve_path(path)?;
        if !required && !resolved.exists() {
            return Ok(Self::default());
        }
        let content = read_limited_utf8(&resolved)?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.limits.validate()?;
        self.audit.validate()
    }

    /// Returns the checker limits derived from this configuration.
    #[must_use]
    pub const fn check_limits(&self) -> CheckLimits {
        CheckLimits {
            max_operand_bytes: self.limits.max_operand_bytes,
        }
    }
}

/// Evaluation and task size limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum size of a single input or expected value in bytes.
    /// Operands are unbounded when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_operand_bytes: Option<usize>,
    /// Maximum number of tests per task definition.
    #[serde(default = "default_max_tests")]
    pub max_tests: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_operand_bytes: None,
            max_tests: default_max_tests(),
        }
    }
}

impl LimitsConfig {
    /// Validates limit ranges.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(limit) = self.max_operand_bytes
            && (limit == 0 || limit > MAX_OPERAND_BYTES_CEILING)
        {
            return Err(ConfigError::Invalid(format!(
                "limits.max_operand_bytes must be between 1 and {MAX_OPERAND_BYTES_CEILING}"
            )));
        }
        if self.max_tests == 0 || self.max_tests > MAX_TESTS_CEILING {
            return Err(ConfigError::Invalid(format!(
                "limits.max_tests must be between 1 and {MAX_TESTS_CEILING}"
            )));
        }
        Ok(())
    }
}

/// Audit sink selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSinkKind {
    /// Discard audit events.
    #[default]
    None,
    /// Emit JSON lines on stderr.
    Stderr,
    /// Append JSON lines to a file.
    File,
}

/// Audit event routing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Selected sink.
    #[serde(default)]
    pub sink: AuditSinkKind,
    /// Destination path for the file sink.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl AuditConfig {
    /// Validates sink and path consistency.
    fn validate(&self) -> Result<(), ConfigError> {
        match (self.sink, &self.path) {
            (AuditSinkKind::File, None) => Err(ConfigError::Invalid(
                "audit.path is required when audit.sink = \"file\"".to_string(),
            )),
            (AuditSinkKind::File, Some(path)) => validate_path(path),
            (AuditSinkKind::None | AuditSinkKind::Stderr, Some(_)) => Err(ConfigError::Invalid(
                "audit.path is only valid when audit.sink = \"file\"".to_string(),
            )),
            (AuditSinkKind::None | AuditSinkKind::Stderr, None) => Ok(()),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Default for [`LimitsConfig::max_tests`].
const fn default_max_tests() -> usize {
    DEFAULT_MAX_TESTS
}

/// Resolves the config path and whether it must exist.
fn resolve_path(path: Option<&Path>) -> Result<(PathBuf, bool), ConfigError> {
    if let Some(path) = path {
        return Ok((path.to_path_buf(), true));
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok((PathBuf::from(env_path), true));
    }
    Ok((PathBuf::from(DEFAULT_CONFIG_NAME), false))
}

/// Validates a path against length limits.
pub(crate) fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.trim().is_empty() {
        return Err(ConfigError::Invalid("path must not be empty".to_string()));
    }
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("path component too long".to_string()));
        }
    }
    Ok(())
}

/// Reads a size-limited UTF-8 file.
pub(crate) fn read_limited_utf8(path: &Path) -> Result<String, ConfigError> {
    validate_path(path)?;
    let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
    if bytes.len() > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::Invalid("file exceeds size limit".to_string()));
    }
    String::from_utf8(bytes).map_err(|_| ConfigError::Invalid("file must be utf-8".to_string()))
}
