//! Configuration with YAML schema and validation.
//!
//! Mistake-proofing happens in three layers:
//! - Type-safe configuration structs with `deny_unknown_fields`
//! - Declarative range checks via `validator`
//! - Semantic checks that span fields

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::engine::GuardConfig;
use crate::error::{FormulaError, FormulaResult};

/// Top-level solver configuration.
///
/// Every section has defaults, so an empty document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SolverConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Finite-value guard applied to routine results.
    #[serde(default)]
    pub guard: GuardConfig,

    /// Post-solve verification against governing equations.
    #[validate(nested)]
    #[serde(default)]
    pub verification: VerificationConfig,

    /// How results are rendered by the CLI.
    #[validate(nested)]
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            guard: GuardConfig::default(),
            verification: VerificationConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl SolverConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> FormulaResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> FormulaResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> SolverConfigBuilder {
        SolverConfigBuilder::default()
    }

    /// Validate constraints that span fields.
    fn validate_semantic(&self) -> FormulaResult<()> {
        let tolerance = self.verification.relative_tolerance;
        if self.verification.enabled && !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(FormulaError::config(format!(
                "verification tolerance must be positive and finite, got {tolerance}"
            )));
        }
        Ok(())
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct SolverConfigBuilder {
    check_finite: Option<bool>,
    verify: Option<bool>,
    tolerance: Option<f64>,
    format: Option<OutputFormat>,
    precision: Option<usize>,
}

impl SolverConfigBuilder {
    /// Enable or disable the finite-value guard.
    #[must_use]
    pub const fn check_finite(mut self, enabled: bool) -> Self {
        self.check_finite = Some(enabled);
        self
    }

    /// Enable or disable post-solve verification.
    #[must_use]
    pub const fn verify(mut self, enabled: bool) -> Self {
        self.verify = Some(enabled);
        self
    }

    /// Set the verification tolerance.
    #[must_use]
    pub const fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the output format.
    #[must_use]
    pub const fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the number of decimals printed.
    #[must_use]
    pub const fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the assembled configuration fails validation.
    pub fn build(self) -> FormulaResult<SolverConfig> {
        let mut config = SolverConfig::default();

        if let Some(enabled) = self.check_finite {
            config.guard.check_finite = enabled;
        }
        if let Some(enabled) = self.verify {
            config.verification.enabled = enabled;
        }
        if let Some(tolerance) = self.tolerance {
            config.verification.relative_tolerance = tolerance;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(precision) = self.precision {
            config.output.precision = precision;
        }

        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }
}

/// Post-solve verification settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct VerificationConfig {
    /// Check solved sets against governing equations.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Maximum relative residual accepted.
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_tolerance")]
    pub relative_tolerance: f64,
}

const fn default_true() -> bool {
    true
}

const fn default_tolerance() -> f64 {
    1e-9
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            relative_tolerance: default_tolerance(),
        }
    }
}

/// Output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// JSON document.
    Json,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Text or JSON.
    #[serde(default)]
    pub format: OutputFormat,
    /// Decimals printed in text mode.
    #[validate(range(max = 17))]
    #[serde(default = "default_precision")]
    pub precision: usize,
}

const fn default_precision() -> usize {
    6
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: default_precision(),
        }
    }
}
