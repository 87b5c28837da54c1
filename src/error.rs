//! Error types for formulary.
//!
//! Every fallible operation returns `Result<T, FormulaError>`; nothing in
//! the library panics or silently substitutes a default value.

use thiserror::Error;

/// Result type alias for formulary operations.
pub type FormulaResult<T> = Result<T, FormulaError>;

/// Unified error type for all formulary operations.
#[derive(Debug, Error)]
pub enum FormulaError {
    // ===== Variable Access =====
    /// A blank variable was read.
    #[error("Missing value: '{variable}' has not been set")]
    MissingValue {
        /// Name of the blank variable.
        variable: &'static str,
    },

    /// A variable name did not match any member of the formula's variable set.
    #[error("Unknown variable '{name}'")]
    UnknownVariable {
        /// The name that failed to resolve.
        name: String,
    },

    // ===== Solving =====
    /// The presence pattern does not select a registered routine.
    #[error("Unrecognized combination of unknowns: {unknowns} blank (key {key:05b})")]
    UnrecognizedCombination {
        /// Bitmask of blank variables.
        key: u8,
        /// Number of blank variables.
        unknowns: u32,
    },

    /// A routine's closed-form solution is undefined for the given inputs.
    #[error("Domain error: {message}")]
    Domain {
        /// Which precondition failed.
        message: String,
    },

    /// A solved set does not satisfy a governing equation.
    #[error("Relation '{relation}' violated: residual {residual:.6e} exceeds tolerance {tolerance:.6e}")]
    RelationViolated {
        /// Name of the governing equation.
        relation: String,
        /// Relative residual observed.
        residual: f64,
        /// Configured tolerance.
        tolerance: f64,
    },

    /// A solver table was assembled incorrectly.
    #[error("Solver table error: {message}")]
    Table {
        /// Description of the table defect.
        message: String,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl FormulaError {
    /// Create a domain error with a message.
    #[must_use]
    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain {
            message: message.into(),
        }
    }

    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a solver table error with a message.
    #[must_use]
    pub fn table(message: impl Into<String>) -> Self {
        Self::Table {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Check if this error came from a routine rejecting its inputs.
    #[must_use]
    pub const fn is_domain_error(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }

    /// Check if this error is an unrecognized unknown combination.
    #[must_use]
    pub const fn is_unrecognized_combination(&self) -> bool {
        matches!(self, Self::UnrecognizedCombination { .. })
    }
}
