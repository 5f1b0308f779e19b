//! Error types for the sim crate.

use thiserror::Error;

/// Broad category of a [`SimError`].
///
/// Both categories are precondition violations: fix the call site, do not
/// retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A generator failed the hermiticity check.
    InvalidOperator,
    /// The decomposer configuration or call arguments are invalid.
    InvalidConfiguration,
}

/// Errors produced by Trotter decomposition.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// A generator failed its hermiticity predicate.
    #[error("generator with {n_terms} terms is not Hermitian")]
    NonHermitian {
        /// Number of terms in the rejected generator.
        n_terms: usize,
    },

    /// steps must be ≥ 1.
    #[error("steps must be at least 1, got {0}")]
    InvalidSteps(usize),

    /// Threshold must be a non-negative number.
    #[error("threshold must be non-negative, got {0}")]
    InvalidThreshold(f64),

    /// coeffs must align by index with generators.
    #[error("got {coeffs} coefficients for {generators} generators")]
    CoefficientCountMismatch {
        /// Number of generators passed.
        generators: usize,
        /// Number of coefficients passed.
        coeffs: usize,
    },

    /// Configuration file has an extension we cannot parse.
    #[error("unsupported configuration format '{0}' (expected json, yaml or yml)")]
    UnsupportedConfigFormat(String),

    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// JSON configuration could not be parsed.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML configuration could not be parsed.
    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// IR construction error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] qtrot_ir::IrError),
}

impl SimError {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimError::NonHermitian { .. } | SimError::Ir(_) => ErrorKind::InvalidOperator,
            SimError::InvalidSteps(_)
            | SimError::InvalidThreshold(_)
            | SimError::CoefficientCountMismatch { .. }
            | SimError::UnsupportedConfigFormat(_)
            | SimError::Io(_)
            | SimError::Json(_)
            | SimError::Yaml(_) => ErrorKind::InvalidConfiguration,
        }
    }
}

/// Result type for decomposition operations.
pub type SimResult<T> = Result<T, SimError>;
