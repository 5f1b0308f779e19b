//! Error types for the IR crate.

use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A Pauli label contains a character other than I, X, Y or Z.
    #[error("Invalid Pauli label character '{symbol}' at position {position}")]
    InvalidPauliLabel {
        /// The offending character.
        symbol: char,
        /// Zero-based position of the character in the label.
        position: usize,
    },

    /// The same qubit carries two non-identity operators.
    #[error("Qubit {qubit} appears more than once in Pauli string")]
    DuplicateQubit {
        /// The duplicated qubit index.
        qubit: u32,
    },

    /// Parameter is unbound.
    #[error("Parameter '{0}' is unbound")]
    UnboundParameter(String),

    /// Division by zero while evaluating a coefficient.
    #[error("Division by zero while evaluating coefficient '{0}'")]
    DivisionByZero(String),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
