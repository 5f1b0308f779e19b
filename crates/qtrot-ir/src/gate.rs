//! Pauli rotation gates.

use std::fmt;

use crate::parameter::Coefficient;
use crate::pauli::PauliString;

/// The exponential of a Pauli string, `exp(-i · angle · P)`.
///
/// The angle is the coefficient-scaled rotation produced by a product
/// formula; no factor of two is folded in.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationGate {
    /// The Pauli string being exponentiated.
    pub pauli: PauliString,
    /// The rotation angle.
    pub angle: Coefficient,
}

impl RotationGate {
    /// Create a new rotation gate.
    pub fn new(pauli: PauliString, angle: impl Into<Coefficient>) -> Self {
        Self {
            pauli,
            angle: angle.into(),
        }
    }

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        "exp_pauli"
    }

    /// Number of qubits the rotation acts on non-trivially.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.pauli.weight()
    }

    /// Check if the angle still contains unbound symbols.
    pub fn is_parameterized(&self) -> bool {
        self.angle.is_symbolic()
    }

    /// Bind a symbol in the angle, returning a new gate.
    #[must_use]
    pub fn bind(&self, name: &str, value: f64) -> Self {
        Self {
            pauli: self.pauli.clone(),
            angle: self.angle.bind(name, value).simplify(),
        }
    }
}

impl fmt::Display for RotationGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}; {})", self.name(), self.pauli, self.angle)
    }
}
