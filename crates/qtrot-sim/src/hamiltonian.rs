//! Generator data structures.
//!
//! A generator is a sum of weighted Pauli strings:
//!
//!   H = Σ_k  c_k · P_k
//!
//! where each P_k is a tensor product of single-qubit Pauli operators
//! (I, X, Y, Z). H is Hermitian exactly when every c_k is real.
//!
//! The decomposer only talks to the [`Generator`] and [`PauliTerm`] traits;
//! [`Hamiltonian`] and [`HamiltonianTerm`] are the concrete implementations
//! shipped with the crate.
//!
//! # Example
//!
//! ```rust
//! use qtrot_sim::hamiltonian::{Generator, Hamiltonian, HamiltonianTerm, PauliOp, PauliString};
//!
//! // H = -1.0·Z₀Z₁  +  0.5·X₀
//! let h = Hamiltonian::from_terms(vec![
//!     HamiltonianTerm::new(-1.0, PauliString::from_ops(vec![(0, PauliOp::Z), (1, PauliOp::Z)])),
//!     HamiltonianTerm::new( 0.5, PauliString::from_ops(vec![(0, PauliOp::X)])),
//! ]);
//! assert_eq!(h.n_terms(), 2);
//! assert!(h.is_hermitian());
//! ```

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::SimResult;
pub use qtrot_ir::{PauliOp, PauliString};

/// Largest imaginary coefficient part still treated as Hermitian.
pub const HERMITIAN_TOLERANCE: f64 = 1e-10;

/// One additive term of a generator.
pub trait PauliTerm {
    /// Real coefficient used to scale the rotation angle.
    fn coefficient(&self) -> f64;

    /// The Pauli string of this term.
    fn pauli(&self) -> &PauliString;

    /// Number of non-identity factors; zero means a global phase.
    fn weight(&self) -> usize {
        self.pauli().weight()
    }
}

/// A Hermitian operator that can be decomposed into Pauli rotations.
pub trait Generator {
    /// Term type exposed by this generator.
    type Term: PauliTerm;

    /// Hermiticity predicate, checked before every expansion.
    fn is_hermitian(&self) -> bool;

    /// The terms in their stored order.
    fn pauli_terms(&self) -> &[Self::Term];
}

/// A single weighted Pauli term: `coeff · pauli`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HamiltonianTerm {
    /// Complex coefficient; Hermitian generators keep the imaginary part zero.
    pub coeff: Complex64,
    /// The Pauli string.
    pub pauli: PauliString,
}

impl HamiltonianTerm {
    /// Create a new term with a real coefficient.
    pub fn new(coeff: f64, pauli: PauliString) -> Self {
        Self::complex(Complex64::new(coeff, 0.0), pauli)
    }

    /// Create a new term with a complex coefficient.
    pub fn complex(coeff: Complex64, pauli: PauliString) -> Self {
        Self { coeff, pauli }
    }

    /// Create a term from a dense label such as `"ZIZ"`.
    pub fn from_label(label: &str, coeff: f64) -> SimResult<Self> {
        Ok(Self::new(coeff, PauliString::from_label(label)?))
    }

    /// Shorthand: identity (global phase) term.
    pub fn identity(coeff: f64) -> Self {
        Self::new(coeff, PauliString::identity())
    }

    /// Shorthand: single-qubit Z term.
    pub fn z(qubit: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::from_ops([(qubit, PauliOp::Z)]))
    }

    /// Shorthand: ZZ coupling term.
    pub fn zz(q0: u32, q1: u32, coeff: f64) -> Self {
        Self::new(
            coeff,
            PauliString::from_ops([(q0, PauliOp::Z), (q1, PauliOp::Z)]),
        )
    }

    /// Shorthand: single-qubit X term.
    pub fn x(qubit: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::from_ops([(qubit, PauliOp::X)]))
    }

    /// Shorthand: single-qubit Y term.
    pub fn y(qubit: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::from_ops([(qubit, PauliOp::Y)]))
    }
}

impl PauliTerm for HamiltonianTerm {
    fn coefficient(&self) -> f64 {
        self.coeff.re
    }

    fn pauli(&self) -> &PauliString {
        &self.pauli
    }
}

fn default_tolerance() -> f64 {
    HERMITIAN_TOLERANCE
}

/// A sum-of-Pauli-strings generator.
///
/// H = Σ_k  c_k · P_k
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hamiltonian {
    terms: Vec<HamiltonianTerm>,
    #[serde(default = "default_tolerance")]
    tolerance: f64,
}

impl Hamiltonian {
    /// Create from a list of terms.
    pub fn from_terms(terms: Vec<HamiltonianTerm>) -> Self {
        Self {
            terms,
            tolerance: HERMITIAN_TOLERANCE,
        }
    }

    /// Create from `(label, coeff)` pairs, e.g. `[("ZZ", -1.0), ("XI", 0.5)]`.
    pub fn from_labels<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> SimResult<Self> {
        let terms = pairs
            .into_iter()
            .map(|(label, coeff)| HamiltonianTerm::from_label(label, coeff))
            .collect::<SimResult<Vec<_>>>()?;
        Ok(Self::from_terms(terms))
    }

    /// Override the tolerance used by the hermiticity check.
    ///
    /// Negative and NaN tolerances are clamped to `0.0`, i.e. only exactly
    /// real coefficients pass.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }

    /// Append a term.
    pub fn push(&mut self, term: HamiltonianTerm) {
        self.terms.push(term);
    }

    /// All terms.
    pub fn terms(&self) -> &[HamiltonianTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// True if the Hamiltonian has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The first term whose imaginary part exceeds the tolerance.
    pub fn first_non_hermitian_term(&self) -> Option<(usize, Complex64)> {
        self.terms
            .iter()
            .enumerate()
            .find(|(_, t)| t.coeff.im.abs() > self.tolerance.max(0.0))
            .map(|(i, t)| (i, t.coeff))
    }

    /// The minimum number of qubits required to represent this Hamiltonian.
    ///
    /// Returns 0 if the Hamiltonian is empty or purely identity.
    pub fn min_qubits(&self) -> u32 {
        self.terms
            .iter()
            .filter_map(|t| t.pauli.max_qubit())
            .max()
            .map_or(0, |q| q + 1)
    }
}

impl Generator for Hamiltonian {
    type Term = HamiltonianTerm;

    fn is_hermitian(&self) -> bool {
        self.first_non_hermitian_term().is_none()
    }

    fn pauli_terms(&self) -> &[HamiltonianTerm] {
        &self.terms
    }
}

impl FromIterator<HamiltonianTerm> for Hamiltonian {
    fn from_iter<T: IntoIterator<Item = HamiltonianTerm>>(iter: T) -> Self {
        Self::from_terms(iter.into_iter().collect())
    }
}
