//! `qtrot-sim`: first-order Trotter decomposition of Pauli-sum generators.
//!
//! Converts one or more Hermitian generators `H_j = Σ_k a_jk P_jk` into a
//! `qtrot_ir::Circuit` of Pauli rotations approximating
//! `exp(-i Σ_j c_j H_j)` (joint mode) or `∏_j exp(-i c_j H_j)` (sequential
//! mode). Coefficients may be symbolic; they are scaled, never evaluated.
//!
//! Randomized term and generator orderings draw from an injected RNG, or
//! from a per-call `StdRng` seeded by the configuration, so decompositions
//! are reproducible.
//!
//! # Quick start
//!
//! ```rust
//! use qtrot_sim::{Decomposition, FirstOrderTrotter, TrotterConfig};
//! use qtrot_sim::hamiltonian::{Hamiltonian, HamiltonianTerm};
//! use qtrot_ir::Coefficient;
//!
//! // Transverse-field Ising model split into two generators.
//! let h_zz = Hamiltonian::from_terms(vec![HamiltonianTerm::zz(0, 1, -1.0)]);
//! let h_x = Hamiltonian::from_terms(vec![
//!     HamiltonianTerm::x(0, -0.5),
//!     HamiltonianTerm::x(1, -0.5),
//! ]);
//!
//! let trotter = FirstOrderTrotter::new(
//!     TrotterConfig::new(10).with_join_components(true),
//! ).unwrap();
//! let t = Coefficient::symbol("t");
//! let circuit = trotter
//!     .decompose(&[h_zz, h_x], Some(&[t.clone(), t]))
//!     .unwrap();
//! assert_eq!(circuit.len(), 30);
//! assert!(circuit.parameters().contains("t"));
//! ```

pub mod config;
pub mod decomposition;
pub mod error;
pub mod hamiltonian;
pub mod trotter;

pub use config::TrotterConfig;
pub use decomposition::Decomposition;
pub use error::{ErrorKind, SimError, SimResult};
pub use hamiltonian::{Generator, Hamiltonian, HamiltonianTerm, PauliOp, PauliString, PauliTerm};
pub use trotter::{ExpandOptions, FirstOrderTrotter};
