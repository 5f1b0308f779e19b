//! qtrot Circuit Representation
//!
//! This crate provides the output-side data structures of the qtrot
//! decomposition stack: the scalar type used for rotation angles, Pauli
//! strings, and the ordered circuit of Pauli rotations a product formula
//! produces.
//!
//! # Core Components
//!
//! - **Coefficients**: [`Coefficient`], a concrete or symbolic scalar that
//!   supports scaling by plain numbers without being evaluated
//! - **Pauli strings**: [`PauliOp`] and [`PauliString`], sparse tensor
//!   products of single-qubit Pauli operators
//! - **Gates**: [`RotationGate`], the exponential `exp(-i · θ · P)` of a
//!   Pauli string
//! - **Circuit**: [`Circuit`], an ordered, appendable gate sequence
//!
//! # Example: Building a Rotation Circuit
//!
//! ```rust
//! use qtrot_ir::{Circuit, Coefficient, PauliString, RotationGate};
//!
//! let mut circuit = Circuit::new("evolution");
//! circuit.push(RotationGate::new(PauliString::from_label("ZZ").unwrap(), 0.25));
//!
//! // Angles may stay symbolic until the circuit is bound.
//! let t = Coefficient::symbol("t");
//! circuit.push(RotationGate::new(PauliString::from_label("XI").unwrap(), t * 0.5));
//!
//! assert_eq!(circuit.len(), 2);
//! assert!(circuit.parameters().contains("t"));
//!
//! let bound = circuit.bind("t", 2.0);
//! assert_eq!(bound.gates()[1].angle.as_f64(), Some(1.0));
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod parameter;
pub mod pauli;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::RotationGate;
pub use parameter::Coefficient;
pub use pauli::{PauliOp, PauliString};
