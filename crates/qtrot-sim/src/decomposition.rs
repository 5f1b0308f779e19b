//! Decomposition trait shared by product-formula implementations.

use rand::Rng;

use qtrot_ir::{Circuit, Coefficient};

use crate::error::SimResult;
use crate::hamiltonian::Generator;

/// Turns a list of generators into a circuit of Pauli rotations.
///
/// Implementations hold an immutable configuration; every call is
/// independent. `coeffs`, when given, is aligned by index with `generators`
/// and scales each generator; `None` scales every generator by `1.0`.
///
/// The methods are generic over the generator and RNG types, so the trait is
/// used through static dispatch (`impl Decomposition` or a type parameter)
/// and is not object safe.
pub trait Decomposition {
    /// Get the name of this decomposition.
    fn name(&self) -> &str;

    /// Decompose using the given random number generator.
    ///
    /// The RNG is only consumed when the configuration asks for a randomized
    /// ordering, so a seeded RNG makes the output reproducible.
    fn decompose_with_rng<G, R>(
        &self,
        generators: &[G],
        coeffs: Option<&[Coefficient]>,
        rng: &mut R,
    ) -> SimResult<Circuit>
    where
        G: Generator,
        R: Rng + ?Sized;

    /// Decompose using the implementation's own randomness source.
    fn decompose<G: Generator>(
        &self,
        generators: &[G],
        coeffs: Option<&[Coefficient]>,
    ) -> SimResult<Circuit>;
}
