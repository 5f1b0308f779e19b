//! Model generators used by the demos.

use qtrot_sim::hamiltonian::{Hamiltonian, HamiltonianTerm, PauliOp, PauliString};

/// Transverse-field Ising chain `H = -J Σ Z_i Z_{i+1} - h Σ X_i` on `n` sites.
///
/// Returned as `[H_zz, H_x]` so the two non-commuting parts can be
/// trotterized jointly or one after the other.
pub fn transverse_field_ising(n: u32, coupling: f64, field: f64) -> [Hamiltonian; 2] {
    let h_zz = (0..n.saturating_sub(1))
        .map(|q| HamiltonianTerm::zz(q, q + 1, -coupling))
        .collect();
    let h_x = (0..n).map(|q| HamiltonianTerm::x(q, -field)).collect();
    [h_zz, h_x]
}

/// 2-qubit H₂ model Hamiltonian.
///
/// `H = g0·I + g1·Z0 + g2·Z1 + g3·Z0Z1 + g4·(X0X1 + Y0Y1)`; the identity
/// term only contributes a global phase.
pub fn h2_model() -> Hamiltonian {
    Hamiltonian::from_terms(vec![
        HamiltonianTerm::identity(-0.32),
        HamiltonianTerm::z(0, 0.39),
        HamiltonianTerm::z(1, -0.39),
        HamiltonianTerm::zz(0, 1, -0.01),
        HamiltonianTerm::new(
            0.18,
            PauliString::from_ops([(0, PauliOp::X), (1, PauliOp::X)]),
        ),
        HamiltonianTerm::new(
            0.18,
            PauliString::from_ops([(0, PauliOp::Y), (1, PauliOp::Y)]),
        ),
    ])
}
