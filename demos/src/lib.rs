//! qtrot Demo Suite
//!
//! Model generators and terminal helpers for the `demo-trotter` binary:
//!
//! - **Transverse-field Ising chain**: split into a ZZ-coupling generator
//!   and a transverse-field generator, the classic two-component Trotter
//!   example
//! - **H₂ model**: a 2-qubit molecular Hamiltonian including a constant
//!   (identity) term

pub mod models;

use console::style;

use qtrot_ir::Circuit;

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print every gate of a circuit, one per line, with dense Pauli labels.
pub fn print_circuit(circuit: &Circuit) {
    let width = circuit.num_qubits();
    for (i, gate) in circuit.iter().enumerate() {
        println!(
            "  {:>4}  {}  {}",
            style(i).dim(),
            gate.pauli.to_label(width),
            gate.angle
        );
    }
}
