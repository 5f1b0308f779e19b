//! Ordered circuits of Pauli rotations.

use std::collections::BTreeSet;
use std::ops::{Add, AddAssign};

use crate::gate::RotationGate;

/// An ordered sequence of [`RotationGate`]s.
///
/// Gate order is significant: the circuit represents the product of the
/// rotations in the order they were appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Gates in application order.
    gates: Vec<RotationGate>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gates: vec![],
        }
    }

    /// Create an unnamed empty circuit.
    pub fn empty() -> Self {
        Self::new("circuit")
    }

    /// Append a gate.
    pub fn push(&mut self, gate: RotationGate) -> &mut Self {
        self.gates.push(gate);
        self
    }

    /// Append every gate of `other`, preserving order.
    pub fn append(&mut self, other: Circuit) -> &mut Self {
        self.gates.extend(other.gates);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the circuit.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Gates in application order.
    pub fn gates(&self) -> &[RotationGate] {
        &self.gates
    }

    /// Iterate over the gates in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, RotationGate> {
        self.gates.iter()
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check if the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Minimum number of qubits needed to hold every gate.
    pub fn num_qubits(&self) -> u32 {
        self.gates
            .iter()
            .filter_map(|g| g.pauli.max_qubit())
            .max()
            .map_or(0, |q| q + 1)
    }

    /// All symbol names still unbound in the circuit, sorted.
    pub fn parameters(&self) -> BTreeSet<String> {
        let mut set = BTreeSet::new();
        for gate in &self.gates {
            gate.angle.collect_symbols(&mut set);
        }
        set
    }

    /// Check if any gate angle is symbolic.
    pub fn is_parameterized(&self) -> bool {
        self.gates.iter().any(RotationGate::is_parameterized)
    }

    /// Bind a symbol in every gate, returning a new circuit.
    #[must_use]
    pub fn bind(&self, name: &str, value: f64) -> Self {
        Self {
            name: self.name.clone(),
            gates: self.gates.iter().map(|g| g.bind(name, value)).collect(),
        }
    }

    /// Consume the circuit and return its gates.
    pub fn into_gates(self) -> Vec<RotationGate> {
        self.gates
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::empty()
    }
}

impl AddAssign for Circuit {
    fn add_assign(&mut self, rhs: Circuit) {
        self.append(rhs);
    }
}

impl Add for Circuit {
    type Output = Circuit;

    fn add(mut self, rhs: Circuit) -> Self::Output {
        self.append(rhs);
        self
    }
}

impl Extend<RotationGate> for Circuit {
    fn extend<T: IntoIterator<Item = RotationGate>>(&mut self, iter: T) {
        self.gates.extend(iter);
    }
}

impl FromIterator<RotationGate> for Circuit {
    fn from_iter<T: IntoIterator<Item = RotationGate>>(iter: T) -> Self {
        let mut circuit = Self::empty();
        circuit.extend(iter);
        circuit
    }
}

impl IntoIterator for Circuit {
    type Item = RotationGate;
    type IntoIter = std::vec::IntoIter<RotationGate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.into_iter()
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a RotationGate;
    type IntoIter = std::slice::Iter<'a, RotationGate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.iter()
    }
}
