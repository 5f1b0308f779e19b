//! Pauli operators and sparse Pauli strings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PauliOp {
    /// Identity; never stored in a [`PauliString`].
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl PauliOp {
    /// Parse a single label character (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PauliOp::I),
            'X' => Some(PauliOp::X),
            'Y' => Some(PauliOp::Y),
            'Z' => Some(PauliOp::Z),
            _ => None,
        }
    }

    /// The label character of this operator.
    pub fn as_char(self) -> char {
        match self {
            PauliOp::I => 'I',
            PauliOp::X => 'X',
            PauliOp::Y => 'Y',
            PauliOp::Z => 'Z',
        }
    }
}

/// A tensor product of Pauli operators on indexed qubits.
///
/// Stored as a sorted `Vec<(qubit_index, PauliOp)>` with Identity terms
/// omitted.  Qubits not listed are implicitly I.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PauliString {
    /// Non-identity terms, sorted by qubit index ascending.
    ops: Vec<(u32, PauliOp)>,
}

impl PauliString {
    /// The identity string (weight zero).
    pub fn identity() -> Self {
        Self::default()
    }

    /// Construct a PauliString from an iterator of (qubit, op) pairs.
    ///
    /// Identity operators are dropped; the remaining ops are sorted by qubit.
    /// Use [`try_from_ops`](Self::try_from_ops) to reject repeated qubits.
    pub fn from_ops(ops: impl IntoIterator<Item = (u32, PauliOp)>) -> Self {
        let mut v: Vec<(u32, PauliOp)> = ops
            .into_iter()
            .filter(|(_, op)| *op != PauliOp::I)
            .collect();
        v.sort_by_key(|(q, _)| *q);
        Self { ops: v }
    }

    /// Like [`from_ops`](Self::from_ops), but fails if a qubit carries more
    /// than one non-identity operator.
    pub fn try_from_ops(ops: impl IntoIterator<Item = (u32, PauliOp)>) -> IrResult<Self> {
        let ps = Self::from_ops(ops);
        if let Some(w) = ps.ops.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(IrError::DuplicateQubit { qubit: w[0].0 });
        }
        Ok(ps)
    }

    /// Parse a dense label such as `"XIZY"`; character `i` acts on qubit `i`.
    pub fn from_label(label: &str) -> IrResult<Self> {
        let mut ops = Vec::with_capacity(label.len());
        for (position, symbol) in label.chars().enumerate() {
            let op = PauliOp::from_char(symbol)
                .ok_or(IrError::InvalidPauliLabel { symbol, position })?;
            let qubit = u32::try_from(position)
                .map_err(|_| IrError::InvalidPauliLabel { symbol, position })?;
            ops.push((qubit, op));
        }
        Ok(Self::from_ops(ops))
    }

    /// Construct a Z⊗Z⊗...⊗Z string spanning the given qubits.
    pub fn zz(qubits: impl IntoIterator<Item = u32>) -> Self {
        Self::from_ops(qubits.into_iter().map(|q| (q, PauliOp::Z)))
    }

    /// Return the non-identity (qubit, op) pairs, sorted by qubit index.
    pub fn ops(&self) -> &[(u32, PauliOp)] {
        &self.ops
    }

    /// Number of non-identity factors.
    pub fn weight(&self) -> usize {
        self.ops.len()
    }

    /// True if there are no non-identity operators (pure global phase).
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// The highest qubit index referenced, or `None` for an identity string.
    pub fn max_qubit(&self) -> Option<u32> {
        self.ops.last().map(|(q, _)| *q)
    }

    /// Dense label over `n_qubits` qubits, e.g. `"XIZ"`.
    ///
    /// Operators on qubits `>= n_qubits` are not shown.
    pub fn to_label(&self, n_qubits: u32) -> String {
        let mut label = vec!['I'; n_qubits as usize];
        for &(q, op) in &self.ops {
            if let Some(slot) = label.get_mut(q as usize) {
                *slot = op.as_char();
            }
        }
        label.into_iter().collect()
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ops.is_empty() {
            return write!(f, "I");
        }
        for (i, (q, op)) in self.ops.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}{q}", op.as_char())?;
        }
        Ok(())
    }
}
