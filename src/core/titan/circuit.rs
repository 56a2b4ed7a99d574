//! The fixed decoration circuit, as a flat gate list.
//!
//! Qubits come in blocks of three, one block per tree position:
//! `3p` decides presence, `3p + 1` and `3p + 2` the decoration type.

use crate::core::decoder::BITS_PER_POSITION;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    H(usize),
    S(usize),
    T(usize),
    Cx { control: usize, target: usize },
}

impl Gate {
    /// Qiskit method name.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Gate::H(_) => "h",
            Gate::S(_) => "s",
            Gate::T(_) => "t",
            Gate::Cx { .. } => "cx",
        }
    }

    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            Gate::H(q) | Gate::S(q) | Gate::T(q) => vec![q],
            Gate::Cx { control, target } => vec![control, target],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecorationCircuit {
    pub num_qubits: usize,
    pub gates: Vec<Gate>,
}

impl DecorationCircuit {
    pub fn for_positions(positions: usize) -> Self {
        let n = positions * BITS_PER_POSITION;
        let mut gates = Vec::new();

        gates.extend((0..n).map(Gate::H));
        for b in (0..n).step_by(BITS_PER_POSITION) {
            gates.push(Gate::S(b));
            gates.push(Gate::T(b + 1));
            gates.push(Gate::T(b + 2));
        }
        gates.extend((0..n).map(Gate::H));
        // chain each block head to the next block head
        for b in (0..n.saturating_sub(BITS_PER_POSITION)).step_by(BITS_PER_POSITION) {
            gates.push(Gate::Cx { control: b, target: b + BITS_PER_POSITION });
        }
        for b in (0..n).step_by(BITS_PER_POSITION) {
            gates.push(Gate::Cx { control: b, target: b + 1 });
            gates.push(Gate::Cx { control: b, target: b + 2 });
        }
        gates.extend((0..n).map(Gate::H));

        Self { num_qubits: n, gates }
    }
}
