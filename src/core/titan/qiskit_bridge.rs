//! Qiskit Aer bridge via pyo3 (feature: `qiskit`).
//! Ships the decoration circuit's gate list to Python and runs a single shot.

use anyhow::{bail, Result};
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::core::error::TreeError;
use crate::core::simulator::{fit_to_positions, QuantumSimulator};
use crate::core::titan::circuit::DecorationCircuit;
use crate::debug_log;

const AER_RUNNER: &str = r#"
from qiskit import QuantumCircuit
from qiskit_aer import AerSimulator

def run_circuit(n, ops):
    qc = QuantumCircuit(n, n)
    for name, qubits in ops:
        getattr(qc, name)(*qubits)
    qc.measure(range(n), range(n))
    counts = AerSimulator().run(qc, shots=1).result().get_counts(qc)
    return next(iter(counts))
"#;

/// Return Qiskit version as a quick smoke test.
pub fn qiskit_version() -> Result<String> {
    Python::with_gil(|py| {
        let qiskit = PyModule::import_bound(py, "qiskit")?;
        let ver: String = qiskit.getattr("__version__")?.extract()?;
        Ok(ver)
    })
}

/// Run `circuit` once on Aer and return the outcome, qubit 0 first.
pub fn run_once(circuit: &DecorationCircuit) -> Result<String> {
    let ops: Vec<(&'static str, Vec<usize>)> =
        circuit.gates.iter().map(|g| (g.mnemonic(), g.qubits())).collect();

    Python::with_gil(|py| -> Result<String> {
        let m = PyModule::from_code_bound(py, AER_RUNNER, "qtree_aer.py", "qtree_aer")?;
        let key: String = m.getattr("run_circuit")?.call1((circuit.num_qubits, ops))?.extract()?;
        // Qiskit prints clbit 0 rightmost
        Ok(key.chars().rev().collect())
    })
}

#[derive(Default)]
pub struct AerSimulator;

impl QuantumSimulator for AerSimulator {
    fn name(&self) -> &'static str { "aer" }

    fn run(&mut self, positions: usize) -> Result<String> {
        if positions == 0 {
            bail!(TreeError::NoPositions);
        }
        let circuit = DecorationCircuit::for_positions(positions);
        let bits = run_once(&circuit)?;
        debug_log!("aer: {} qubits -> {bits}", circuit.num_qubits);
        Ok(fit_to_positions(bits, positions))
    }
}
