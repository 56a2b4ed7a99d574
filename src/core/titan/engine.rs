//! Native Backend A: runs the decoration circuit on the local state vector.

use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::error::TreeError;
use crate::core::simulator::{fit_to_positions, QuantumSimulator};
use crate::core::titan::circuit::DecorationCircuit;
use crate::core::titan::types::QState;
use crate::debug_log;

pub struct TitanSimulator {
    rng: StdRng,
}

impl TitanSimulator {
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Reproducible draws, for tests and demos.
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for TitanSimulator {
    fn default() -> Self { Self::new() }
}

impl QuantumSimulator for TitanSimulator {
    fn name(&self) -> &'static str { "titan" }

    fn run(&mut self, positions: usize) -> Result<String> {
        if positions == 0 {
            bail!(TreeError::NoPositions);
        }
        let circuit = DecorationCircuit::for_positions(positions);
        let mut psi = QState::zero(circuit.num_qubits);
        for gate in &circuit.gates {
            psi.apply(gate);
        }
        let outcome = psi.sample(&mut self.rng);
        debug_log!("titan: {} qubits, {} gates, outcome {outcome}", circuit.num_qubits, circuit.gates.len());
        Ok(fit_to_positions(psi.bits_of(outcome), positions))
    }
}
