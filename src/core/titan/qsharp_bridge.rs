//! Q# bridge via pyo3 (feature: `qsharp`).
//! Evaluates user-supplied Q# once, then calls its decoration operation per chunk.

use anyhow::{bail, Context, Result};
use pyo3::prelude::*;
use pyo3::types::{IntoPyDict, PyModule};

use crate::core::error::TreeError;
use crate::core::simulator::{fit_to_positions, QuantumSimulator};
use crate::debug_log;

/// Fully qualified operation the Q# source must define.
pub const ENTRY_POINT: &str = "QuantumDecoration.CreateQuantumDecoration";

pub struct QSharpSimulator {
    entry_point: String,
}

impl QSharpSimulator {
    /// Import the `qsharp` package and evaluate `source` in its interpreter.
    pub fn new(source: &str) -> Result<Self> {
        Python::with_gil(|py| -> Result<()> {
            let qsharp = PyModule::import_bound(py, "qsharp").context("python package `qsharp` is not importable")?;
            qsharp.call_method1("eval", (source,)).context("Q# source failed to evaluate")?;
            Ok(())
        })?;
        debug_log!("qsharp: evaluated {} bytes of source", source.len());
        Ok(Self { entry_point: ENTRY_POINT.to_string() })
    }
}

impl QuantumSimulator for QSharpSimulator {
    fn name(&self) -> &'static str { "qsharp" }

    fn run(&mut self, positions: usize) -> Result<String> {
        if positions == 0 {
            bail!(TreeError::NoPositions);
        }
        let bits = Python::with_gil(|py| -> Result<String> {
            let qsharp = PyModule::import_bound(py, "qsharp")?;
            let one = qsharp.getattr("Result")?.getattr("One")?;
            let kwargs = [("shots", 1)].into_py_dict_bound(py);
            let expr = format!("{}({positions})", self.entry_point);
            let shots = qsharp.getattr("run")?.call((expr,), Some(&kwargs))?;
            let first = shots.get_item(0)?;

            let mut bits = String::new();
            for item in first.iter()? {
                bits.push(if item?.eq(&one)? { '1' } else { '0' });
            }
            Ok(bits)
        })?;
        debug_log!("qsharp: {positions} positions -> {bits}");
        Ok(fit_to_positions(bits, positions))
    }
}
