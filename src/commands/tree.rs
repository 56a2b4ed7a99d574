//! `qtree`: pick a backend, then draw.
//!
//! A readable Q# source selects Backend B; a missing file falls back to the
//! configured circuit engine with a notice. Every other failure is fatal.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::BackendKind;
use crate::config::TreeConfig;
use crate::core::render::{Palette, Renderer};
use crate::core::simulator::QuantumSimulator;
use crate::debug_log;

/// `Ok(None)` when the file does not exist; other I/O errors propagate.
pub fn read_source(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Read Q# source {}", path.display())),
    }
}

/// Build the circuit-backed simulator (Backend A) for `kind`.
pub fn circuit_simulator(kind: BackendKind) -> Result<Box<dyn QuantumSimulator>> {
    match kind {
        BackendKind::Titan => {
            #[cfg(feature = "quantum")]
            {
                Ok(Box::new(crate::core::titan::engine::TitanSimulator::new()))
            }
            #[cfg(not(feature = "quantum"))]
            {
                anyhow::bail!("Backend 'titan' requires `--features quantum`.");
            }
        }
        BackendKind::Aer => {
            #[cfg(feature = "qiskit")]
            {
                let version = crate::core::titan::qiskit_bridge::qiskit_version()?;
                debug_log!("aer: qiskit {version}");
                Ok(Box::new(crate::core::titan::qiskit_bridge::AerSimulator))
            }
            #[cfg(not(feature = "qiskit"))]
            {
                anyhow::bail!("Backend 'aer' requires `--features qiskit` and a working Python/Qiskit install.");
            }
        }
    }
}

#[cfg(feature = "qsharp")]
fn source_simulator(source: &str) -> Result<Option<Box<dyn QuantumSimulator>>> {
    let sim = crate::core::titan::qsharp_bridge::QSharpSimulator::new(source)?;
    Ok(Some(Box::new(sim)))
}

#[cfg(not(feature = "qsharp"))]
fn source_simulator(_source: &str) -> Result<Option<Box<dyn QuantumSimulator>>> {
    Ok(None)
}

fn fallback(cfg: &TreeConfig, reason: &str, out: &mut dyn Write) -> Result<Box<dyn QuantumSimulator>> {
    let sim = circuit_simulator(cfg.backend)?;
    writeln!(out, "{reason}, using {} simulator", sim.name())?;
    Ok(sim)
}

/// Choose a backend, writing any fallback notice to `out`.
pub fn select_simulator(cfg: &TreeConfig, out: &mut dyn Write) -> Result<Box<dyn QuantumSimulator>> {
    let sim = match read_source(&cfg.source)? {
        Some(text) => match source_simulator(&text)? {
            Some(sim) => sim,
            None => fallback(cfg, "Q# support not built in (enable `qsharp`)", out)?,
        },
        None => {
            debug_log!("no Q# source at {}", cfg.source.display());
            fallback(cfg, "Q# source not found", out)?
        }
    };
    debug_log!("backend: {}", sim.name());
    Ok(sim)
}

pub fn draw_with<W: Write + ?Sized>(cfg: &TreeConfig, simulator: &mut dyn QuantumSimulator, out: &mut W) -> Result<()> {
    Renderer::new(cfg.height, Palette::festive())
        .with_color(cfg.color)
        .draw(out, simulator)
}

pub fn run_tree(cfg: &TreeConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut sim = select_simulator(cfg, &mut out)?;
    draw_with(cfg, sim.as_mut(), &mut out)
}
