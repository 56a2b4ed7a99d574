//! Batching driver: one simulator call per chunk of at most five positions.

use anyhow::{Context, Result};

use crate::core::decoder::{decode, RowDecorations};
use crate::core::simulator::QuantumSimulator;
use crate::debug_log;

/// Positions requested from the simulator in a single call.
pub const CHUNK_SIZE: usize = 5;

/// Decorations for a row of `width` columns.
///
/// Chunks are decoded independently and concatenated in column order. Each
/// chunk is a fresh execution, so the same column can differ between rows of
/// different widths.
pub fn build_row<S: QuantumSimulator + ?Sized>(width: usize, simulator: &mut S) -> Result<RowDecorations> {
    let mut row = RowDecorations::with_capacity(width);
    for start in (0..width).step_by(CHUNK_SIZE) {
        let positions = CHUNK_SIZE.min(width - start);
        let binary = simulator
            .run(positions)
            .with_context(|| format!("{} simulator failed for {} positions", simulator.name(), positions))?;
        debug_log!("chunk @{start} ({positions} positions) <- {binary}");
        let chunk = decode(&binary, positions)
            .with_context(|| format!("bad result from {} simulator", simulator.name()))?;
        row.extend(chunk);
    }
    // a simulator that ignores the length contract must not widen the row
    row.truncate(width);
    Ok(row)
}
