//! The one capability every quantum backend provides.

use anyhow::Result;

use crate::core::decoder::BITS_PER_POSITION;

/// A source of measurement bits for tree decorations.
///
/// `run(n)` executes the backend once and returns exactly `3 * n` characters,
/// each `'0'` or `'1'`. Character `k` is measurement bit `k`.
pub trait QuantumSimulator {
    /// Short backend label for notices and debug output.
    fn name(&self) -> &'static str;

    fn run(&mut self, positions: usize) -> Result<String>;
}

impl<S: QuantumSimulator + ?Sized> QuantumSimulator for Box<S> {
    fn name(&self) -> &'static str { (**self).name() }

    fn run(&mut self, positions: usize) -> Result<String> { (**self).run(positions) }
}

/// Pad with '0' or truncate so the result holds exactly `3 * positions` bits.
pub fn fit_to_positions(mut bits: String, positions: usize) -> String {
    let want = positions * BITS_PER_POSITION;
    if bits.len() > want {
        bits.truncate(want);
    } else {
        bits.extend(std::iter::repeat('0').take(want - bits.len()));
    }
    bits
}
