//! Bit decoder: binary measurement result → per-position decorations.
//!
//! Each position owns three consecutive bits `[base, base + 1, base + 2]` with
//! `base = 3 * p`. The first bit says whether the position is decorated; the
//! other two form the decoration type (high bit first). Undecorated positions
//! always carry type 0.

use crate::core::error::TreeError;

/// Bits consumed per position.
pub const BITS_PER_POSITION: usize = 3;

/// Two index-aligned sequences: presence flags (0/1) and type codes (0..=3).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowDecorations {
    pub presence: Vec<u8>,
    pub kinds: Vec<u8>,
}

impl RowDecorations {
    pub fn with_capacity(n: usize) -> Self {
        Self { presence: Vec::with_capacity(n), kinds: Vec::with_capacity(n) }
    }

    pub fn len(&self) -> usize { self.presence.len() }

    pub fn is_empty(&self) -> bool { self.presence.is_empty() }

    pub fn push(&mut self, present: u8, kind: u8) {
        self.presence.push(present);
        self.kinds.push(if present == 1 { kind } else { 0 });
    }

    /// Append another row's decorations after this one's.
    pub fn extend(&mut self, other: RowDecorations) {
        self.presence.extend(other.presence);
        self.kinds.extend(other.kinds);
    }

    pub fn truncate(&mut self, len: usize) {
        self.presence.truncate(len);
        self.kinds.truncate(len);
    }

    /// `Some(type)` for a decorated column, `None` for plain foliage.
    pub fn decoration_at(&self, col: usize) -> Option<u8> {
        match self.presence.get(col) {
            Some(1) => self.kinds.get(col).copied(),
            _ => None,
        }
    }
}

fn bit_at(bits: &[char], index: usize) -> Result<u8, TreeError> {
    match bits[index] {
        '0' => Ok(0),
        '1' => Ok(1),
        found => Err(TreeError::InvalidBit { index, found }),
    }
}

/// Decode `positions` entries from `binary`.
///
/// Only the first `3 * positions` characters are read; extra characters are ignored.
pub fn decode(binary: &str, positions: usize) -> Result<RowDecorations, TreeError> {
    let needed = positions * BITS_PER_POSITION;
    let bits: Vec<char> = binary.chars().take(needed).collect();
    if bits.len() < needed {
        return Err(TreeError::ShortResult { expected: needed, got: bits.len() });
    }

    let mut out = RowDecorations::with_capacity(positions);
    for p in 0..positions {
        let base = p * BITS_PER_POSITION;
        let present = bit_at(&bits, base)?;
        // type bits are consumed (and validated) even when the position is bare
        let hi = bit_at(&bits, base + 1)?;
        let lo = bit_at(&bits, base + 2)?;
        out.push(present, (hi << 1) | lo);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_two_positions() {
        let row = decode("101011", 2).unwrap();
        assert_eq!(row.presence, vec![1, 0]);
        assert_eq!(row.kinds, vec![1, 0]);
    }

    #[test]
    fn all_zero_is_bare() {
        let row = decode("000", 1).unwrap();
        assert_eq!(row.presence, vec![0]);
        assert_eq!(row.kinds, vec![0]);
        assert_eq!(row.decoration_at(0), None);
    }

    #[test]
    fn high_bit_comes_first() {
        assert_eq!(decode("110", 1).unwrap().kinds, vec![2]);
        assert_eq!(decode("101", 1).unwrap().kinds, vec![1]);
        assert_eq!(decode("111", 1).unwrap().kinds, vec![3]);
        assert_eq!(decode("100", 1).unwrap().kinds, vec![0]);
    }

    #[test]
    fn bare_position_ignores_type_bits() {
        let row = decode("011", 1).unwrap();
        assert_eq!(row.presence, vec![0]);
        assert_eq!(row.kinds, vec![0]);
    }

    #[test]
    fn short_input_is_an_error() {
        let err = decode("10101", 2).unwrap_err();
        assert_eq!(err, TreeError::ShortResult { expected: 6, got: 5 });
    }

    #[test]
    fn non_binary_input_is_an_error() {
        let err = decode("1x0", 1).unwrap_err();
        assert_eq!(err, TreeError::InvalidBit { index: 1, found: 'x' });
    }

    #[test]
    fn non_ascii_input_reports_the_whole_char() {
        let err = decode("1é0", 1).unwrap_err();
        assert_eq!(err, TreeError::InvalidBit { index: 1, found: 'é' });
        // lengths count chars, not bytes
        assert_eq!(decode("éé", 1).unwrap_err(), TreeError::ShortResult { expected: 3, got: 2 });
    }

    #[test]
    fn trailing_bits_are_ignored() {
        let row = decode("111000111", 2).unwrap();
        assert_eq!(row.presence, vec![1, 0]);
        assert_eq!(row.kinds, vec![3, 0]);
    }
}
