use std::fmt;

/// Failures raised while turning a binary measurement result into decorations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The simulator returned fewer than `3 * positions` bits.
    ShortResult { expected: usize, got: usize },
    /// A character other than '0' or '1' was found in the result.
    InvalidBit { index: usize, found: char },
    /// A simulator was asked for zero positions.
    NoPositions,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::ShortResult { expected, got } => {
                write!(f, "Short binary result: expected at least {} bits, got {}", expected, got)
            }
            TreeError::InvalidBit { index, found } => {
                write!(f, "Invalid bit {:?} at index {}", found, index)
            }
            TreeError::NoPositions => write!(f, "Simulator asked for zero positions"),
        }
    }
}

impl std::error::Error for TreeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn test_short_result() {
        let err = TreeError::ShortResult { expected: 6, got: 4 };
        assert_eq!(format!("{}", err), "Short binary result: expected at least 6 bits, got 4");
    }
    #[test] fn test_invalid_bit() {
        let err = TreeError::InvalidBit { index: 2, found: 'x' };
        assert_eq!(format!("{}", err), "Invalid bit 'x' at index 2");
    }
    #[test] fn test_no_positions() {
        assert_eq!(format!("{}", TreeError::NoPositions), "Simulator asked for zero positions");
    }
}
