// ============================================================
// Layer 3 — Dimension
// ============================================================
// The closed set of supported system sizes.
//
// A system of N vectors in N-dimensional space is square,
// so one number describes both the vector count and the
// coordinate count. Only 2 and 3 are supported; anything
// else is rejected at the boundary with InvalidConfiguration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::CheckerError;

/// Size of a vector system: two 2D vectors or three 3D vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum Dimension {
    Two,
    Three,
}

impl Dimension {
    /// Number of vectors, and of coordinates per vector
    pub fn len(self) -> usize {
        match self {
            Dimension::Two   => 2,
            Dimension::Three => 3,
        }
    }

    /// Display label of the vector at `index` (A, B, C)
    pub fn label(index: usize) -> char {
        (b'A' + index as u8) as char
    }
}

impl TryFrom<usize> for Dimension {
    type Error = CheckerError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        match size {
            2 => Ok(Dimension::Two),
            3 => Ok(Dimension::Three),
            other => Err(CheckerError::InvalidConfiguration(format!(
                "system size must be 2 or 3, got {other}"
            ))),
        }
    }
}

impl From<Dimension> for usize {
    fn from(d: Dimension) -> Self {
        d.len()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_sizes() {
        assert_eq!(Dimension::try_from(2).unwrap(), Dimension::Two);
        assert_eq!(Dimension::try_from(3).unwrap(), Dimension::Three);
    }

    #[test]
    fn test_rejects_other_sizes() {
        for size in [0, 1, 4, 10] {
            assert!(matches!(
                Dimension::try_from(size),
                Err(CheckerError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Dimension::label(0), 'A');
        assert_eq!(Dimension::label(2), 'C');
    }

    #[test]
    fn test_serde_as_number() {
        assert_eq!(serde_json::to_string(&Dimension::Three).unwrap(), "3");
        assert!(serde_json::from_str::<Dimension>("5").is_err());
    }
}
