// ============================================================
// Layer 3 — VectorSystem (the independence checker)
// ============================================================
// Owns N vectors of N coordinates each, N = 2 or 3.
//
// Lifecycle:
//   VectorSystem::new(dim)     → Uninitialized, all zeros
//   set_coordinates(i, ..)     → slot i filled; once every slot
//                                is filled the system is Populated
//   evaluate()                 → Evaluation (the Evaluated state)
//
// A failed set_coordinates leaves the slot exactly as it was,
// so the caller can simply ask for the same vector again.
//
// Storage is a fixed 3x3 array; a 2D system uses the top-left
// corner and the rest stays zero.

use serde::Serialize;

use crate::domain::determinant::{det2, det3, is_nonzero};
use crate::domain::dimension::Dimension;
use crate::domain::error::{CheckerError, ParseError, Result};

const MAX: usize = 3;

/// Most decimals worth showing for an f64; larger requests are clamped.
pub const MAX_PRECISION: usize = 17;

/// Whether every vector slot has received coordinates yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemState {
    Uninitialized,
    Populated,
}

/// A square system of vectors awaiting an independence check.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorSystem {
    dimension: Dimension,
    rows:      [[f64; MAX]; MAX],
    filled:    [bool; MAX],
}

/// Outcome of one independence computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub dimension:   Dimension,
    pub vectors:     Vec<Vec<f64>>,
    pub determinant: f64,
    pub independent: bool,
}

impl VectorSystem {
    /// Create a zero-filled system of the given dimension
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            rows:   [[0.0; MAX]; MAX],
            filled: [false; MAX],
        }
    }

    /// Create a system from a raw size, rejecting anything but 2 or 3
    pub fn with_size(size: usize) -> Result<Self> {
        Ok(Self::new(Dimension::try_from(size)?))
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn state(&self) -> SystemState {
        if self.filled[..self.dimension.len()].iter().all(|f| *f) {
            SystemState::Populated
        } else {
            SystemState::Uninitialized
        }
    }

    /// Coordinates of the vector at `index`
    pub fn vector(&self, index: usize) -> Option<&[f64]> {
        let n = self.dimension.len();
        (index < n).then(|| &self.rows[index][..n])
    }

    /// Store coordinates for the vector at `index`.
    ///
    /// Fails without touching the slot if the index is out of
    /// range, the value count does not match the dimension, or
    /// any value is NaN or infinite.
    pub fn set_coordinates(&mut self, index: usize, values: &[f64]) -> Result<()> {
        let n = self.dimension.len();
        if index >= n {
            return Err(CheckerError::InvalidConfiguration(format!(
                "vector index {index} is out of range for a {} system",
                self.dimension
            )));
        }
        if values.len() != n {
            return Err(ParseError::WrongArity { expected: n, found: values.len() }.into());
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(ParseError::NonFinite { token: bad.to_string() }.into());
        }

        self.rows[index][..n].copy_from_slice(values);
        self.filled[index] = true;
        tracing::debug!("Vector {} set to {:?}", Dimension::label(index), values);
        Ok(())
    }

    /// Determinant of the matrix whose rows are the vectors
    pub fn determinant(&self) -> f64 {
        let [a, b, c] = self.rows;
        match self.dimension {
            Dimension::Two   => det2([a[0], a[1]], [b[0], b[1]]),
            Dimension::Three => det3(a, b, c),
        }
    }

    /// True when the determinant lies outside the zero band
    pub fn is_linearly_independent(&self) -> bool {
        is_nonzero(self.determinant())
    }

    /// Run the check and capture the result
    pub fn evaluate(&self) -> Evaluation {
        let n           = self.dimension.len();
        let determinant = self.determinant();
        Evaluation {
            dimension:   self.dimension,
            vectors:     self.rows[..n].iter().map(|r| r[..n].to_vec()).collect(),
            determinant,
            independent: is_nonzero(determinant),
        }
    }

    /// One line per vector, e.g. `A = (1, 2.5)`.
    /// `precision` caps the decimals shown; stored values are untouched.
    pub fn format_vectors(&self, precision: usize) -> String {
        let n = self.dimension.len();
        self.rows[..n]
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let coords: Vec<String> = row[..n]
                    .iter()
                    .map(|v| format_coordinate(*v, precision))
                    .collect();
                format!("{} = ({})", Dimension::label(i), coords.join(", "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Round to `precision` decimals and trim trailing zeros.
/// `precision` is clamped to MAX_PRECISION; `format!` panics above u16::MAX.
pub fn format_coordinate(value: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision.min(MAX_PRECISION), value);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    };
    // -0.0, or a tiny negative rounded away
    if s == "-0" { "0".to_string() } else { s }
}
