// ============================================================
// Layer 2 — Eval Use Case
// ============================================================
// Non-interactive check: every vector arrives up front as a
// line of text (from --vector flags). The number of lines picks
// the system size, so two lines mean 2D and three mean 3D.
//
// There is nobody to re-prompt here, so the first bad line
// is a hard error naming the offending vector.
//
// Example:
//   --vector "1 0" --vector "0,5 1"
//       │
//       ▼
//   ["1 0", "0,5 1"]  → 2 lines → Dimension::Two
//       │
//       ▼
//   A = (1, 0), B = (0.5, 1)  → det = 1 → independent

use anyhow::{Context, Result};

use crate::data::parser::parse_coordinates;
use crate::domain::dimension::Dimension;
use crate::domain::vector_system::VectorSystem;

/// Build a fully populated system from coordinate lines.
pub fn build_system<S: AsRef<str>>(lines: &[S]) -> Result<VectorSystem> {
    let mut system = VectorSystem::with_size(lines.len())
        .context("Pass --vector exactly 2 or 3 times")?;
    let dimension = system.dimension();

    for (index, line) in lines.iter().enumerate() {
        let label  = Dimension::label(index);
        let values = parse_coordinates(line.as_ref(), dimension)
            .with_context(|| format!("Invalid coordinates for vector {label}"))?;
        system.set_coordinates(index, &values)?;
    }

    tracing::info!("Built a {} system from {} vectors", dimension, lines.len());
    Ok(system)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_2d() {
        let s = build_system(&["1 2", "3 4"]).unwrap();
        assert_eq!(s.dimension(), Dimension::Two);
        assert_eq!(s.determinant(), -2.0);
    }

    #[test]
    fn test_builds_3d_with_commas() {
        let s = build_system(&["1,0 0 0", "0 1 0", "0 0 0,5"]).unwrap();
        assert_eq!(s.determinant(), 0.5);
        assert!(s.is_linearly_independent());
    }

    #[test]
    fn test_wrong_vector_count() {
        let err = build_system(&["1"]).unwrap_err();
        assert!(err.to_string().contains("exactly 2 or 3"));
        assert!(build_system(&["1 0 0 0"; 4]).is_err());
    }

    #[test]
    fn test_names_bad_vector() {
        let err = build_system(&["1 0", "1 abc"]).unwrap_err();
        assert!(err.to_string().contains("vector B"));
    }
}
