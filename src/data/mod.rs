// ============================================================
// Layer 4 — Input Pipeline
// ============================================================
// Everything between a raw line of text and a Vec<f64>:
//
//   raw line
//       │
//       ▼
//   Preprocessor   → normalises separators and decimal commas
//       │
//       ▼
//   parser         → splits, counts and parses the numbers
//       │
//       ▼
//   VectorSystem::set_coordinates (Layer 3)

/// Cleans raw input lines
pub mod preprocessor;

/// Parses coordinate and size-selector lines
pub mod parser;
