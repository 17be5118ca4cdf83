// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure types and arithmetic for the independence check.
//
// Rules for this layer:
//   - NO console or file I/O
//   - NO text parsing (that's Layer 4)
//   - Only plain structs, enums, functions and traits
//
// Everything here can be unit tested with literal numbers.

/// Supported system sizes (2D / 3D)
pub mod dimension;

/// det2 / det3 and the zero tolerance
pub mod determinant;

/// Error taxonomy of the checker
pub mod error;

/// The vector system and its evaluation
pub mod vector_system;

/// The user-interaction boundary
pub mod traits;
