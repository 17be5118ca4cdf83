// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the domain and the input pipeline for the two
// ways the program is driven.
//
// Rules for this layer:
//   - No determinant math here (that's Layer 3)
//   - No text parsing rules here (that's Layer 4)
//   - Talks to the user only through the Interaction trait
//
// Think of this layer as the "director" of a single run.

/// The interactive session with its retry loop
pub mod check_use_case;

/// The non-interactive evaluation of vectors given as flags
pub mod eval_use_case;

/// User-facing wording in English and Ukrainian
pub mod messages;
