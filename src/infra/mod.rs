// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// The parts of the program that touch the outside world:
//
//   console.rs      — the Interaction over stdin/stdout (or any
//                     BufRead + Write pair in tests)
//
//   config_store.rs — optional JSON session config on disk
//                     (--config / --save-config)

/// Line-oriented console interaction
pub mod console;

/// Session config persistence
pub mod config_store;
