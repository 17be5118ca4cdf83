// ============================================================
// Layer 3 — Domain Errors
// ============================================================
// The two ways the core can refuse work:
//
//   InvalidConfiguration — the system cannot be built as asked
//                          (size outside {2,3}, bad vector index)
//   Parse                — a coordinate line was malformed; the
//                          session re-prompts for the same vector
//
// The determinant itself never fails for finite inputs,
// so there is no error kind for it.

use thiserror::Error;

/// Errors raised by the independence checker.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckerError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Why a line of user text could not become coordinates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("input line is empty")]
    Empty,

    #[error("expected {expected} numbers, got {found}")]
    WrongArity { expected: usize, found: usize },

    #[error("'{token}' is not a number")]
    InvalidNumber { token: String },

    #[error("'{token}' is not a finite number")]
    NonFinite { token: String },

    #[error("'{0}' is not a supported system size (choose 2 or 3)")]
    UnsupportedSize(String),
}

pub type Result<T> = std::result::Result<T, CheckerError>;
