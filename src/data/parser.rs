// ============================================================
// Layer 4 — Coordinate Parser
// ============================================================
// Turns one cleaned input line into numbers for the domain.
//
//   "1,5  -2"  ──Preprocessor──▶  "1.5  -2"  ──split──▶  [1.5, -2.0]
//
// A line is accepted only if it holds exactly as many numbers
// as the system dimension and every number is finite. The
// first problem found is reported as a ParseError so the
// session can tell the user what to fix.

use crate::data::preprocessor::Preprocessor;
use crate::domain::dimension::Dimension;
use crate::domain::error::ParseError;

/// Parse a line of whitespace-separated coordinates.
pub fn parse_coordinates(line: &str, dimension: Dimension) -> Result<Vec<f64>, ParseError> {
    let cleaned = Preprocessor::new().clean(line);
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }
    if tokens.len() != dimension.len() {
        return Err(ParseError::WrongArity {
            expected: dimension.len(),
            found:    tokens.len(),
        });
    }

    tokens.into_iter().map(parse_number).collect()
}

/// Parse the system-size selector line ("2" or "3").
pub fn parse_dimension(line: &str) -> Result<Dimension, ParseError> {
    let cleaned = Preprocessor::new().clean(line);
    if cleaned.is_empty() {
        return Err(ParseError::Empty);
    }
    cleaned
        .parse::<usize>()
        .ok()
        .and_then(|n| Dimension::try_from(n).ok())
        .ok_or(ParseError::UnsupportedSize(cleaned))
}

fn parse_number(token: &str) -> Result<f64, ParseError> {
    let value: f64 = token
        .parse()
        .map_err(|_| ParseError::InvalidNumber { token: token.to_string() })?;

    // f64::from_str accepts "inf" and "NaN"
    if !value.is_finite() {
        return Err(ParseError::NonFinite { token: token.to_string() });
    }
    Ok(value)
}
