// ============================================================
// Layer 2 — CheckSession
// ============================================================
// Runs one interactive independence check:
//
//   Step 1: Choose the system size       (unless preset)
//   Step 2: Read each vector             (re-prompt on bad input)
//   Step 3: Print the vectors            (display rounding only)
//   Step 4: Print the verdict
//
// Bad input never aborts the session. The same question is
// asked again until a valid answer arrives, the input ends,
// or the optional retry cap is reached.

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::messages::Language;
use crate::data::parser::{parse_coordinates, parse_dimension};
use crate::domain::dimension::Dimension;
use crate::domain::error::CheckerError;
use crate::domain::traits::Interaction;
use crate::domain::vector_system::{Evaluation, SystemState, VectorSystem};

// ─── Session Configuration ───────────────────────────────────────────────────
// Loaded from an optional JSON file, then overridden by CLI flags.
// Missing fields fall back to Default, so `{}` is a valid file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Preset system size; None means ask the user
    pub size:        Option<Dimension>,
    /// Re-prompts allowed per question; None means unlimited
    pub max_retries: Option<usize>,
    /// Decimals shown when listing vectors
    pub precision:   usize,
    pub language:    Language,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size:        None,
            max_retries: None,
            precision:   6,
            language:    Language::En,
        }
    }
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("input ended while waiting for {what}")]
    InputClosed { what: String },

    #[error("gave up on {what} after {attempts} invalid attempts")]
    RetriesExhausted { what: String, attempts: usize },

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

// ─── CheckSession ────────────────────────────────────────────────────────────
pub struct CheckSession<I> {
    config: SessionConfig,
    io:     I,
}

impl<I: Interaction> CheckSession<I> {
    pub fn new(config: SessionConfig, io: I) -> Self {
        Self { config, io }
    }

    /// Give back the interaction, e.g. to read captured output
    pub fn into_inner(self) -> I {
        self.io
    }

    /// Execute the session end to end
    pub fn run(&mut self) -> Result<Evaluation, SessionError> {
        let lang = self.config.language;

        // ── Step 1: System size ───────────────────────────────────────────────
        let dimension = match self.config.size {
            Some(d) => d,
            None    => self.ask_until_valid("the system size", lang.choose_size(), parse_dimension)?,
        };
        tracing::info!("Checking a {} system", dimension);

        // ── Step 2: Vectors ───────────────────────────────────────────────────
        let mut system = VectorSystem::new(dimension);
        for index in 0..dimension.len() {
            let what   = format!("vector {}", Dimension::label(index));
            let prompt = lang.enter_vector(index, dimension);
            self.ask_until_valid(&what, &prompt, |line: &str| -> Result<(), CheckerError> {
                let values = parse_coordinates(line, dimension)?;
                system.set_coordinates(index, &values)
            })?;
        }

        debug_assert_eq!(system.state(), SystemState::Populated);

        // ── Step 3 + 4: Listing and verdict ───────────────────────────────────
        let evaluation = system.evaluate();
        tracing::debug!("Determinant = {:e}", evaluation.determinant);

        self.io.say("")?;
        self.io.say(lang.entered_vectors())?;
        self.io.say(&system.format_vectors(self.config.precision))?;
        self.io.say("")?;
        self.io.say(lang.verdict(evaluation.independent))?;

        Ok(evaluation)
    }

    /// Ask `prompt` until `attempt` accepts the reply.
    /// `attempt` must leave no trace when it fails.
    fn ask_until_valid<T, E, F>(&mut self, what: &str, prompt: &str, mut attempt: F) -> Result<T, SessionError>
    where
        E: fmt::Display,
        F: FnMut(&str) -> Result<T, E>,
    {
        let mut failures = 0usize;
        loop {
            let line = self
                .io
                .ask(prompt)?
                .ok_or_else(|| SessionError::InputClosed { what: what.to_string() })?;

            match attempt(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    failures += 1;
                    tracing::debug!("Rejected input for {}: {}", what, e);

                    if let Some(max) = self.config.max_retries {
                        if failures > max {
                            return Err(SessionError::RetriesExhausted {
                                what:     what.to_string(),
                                attempts: failures,
                            });
                        }
                    }
                    let retry = self.config.language.try_again(&e.to_string());
                    self.io.say(&retry)?;
                }
            }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::console::Console;
    use std::io::Cursor;

    fn run(input: &str, config: SessionConfig) -> (Result<Evaluation, SessionError>, String) {
        run_bytes(input.as_bytes(), config)
    }

    fn run_bytes(input: &[u8], config: SessionConfig) -> (Result<Evaluation, SessionError>, String) {
        let console     = Console::new(Cursor::new(input.to_vec()), Vec::new());
        let mut session = CheckSession::new(config, console);
        let result      = session.run();
        let output      = String::from_utf8(session.into_inner().into_writer()).unwrap();
        (result, output)
    }

    #[test]
    fn test_2d_independent() {
        let (result, out) = run("2\n1 0\n0 1\n", SessionConfig::default());
        let e = result.unwrap();
        assert!(e.independent);
        assert!(out.contains("A = (1, 0)\nB = (0, 1)"));
        assert!(out.ends_with("The vector system is linearly independent.\n"));
    }

    #[test]
    fn test_3d_dependent_with_zero_vector() {
        let (result, out) = run("3\n1 0 0\n0 1 0\n0 0 0\n", SessionConfig::default());
        assert!(!result.unwrap().independent);
        assert!(out.contains("not linearly independent"));
    }

    #[test]
    fn test_malformed_vector_is_reprompted() {
        let (result, out) = run("2\n1 abc\n1 2\n2 4\n", SessionConfig::default());
        let e = result.unwrap();
        // the rejected line left no trace; A came from the retry
        assert_eq!(e.vectors, vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
        assert!(!e.independent);
        assert!(out.contains("'abc' is not a number"));
        assert_eq!(out.matches("vector A").count(), 2);
    }

    #[test]
    fn test_invalid_utf8_line_is_reprompted() {
        let (result, out) = run_bytes(b"2\n\xff\xfe 1\n1 0\n0 1\n", SessionConfig::default());
        let e = result.unwrap();
        assert_eq!(e.vectors, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        assert!(e.independent);
        assert!(out.contains("Try again."));
        assert_eq!(out.matches("vector A").count(), 2);
    }

    #[test]
    fn test_invalid_utf8_size_is_reprompted() {
        let (result, _) = run_bytes(b"\xc3\n3\n1 0 0\n0 1 0\n0 0 1\n", SessionConfig::default());
        assert_eq!(result.unwrap().dimension, Dimension::Three);
    }

    #[test]
    fn test_bad_size_is_reprompted() {
        let (result, out) = run("5\nthree\n3\n1 0 0\n0 1 0\n0 0 1\n", SessionConfig::default());
        assert_eq!(result.unwrap().dimension, Dimension::Three);
        assert_eq!(out.matches("Choose the vector system type").count(), 3);
    }

    #[test]
    fn test_preset_size_skips_prompt() {
        let config = SessionConfig { size: Some(Dimension::Two), ..Default::default() };
        let (result, out) = run("1,5 0\n0 2,5\n", config);
        let e = result.unwrap();
        assert_eq!(e.determinant, 3.75);
        assert!(!out.contains("Choose"));
    }

    #[test]
    fn test_retry_cap() {
        let config = SessionConfig { max_retries: Some(1), ..Default::default() };
        let (result, _) = run("2\nx\ny\n1 1\n", config);
        match result {
            Err(SessionError::RetriesExhausted { what, attempts }) => {
                assert_eq!(what, "vector A");
                assert_eq!(attempts, 2);
            }
            other => panic!("expected RetriesExhausted, got {other:?}"),
        }
    }

    #[test]
    fn test_input_closed() {
        let (result, _) = run("2\n1 0\n", SessionConfig::default());
        assert!(matches!(result, Err(SessionError::InputClosed { what }) if what == "vector B"));
    }

    #[test]
    fn test_ukrainian_output() {
        let config = SessionConfig { language: Language::Uk, ..Default::default() };
        let (_, out) = run("2\n1 0\n0 1\n", config);
        assert!(out.contains("Введені вектори:"));
        assert!(out.contains("Система векторів є лінійно незалежною."));
    }

    #[test]
    fn test_config_defaults_from_empty_json() {
        let cfg: SessionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SessionConfig::default());

        let cfg: SessionConfig =
            serde_json::from_str(r#"{"size": 3, "language": "uk", "max_retries": 2}"#).unwrap();
        assert_eq!(cfg.size, Some(Dimension::Three));
        assert_eq!(cfg.language, Language::Uk);
        assert_eq!(cfg.max_retries, Some(2));
    }
}
