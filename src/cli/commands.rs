// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `check` and `eval`, and the
// flags they share.
//
// Where does each setting come from?
//   1. Built-in defaults           (SessionConfig::default)
//   2. The --config JSON file      (any subset of fields)
//   3. Command line flags          (win over both)
//
// --save-config writes the merged result back out, so a run
// can be repeated later with just --config.
//
// clap's derive macros generate the help text, the errors
// for missing or unknown flags, and the conversions:
//   - "uk"   → Language       (via Language's FromStr)
//   - "4"    → usize          (range-checked for --precision)
//   - "2"/"3" only for --size (PossibleValuesParser)
//
// Reference: clap derive tutorial (Args, Subcommand, flatten)

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::application::check_use_case::SessionConfig;
use crate::application::messages::Language;
use crate::domain::dimension::Dimension;
use crate::domain::vector_system::MAX_PRECISION;
use crate::infra::config_store::ConfigStore;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enter the vectors interactively and check their independence
    Check(CheckArgs),

    /// Check vectors given on the command line
    Eval(EvalArgs),
}

/// Flags shared by both subcommands
#[derive(Args, Debug, Default)]
pub struct CommonArgs {
    /// JSON file with session settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the effective settings to this JSON file
    #[arg(long)]
    pub save_config: Option<PathBuf>,

    /// Language of prompts and verdicts (en, uk)
    #[arg(long)]
    pub lang: Option<Language>,

    /// Decimals shown when listing vectors (0-17)
    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(0..=MAX_PRECISION as u64))]
    pub precision: Option<usize>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// System size; asked interactively when omitted
    #[arg(long, value_parser = clap::builder::PossibleValuesParser::new(["2", "3"]))]
    pub size: Option<String>,

    /// Re-prompts allowed per question before giving up (default: unlimited)
    #[arg(long)]
    pub max_retries: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Coordinates of one vector, e.g. --vector "1 0"; give it 2 or 3 times
    #[arg(long = "vector", required = true, allow_hyphen_values = true)]
    pub vectors: Vec<String>,

    /// Print the evaluation as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CommonArgs {
    /// Merge file settings and flags into one SessionConfig,
    /// saving it when --save-config was given.
    pub fn resolve(&self, overrides: impl FnOnce(&mut SessionConfig) -> Result<()>) -> Result<SessionConfig> {
        let mut cfg = match &self.config {
            Some(path) => ConfigStore::new(path).load()?,
            None       => SessionConfig::default(),
        };

        if let Some(lang) = self.lang {
            cfg.language = lang;
        }
        if let Some(precision) = self.precision {
            cfg.precision = precision;
        }
        overrides(&mut cfg)?;

        if let Some(path) = &self.save_config {
            ConfigStore::new(path).save(&cfg)?;
        }
        Ok(cfg)
    }
}

impl CheckArgs {
    pub fn session_config(&self) -> Result<SessionConfig> {
        self.common.resolve(|cfg| {
            if let Some(size) = &self.size {
                cfg.size = Some(Dimension::try_from(size.parse::<usize>()?)?);
            }
            if self.max_retries.is_some() {
                cfg.max_retries = self.max_retries;
            }
            Ok(())
        })
    }
}
