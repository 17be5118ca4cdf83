// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and hands the work to Layer 2.
//
// Two commands are supported:
//   1. `check` — interactive: asks for the size and the vectors
//   2. `eval`  — one-shot: vectors come from --vector flags

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{CheckArgs, Commands, EvalArgs};

use crate::application::check_use_case::CheckSession;
use crate::application::eval_use_case::build_system;
use crate::infra::console::Console;

#[derive(Parser, Debug)]
#[command(
    name = "vector-independence",
    version,
    about = "Check whether two 2D or three 3D vectors are linearly independent."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Route the subcommand to its use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Check(args) => run_check(args),
            Commands::Eval(args)  => run_eval(args),
        }
    }
}

fn run_check(args: CheckArgs) -> Result<()> {
    let config = args.session_config()?;
    tracing::info!("Starting interactive session ({})", config.language);

    let mut session = CheckSession::new(config, Console::stdio());
    session.run()?;
    Ok(())
}

fn run_eval(args: EvalArgs) -> Result<()> {
    let config     = args.common.resolve(|_| Ok(()))?;
    let system     = build_system(&args.vectors)?;
    let evaluation = system.evaluate();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
        return Ok(());
    }

    let lang = config.language;
    println!("{}", lang.entered_vectors());
    println!("{}", system.format_vectors(config.precision));
    println!();
    println!("{}", lang.verdict(evaluation.independent));
    Ok(())
}
