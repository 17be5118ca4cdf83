#![allow(dead_code)]

mod application;
mod cli;
mod data;
mod domain;
mod infra;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the dialogue
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive("vector_independence=warn".parse()?)
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
