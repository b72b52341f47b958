use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};
use agrtyper_core::{load_config, load_config_or_default, AgrError, Config};

fn main() {
    let cli = Cli::parse();

    // AGRTYPER_LOG wins over -v
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("AGRTYPER_LOG").unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<AgrError>() {
            Some(AgrError::MissingDependency { .. }) => 2,
            Some(AgrError::CommandExecution { .. }) => 3,
            Some(AgrError::ReportParse { .. }) => 4,
            Some(AgrError::Configuration(_)) => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_cli_config(&cli)?;

    match cli.command {
        Commands::Run(args) => crate::cli::commands::run::run(args, &config),
        Commands::Check(args) => crate::cli::commands::check::run(args, &config),
    }
}

fn load_cli_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => load_config_or_default(agrtyper_core::default_config_path())?,
    };
    Ok(config)
}
