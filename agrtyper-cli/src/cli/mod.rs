pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agrtyper",
    version,
    about = "Staphylococcus aureus agr typer",
    long_about = "agrtyper assigns a Staphylococcus aureus genome assembly or read set to an \
                  agr group by aligning it against the agr reference operons with BLAST \
                  (assemblies) or KMA (reads) and reporting the best-matching group."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to $AGRTYPER_HOME/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the typer on an assembly or reads
    Run(commands::run::RunArgs),

    /// Check that aligners and reference databases are available
    Check(commands::check::CheckArgs),
}
