use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// fridgesavvy - Smart kitchen inventory and meal planning
#[derive(Parser)]
#[command(name = "fridgesavvy")]
#[command(about = "Smart kitchen inventory and meal planning assistant", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Repl,
    /// Run commands from a file, one per line
    Run {
        /// Command file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = fridgesavvy::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    fridgesavvy::observability::init_observability(&config.logging.level, config.logging.format)?;

    let mut session = fridgesavvy::session_from_config(&config.kitchen)?;

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => fridgesavvy::cli::repl::run(&mut session, &config.kitchen.prompt),
        Commands::Run { file } => fridgesavvy::cli::batch::run_file(&mut session, &file),
    }
}
