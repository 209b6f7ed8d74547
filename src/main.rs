mod cli;
mod commands;
mod interactive;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Set up Ctrl+C handler for graceful interruption
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C)");
        std::process::exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    let cli = Cli::parse();

    let base_dir = cli.dir.clone().unwrap_or_else(|| Path::new(".").to_path_buf());
    let env_file = cli.env_file.as_deref();

    match &cli.command {
        Commands::Push { force } => {
            commands::Push::execute(*force, cli.yes, cli.verbose, &base_dir, env_file)
                .context("Failed to execute push command")?;
        }
        Commands::Pull { id, save, out } => {
            commands::Pull::execute(
                id,
                *save,
                out.as_deref(),
                cli.verbose,
                &base_dir,
                env_file,
            )
            .context("Failed to execute pull command")?;
        }
        Commands::Template { kind } => {
            commands::Template::execute(kind, &base_dir)
                .context("Failed to execute template command")?;
        }
        Commands::Categories => {
            commands::Categories::execute().context("Failed to execute categories command")?;
        }
    }

    Ok(())
}
