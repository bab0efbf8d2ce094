//! tierconf CLI
//!
//! Reads and edits sectioned configuration files and explains how options
//! map to environment overrides.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tierconf_model::Format;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands, FormatArgs};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd, build_format(&cli.format)?),
        None => {
            println!("{} sectioned configuration files", "tierconf".green().bold());
            println!();
            println!("Run {} for available commands.", "tierconf --help".cyan());
            Ok(())
        }
    }
}

fn build_format(args: &FormatArgs) -> Result<Format> {
    Ok(Format::parse(
        &args.comment,
        &args.separator,
        args.space_before,
        args.space_after,
    )?)
}

fn execute_command(cmd: Commands, format: Format) -> Result<()> {
    match cmd {
        Commands::Show { file, json } => commands::run_show(&file, format, json),
        Commands::Get {
            file,
            section,
            option,
            raw,
        } => commands::run_get(&file, format, &section, &option, raw),
        Commands::Set {
            file,
            section,
            option,
            value,
        } => commands::run_set(&file, format, &section, &option, &value),
        Commands::Delete {
            file,
            section,
            option,
        } => commands::run_delete(&file, format, &section, &option),
        Commands::Merge { target, sources } => commands::run_merge(&target, format, &sources),
        Commands::EnvKey {
            name,
            scope,
            prefix,
        } => commands::run_env_key(&prefix, &scope, &name),
    }
}
