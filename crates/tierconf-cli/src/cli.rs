//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// tierconf - Inspect and edit sectioned configuration files
#[derive(Parser, Debug)]
#[command(name = "tierconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub format: FormatArgs,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output conventions used when a command writes a file
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct FormatArgs {
    /// Comment marker for written headers ("#" or ";")
    #[arg(long, global = true, default_value = "#", env = "TIERCONF_COMMENT")]
    pub comment: String,

    /// Separator between option name and value (":" or "=")
    #[arg(long, global = true, default_value = ":", env = "TIERCONF_SEPARATOR")]
    pub separator: String,

    /// Write a space before the separator
    #[arg(long, global = true)]
    pub space_before: bool,

    /// Do not write a space after the separator
    #[arg(long = "no-space-after", global = true, action = clap::ArgAction::SetFalse)]
    pub space_after: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print a file's sections and options in order
    Show {
        /// File to read
        file: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print one option's value
    ///
    /// References of the form %(name)s are expanded unless --raw is given.
    /// The DEFAULT section is consulted when the option is missing.
    Get {
        /// File to read
        file: PathBuf,

        /// Section name
        section: String,

        /// Option name
        option: String,

        /// Print the stored text without expanding references
        #[arg(long)]
        raw: bool,
    },

    /// Set an option and rewrite the file, creating it if needed
    Set {
        /// File to edit
        file: PathBuf,

        /// Section name
        section: String,

        /// Option name
        option: String,

        /// New value
        value: String,
    },

    /// Remove an option and rewrite the file
    Delete {
        /// File to edit
        file: PathBuf,

        /// Section name
        section: String,

        /// Option name
        option: String,
    },

    /// Merge one or more files into a target, later sources winning
    Merge {
        /// File to write; read first when it exists
        target: PathBuf,

        /// Files merged in order
        #[arg(required = true)]
        sources: Vec<PathBuf>,
    },

    /// Print the environment variable that overrides an option
    EnvKey {
        /// Option name
        name: String,

        /// Scope the option belongs to; empty for the global scope
        #[arg(short, long, default_value = "")]
        scope: String,

        /// Environment variable prefix
        #[arg(short, long)]
        prefix: String,
    },
}
