//! CLI command definitions for multiconf
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

pub mod dirs;
pub mod load;

use crate::config::Precedence;
use clap::{Parser, Subcommand, ValueEnum};
use self::dirs::DirsArgs;
use self::load::LoadArgs;

/// Which file wins when two files set the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PrecedenceArg {
    /// Earlier files win; later files only fill gaps (default)
    #[default]
    FirstWins,
    /// Later files override earlier ones
    LastWins,
}

impl From<PrecedenceArg> for Precedence {
    fn from(arg: PrecedenceArg) -> Self {
        match arg {
            PrecedenceArg::FirstWins => Precedence::FirstWins,
            PrecedenceArg::LastWins => Precedence::LastWins,
        }
    }
}

/// Load and merge layered configuration files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load templates in order and print the merged configuration as JSON
    Load(LoadArgs),

    /// Print the platform directories resolved for an application
    Dirs(DirsArgs),
}
