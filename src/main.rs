//! multiconf command-line tool
//!
//! Loads layered configuration files the same way an application would and
//! prints the merged result, or shows where the platform directories are.

use anyhow::Result;
use clap::Parser;
use multiconf::cli::{Cli, Command};
use multiconf::logging::{self, LogTarget};
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&LogTarget::parse(&cli.log), cli.verbose)?;
    debug!(command = ?cli.command, "Starting multiconf");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Load(args) => multiconf::cli::load::run(args, &mut out),
        Command::Dirs(args) => multiconf::cli::dirs::run(args, &mut out),
    }
}
