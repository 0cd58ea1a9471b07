//! Dirs subcommand for multiconf CLI
//!
//! Shows what each template placeholder expands to on this machine.

use crate::paths::{AppDirs, DirectoryResolver};
use anyhow::Result;
use clap::Args;
use std::io::Write;

/// Arguments for the dirs subcommand
#[derive(Args, Debug)]
pub struct DirsArgs {
    /// Application name used to resolve platform directories
    #[arg(short, long)]
    pub app: String,
}

/// Run the dirs subcommand, writing the directories as JSON to `out`.
pub fn run(args: &DirsArgs, out: &mut impl Write) -> Result<()> {
    let dirs = AppDirs.resolve(&args.app)?;
    serde_json::to_writer_pretty(&mut *out, &dirs)?;
    writeln!(out)?;
    Ok(())
}
