//! Load subcommand for multiconf CLI
//!
//! Loads the given path templates in order and prints the merged
//! configuration as pretty JSON.

use super::PrecedenceArg;
use crate::config::{Format, Multiconf};
use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::str::FromStr;

/// Arguments for the load subcommand
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Application name used to resolve platform directories
    #[arg(short, long)]
    pub app: String,

    /// Format of every configuration file
    #[arg(short, long, default_value_t = Format::default(), value_parser = Format::from_str)]
    pub format: Format,

    /// Conflict resolution between files
    #[arg(short, long, value_enum, default_value_t = PrecedenceArg::default())]
    pub precedence: PrecedenceArg,

    /// Path templates, in merge order
    ///
    /// Placeholders: {{.Home}}, {{.Data}}, {{.SiteData}}, {{.Config}},
    /// {{.SiteConfig}}, {{.Cache}}, {{.Log}}
    #[arg(value_name = "TEMPLATE")]
    pub templates: Vec<String>,
}

impl LoadArgs {
    /// Build the loader described by these arguments.
    pub fn loader(&self) -> Multiconf {
        Multiconf::with_boxed_parser(
            self.app.as_str(),
            self.format.parser(),
            self.templates.iter().cloned(),
        )
        .with_precedence(self.precedence.into())
    }
}

/// Run the load subcommand, writing the merged configuration to `out`.
pub fn run(args: &LoadArgs, out: &mut impl Write) -> Result<()> {
    emit(&mut args.loader(), out)
}

/// Load `conf` and write its root as pretty JSON.
pub fn emit(conf: &mut Multiconf, out: &mut impl Write) -> Result<()> {
    conf.load()?;

    serde_json::to_writer_pretty(&mut *out, conf.root())?;
    writeln!(out)?;
    Ok(())
}
