//! Command line surface of the demo binary.

use crate::config::{DemoConfig, OutputFormat};
use crate::report::Report;
use crate::source::Source;
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

/// Split this process's command line using Windows rules and print the pieces.
#[derive(Parser, Debug)]
#[command(name = "wargcv", author, version, about)]
pub struct Cli {
    /// Argument index the printed tail starts at [default: 2]
    #[arg(long, allow_negative_numbers = true)]
    pub tail_index: Option<i64>,

    /// Analyse this string instead of the process's own command line
    #[arg(long, value_name = "RAW")]
    pub command_line: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file (default: <config dir>/wargcv/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Anything else; it only shows up in the listing
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

/// Load config, split the selected command line and write the report to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let config = DemoConfig::load(cli.config.as_deref())
        .context("Failed to load config")?
        .with_overrides(cli.tail_index, cli.format);
    tracing::debug!(?config, extra_args = cli.rest.len(), "Starting");

    let source = cli.command_line.map_or(Source::Process, Source::Given);
    let line = source.read();
    let report = Report::build(&line, config.tail_index)
        .with_context(|| format!("Failed to split command line: {line}"))?;

    writeln!(out, "{}", report.render(config.format)?)?;
    Ok(())
}
