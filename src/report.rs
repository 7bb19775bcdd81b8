//! Rendering the split command line for display.

use crate::config::OutputFormat;
use cmdline::{CommandLine, SplitError};
use serde::Serialize;
use std::fmt;

/// Arguments and tail of one command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report<'a> {
    pub command_line: &'a str,
    pub arguments: Vec<String>,
    pub tail_index: i64,
    pub tail: &'a str,
}

impl<'a> Report<'a> {
    /// Split `line` and extract its tail from `tail_index`.
    pub fn build(line: &'a CommandLine, tail_index: i64) -> Result<Self, SplitError> {
        let arguments = line.arguments()?;
        let tail = line.tail(tail_index)?;
        tracing::info!(count = arguments.len(), tail_index, "Split command line");
        Ok(Self {
            command_line: line.as_str(),
            arguments,
            tail_index,
            tail,
        })
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.arguments.iter().enumerate() {
            writeln!(f, "{i} - [{arg}]")?;
        }
        write!(
            f,
            "Unparsed command line starting at arg {}: {}",
            self.tail_index, self.tail
        )
    }
}
