//! Flags shared by every subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

/// Options accepted on any `groundwork` invocation, flattened into the
/// top-level parser so they can appear before or after the subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Raise the log level: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors. Mutually exclusive with `-v`.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI escape codes.
    ///
    /// Also triggered by the `NO_COLOR` environment variable
    /// (<https://no-color.org>).
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from FILE instead of the default location.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output rendering mode.
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub output_format: OutputFormat,
}

/// Rendering mode for normal (non-log) output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Always colored.
    Human,
    /// Never colored.
    Plain,
}
