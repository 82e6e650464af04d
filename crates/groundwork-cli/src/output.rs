//! User-facing output, kept separate from tracing diagnostics.
//!
//! Rendered output goes to stdout through a single [`OutputManager`] so
//! quiet mode and colour handling are decided in one place instead of at
//! every call site.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Central writer for non-log output.
pub struct OutputManager {
    term: Term,
    format: OutputFormat,
    quiet: bool,
    color: bool,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };
        let color = format == OutputFormat::Human
            && !args.no_color
            && !config.output.no_color;

        Self {
            term: Term::stdout(),
            format,
            quiet: args.quiet,
            color,
        }
    }

    /// Plain line, dropped entirely in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Section heading.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.color {
            self.print(&text.cyan().bold().to_string())
        } else {
            self.print(text)
        }
    }

    /// `✓` line for a completed run.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.color {
            self.print(&format!("{} {}", "\u{2713}".green().bold(), msg.green()))
        } else {
            self.print(&format!("\u{2713} {msg}"))
        }
    }

    /// `ℹ` line for hints and follow-up commands.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.color {
            self.print(&format!("{} {}", "\u{2139}".blue().bold(), msg.blue()))
        } else {
            self.print(&format!("\u{2139} {msg}"))
        }
    }

    /// Whether colour output is active.
    pub fn supports_color(&self) -> bool {
        self.color
    }

    /// Whether quiet mode is swallowing normal output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The format after `Auto` resolution.
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_drops_all_writers() {
        let out = manager(true, true, OutputFormat::Plain);
        assert!(out.is_quiet());
        assert!(out.print("x").is_ok());
        assert!(out.success("x").is_ok());
        assert!(out.info("x").is_ok());
    }

    #[test]
    fn plain_format_disables_color() {
        let out = manager(false, false, OutputFormat::Plain);
        assert!(!out.supports_color());
    }

    #[test]
    fn human_format_honors_no_color() {
        let out = manager(false, true, OutputFormat::Human);
        assert!(!out.supports_color());
    }

    #[test]
    fn human_format_without_flag_colors() {
        let out = manager(false, false, OutputFormat::Human);
        assert!(out.supports_color());
    }

    #[test]
    fn config_no_color_also_applies() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        };
        let config = AppConfig {
            output: crate::config::OutputConfig { no_color: true },
            ..AppConfig::default()
        };
        let out = OutputManager::new(&args, &config);
        assert!(!out.supports_color());
    }

    #[test]
    fn explicit_format_is_kept() {
        assert_eq!(
            manager(false, false, OutputFormat::Plain).format(),
            OutputFormat::Plain
        );
        assert_eq!(
            manager(false, false, OutputFormat::Human).format(),
            OutputFormat::Human
        );
    }
}
