//! Tracing subscriber setup for the binary.
//!
//! Library crates only emit events; installing the subscriber is the
//! binary's job and happens exactly once, right after argument parsing.
//! `RUST_LOG`, when set, takes precedence over the `-v`/`-q` flags.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Install the global subscriber. Fails if one is already registered.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        // No RUST_LOG: apply the flag-derived level to all three crates.
        Err(_) => {
            let level = derive_level(args);
            EnvFilter::new(format!(
                "groundwork={level},groundwork_core={level},groundwork_adapters={level}"
            ))
        }
    };

    // Log lines go to stderr so they never mix with rendered output on
    // stdout; colour only when stderr is an actual terminal.
    let writer_is_tty = std::io::stderr().is_terminal();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(!args.no_color && writer_is_tty)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("could not install tracing subscriber: {e}"))
}

/// `--quiet` pins the level to error; otherwise each `-v` lowers the
/// threshold one notch, bottoming out at trace.
fn derive_level(args: &GlobalArgs) -> &'static str {
    match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn default_is_warn() {
        assert_eq!(derive_level(&flags(0, false)), "warn");
    }

    #[test]
    fn each_v_lowers_the_threshold() {
        assert_eq!(derive_level(&flags(1, false)), "info");
        assert_eq!(derive_level(&flags(2, false)), "debug");
        assert_eq!(derive_level(&flags(3, false)), "trace");
    }

    #[test]
    fn extra_vs_stay_at_trace() {
        assert_eq!(derive_level(&flags(9, false)), "trace");
    }

    #[test]
    fn quiet_wins_even_with_verbose() {
        assert_eq!(derive_level(&flags(0, true)), "error");
        assert_eq!(derive_level(&flags(3, true)), "error");
    }
}
