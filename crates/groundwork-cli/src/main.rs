//! `groundwork` binary entry point.
//!
//! Bootstraps a project directory: validated name, fixed layout, Python
//! virtual environment, rendered `*.template` files, initialized git repo.
//!
//! Exit codes: 0 on success, 1 for any validation or runtime failure,
//! 2 when clap rejects the arguments.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // .env first so RUST_LOG and GROUNDWORK_* vars set there are visible to
    // everything below. Missing file is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap already formatted the message; keep its exit convention.
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };

    if let Err(e) = logging::init_logging(&cli.global) {
        eprintln!("{e}");
        return ExitCode::from(1);
    }

    let verbose = cli.global.verbose > 0;
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(err, verbose),
    }
}

/// Everything after logging is up: config, output wiring, dispatch.
#[instrument(skip_all)]
fn run(cli: Cli) -> CliResult<()> {
    let config = AppConfig::load(cli.global.config.as_ref())?;
    debug!(
        fullname = %config.author.fullname,
        templates_dir = ?config.templates.dir,
        "Configuration loaded"
    );

    let output = OutputManager::new(&cli.global, &config);

    match cli.command {
        Commands::New(cmd) => commands::new::execute(cmd, cli.global, config, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
    }
}

/// Single funnel from a structured error to stderr text and an exit code.
fn report(err: CliError, verbose: bool) -> ExitCode {
    err.log();
    eprint!("{}", err.render(verbose, std::io::stderr().is_terminal()));
    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn argument_tree_is_consistent() {
        // debug_assert panics on conflicting or malformed arg definitions.
        Cli::command().debug_assert();
    }

    #[test]
    fn version_comes_from_the_manifest() {
        assert_eq!(
            Cli::command().get_version(),
            Some(env!("CARGO_PKG_VERSION"))
        );
    }
}
