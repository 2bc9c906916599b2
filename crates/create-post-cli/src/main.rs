//! # create-post
//!
//! Scaffold a new post from a template.
//!
//! ## Startup sequence
//!
//! 1. Load `.env` (if any).
//! 2. Parse CLI arguments (`--help` / `--version` exit here).
//! 3. Initialise the tracing subscriber.
//! 4. Resolve configuration and run the scaffold pipeline.
//! 5. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                     |
//! |------|---------------------------------------------|
//! |  0   | Success, or a user error (name, parent dir, |
//! |      | post exists) reported with its remedy       |
//! |  1   | I/O or internal error                       |
//! |  2   | Unparseable command line                    |
//! |  4   | Malformed configuration file                |

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use tracing::{debug, info};

use create_post_core::application::ports::Reporter;

use crate::{cli::Cli, error::CliError, logging::init_logging, output::TerminalReporter};

mod cli;
mod commands;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is the normal case.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(2);
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let reporter = TerminalReporter::new(&cli.global);

    match commands::create::execute(&cli.post, &reporter) {
        Ok(()) => {
            info!("create-post completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, &reporter, cli.global.verbose > 0),
    }
}

/// The single place where a failed run becomes user output and an exit code.
fn handle_error(err: CliError, reporter: &TerminalReporter, verbose: bool) -> ExitCode {
    err.log();
    reporter.error(&err.user_message());
    reporter.details(&err.details(verbose, reporter.supports_color()));
    ExitCode::from(err.exit_code())
}
