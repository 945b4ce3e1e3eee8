//! Arcgraph - graph traversal and shortest-path CLI
//!
//! Loads node and arc record files into a fixed-capacity weighted graph and
//! runs one depth-first, breadth-first or uniform-cost query per invocation.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use arcgraph_core::error::{ExitCode as GraphExitCode, GraphError};
use arcgraph_core::format::OutputFormat;
use arcgraph_core::logging;
use cli::Cli;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap fails before `Cli.format` exists; honour a JSON request anyway
            if argv_format_json {
                let graph_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::ArgumentConflict
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::MissingSubcommand
                    | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                        GraphError::UsageError(err.to_string())
                    }
                    _ => GraphError::Other(err.to_string()),
                };

                eprintln!("{}", graph_error.to_json());
                return ExitCode::from(graph_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
