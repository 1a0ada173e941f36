mod cli;
mod model;
mod sheet;
mod sql;

use clap::Parser;
use colored::*;
use std::process::ExitCode;

use cli::{Cli, USAGE_GUIDE};

/// Exit status for usage, input and write errors
const FAILURE_STATUS: u8 = 1;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprintln!("{}", usage_error_message(&err));
            return ExitCode::from(FAILURE_STATUS);
        }
    };

    if cli.no_color {
        colored::control::set_override(false);
    }

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format_timestamp(None)
        .init();

    let result = cli::commands::import::handle_import_command(cli.import);
    if let Err(e) = &result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
    }
    ExitCode::from(exit_status(&result))
}

/// Clap's message followed by the extended usage guide
fn usage_error_message(err: &clap::Error) -> String {
    format!("{}\n{}", err.render(), USAGE_GUIDE)
}

fn exit_status(result: &anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => FAILURE_STATUS,
    }
}
