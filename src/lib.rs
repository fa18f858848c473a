// src/lib.rs

pub mod cli;
pub mod errors;
pub mod exec;
pub mod logging;

use anyhow::Result;

use crate::cli::CliArgs;
use crate::exec::{CommandLine, Runner};

/// High-level entry point used by `main.rs`.
///
/// Maps the CLI flags onto the runner operations:
/// - `--ignore-errors`: single attempt, failure logged and swallowed
/// - otherwise: retrying execution with fatal failure policy (with the
///   default `--retries 0` this is the plain single-attempt fatal path)
pub fn run(args: CliArgs) -> Result<()> {
    let cmd = CommandLine::new(args.command, args.args);
    let runner = Runner::new();

    if args.ignore_errors {
        runner.run_ignore_err(&cmd);
        return Ok(());
    }

    let output = runner.run_with_retry(args.capture, args.retries, &cmd);
    if args.capture {
        println!("{output}");
    }
    Ok(())
}
