// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `runcmd`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "runcmd",
    version,
    about = "Run a command, optionally capturing stdout and retrying with exponential backoff.",
    long_about = None
)]
pub struct CliArgs {
    /// Buffer the child's stdout and print it after the command succeeds,
    /// instead of streaming it through.
    #[arg(long)]
    pub capture: bool,

    /// Number of retries after a failed attempt.
    ///
    /// Backoff between attempts starts at 5 seconds and doubles each time.
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub retries: u32,

    /// Log a warning and exit 0 if the command fails, instead of aborting.
    #[arg(long, conflicts_with_all = ["capture", "retries"])]
    pub ignore_errors: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RUNCMD_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Program to execute (resolved via PATH, never shell-interpreted).
    #[arg(value_name = "COMMAND")]
    pub command: String,

    /// Arguments passed to the program verbatim.
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
