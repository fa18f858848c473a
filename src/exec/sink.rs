// src/exec/sink.rs

//! Logging and termination capability injected into the runner.
//!
//! The runner never talks to a global logger or calls `process::exit`
//! directly; it reports through an [`EventSink`]. Production code uses
//! [`TracingSink`]; tests can provide their own implementation that records
//! events instead of terminating the process.

use tracing::{error, info, warn};

/// Where the runner reports progress and where unrecoverable failures go.
pub trait EventSink {
    /// Routine progress, e.g. the command line about to be executed.
    fn info(&self, msg: &str);

    /// A failed attempt the caller survives (retried or ignored).
    fn warn(&self, msg: &str);

    /// Unrecoverable failure. The production implementation logs the message
    /// and terminates the host process with a non-zero exit, never returning.
    /// A test implementation may record the message and return, in which case
    /// the runner operation yields an empty default value.
    fn fatal(&self, msg: &str);
}

/// Default sink: forwards to `tracing` and exits the process on `fatal`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn info(&self, msg: &str) {
        info!("{msg}");
    }

    fn warn(&self, msg: &str) {
        warn!("{msg}");
    }

    fn fatal(&self, msg: &str) {
        error!("{msg}");
        std::process::exit(1);
    }
}
