// src/exec/runner.rs

//! Public command-runner API.
//!
//! Each fatal operation is split into a result-returning core
//! ([`Runner::run_once`], [`Runner::try_run_with_retry`]) and a thin wrapper
//! that maps `Err` to [`EventSink::fatal`]. The termination policy lives at
//! the edge, so the retry and execution logic can be exercised in tests
//! without killing the test process.

use std::thread;

use crate::errors::Result;
use crate::exec::command::{self, CommandLine};
use crate::exec::retry::RetryPolicy;
use crate::exec::sink::{EventSink, TracingSink};

/// Runs external commands with configurable capture, retry and failure
/// policy.
///
/// Each call spawns exactly one child process at a time and blocks the
/// calling thread until it exits (plus backoff sleeps between retries).
/// A `Runner` holds no mutable state, so it can be shared freely.
pub struct Runner<S = TracingSink> {
    sink: S,
    policy: RetryPolicy,
}

impl Runner<TracingSink> {
    pub fn new() -> Self {
        Self::with_sink(TracingSink)
    }
}

impl Default for Runner<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> Runner<S> {
    /// Build a runner with a custom sink (tests use a recording sink).
    pub fn with_sink(sink: S) -> Self {
        Self {
            sink,
            policy: RetryPolicy::default(),
        }
    }

    /// Replace the backoff policy (tests use zero delays).
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run the command once, logging it at info level first.
    ///
    /// Returns the captured stdout bytes (empty when `capture` is false), or
    /// an error if the process failed to start or exited non-zero.
    pub fn run_once(&self, capture: bool, cmd: &CommandLine) -> Result<Vec<u8>> {
        command::run_once(&self.sink, capture, cmd)
    }

    /// Attempt the command up to `max_retries + 1` times, sleeping the policy
    /// delay between failed attempts. Every failure is logged as a warning,
    /// including the last one.
    ///
    /// On success returns captured stdout trimmed of surrounding whitespace
    /// (empty when `capture` is false).
    pub fn try_run_with_retry(
        &self,
        capture: bool,
        max_retries: u32,
        cmd: &CommandLine,
    ) -> Result<String> {
        let mut delays = self.policy.delays();
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            match self.run_once(capture, cmd) {
                Ok(out) => return Ok(decode_trimmed(&out)),
                Err(err) => {
                    self.sink
                        .warn(&format!("{} failed: {err:#}; retrying...", cmd.program()));
                    if attempt > max_retries {
                        return Err(err);
                    }
                }
            }

            if let Some(delay) = delays.next() {
                thread::sleep(delay);
            }
        }
    }

    /// Run with retries; once the retry budget is exhausted the failure is
    /// fatal (see [`EventSink::fatal`]) and the command plus final error are
    /// logged first.
    pub fn run_with_retry(&self, capture: bool, max_retries: u32, cmd: &CommandLine) -> String {
        match self.try_run_with_retry(capture, max_retries, cmd) {
            Ok(output) => output,
            Err(err) => {
                self.sink.fatal(&format!("{}: {err:#}", cmd.program()));
                String::new()
            }
        }
    }

    /// Single attempt, streaming output through; fatal on failure.
    pub fn run(&self, cmd: &CommandLine) {
        if let Err(err) = self.run_once(false, cmd) {
            self.sink.fatal(&format!("{}: {err:#}", cmd.program()));
        }
    }

    /// Single attempt, streaming output through; a failure is logged as a
    /// warning and otherwise ignored. The only non-fatal failure policy.
    pub fn run_ignore_err(&self, cmd: &CommandLine) {
        if let Err(err) = self.run_once(false, cmd) {
            self.sink
                .warn(&format!("(ignored) {}: {err:#}", cmd.program()));
        }
    }

    /// Single attempt, capturing stdout; fatal on failure.
    pub fn run_capture(&self, cmd: &CommandLine) -> String {
        match self.run_once(true, cmd) {
            Ok(out) => decode_trimmed(&out),
            Err(err) => {
                self.sink.fatal(&format!("{}: {err:#}", cmd.program()));
                String::new()
            }
        }
    }
}

/// Lossy UTF-8 decode with surrounding whitespace removed; interior
/// whitespace is preserved as-is.
fn decode_trimmed(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim().to_string()
}
