// tests/common/mod.rs

//! Shared helpers for the integration tests.
//!
//! `RecordingSink` stands in for the production sink: it records every event
//! instead of logging, and `fatal` records and returns instead of terminating
//! the test process, so the fatal failure paths can be asserted in-process.

#![allow(dead_code)] // each test binary uses a different subset

use std::fs;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use runcmd::exec::{CommandLine, EventSink, RetryPolicy, Runner};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Info(String),
    Warn(String),
    Fatal(String),
}

/// Sink that records events instead of logging or exiting.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                SinkEvent::Info(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    pub fn warns(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                SinkEvent::Warn(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    pub fn fatals(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                SinkEvent::Fatal(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn info(&self, msg: &str) {
        self.events.lock().unwrap().push(SinkEvent::Info(msg.into()));
    }

    fn warn(&self, msg: &str) {
        self.events.lock().unwrap().push(SinkEvent::Warn(msg.into()));
    }

    fn fatal(&self, msg: &str) {
        self.events
            .lock()
            .unwrap()
            .push(SinkEvent::Fatal(msg.into()));
    }
}

/// Runner with a recording sink and zero backoff delays, so retry tests run
/// instantly.
pub fn recording_runner() -> Runner<RecordingSink> {
    Runner::with_sink(RecordingSink::default()).with_policy(RetryPolicy {
        initial_delay: Duration::ZERO,
        factor: 2,
    })
}

/// Command that fails `failures` times and then succeeds, tracking how often
/// it ran in the `counter` file (which must not exist yet).
pub fn flaky_command(counter: &Path, failures: u32) -> CommandLine {
    let script = format!(
        r#"n=$(cat "$0" 2>/dev/null || echo 0); n=$((n + 1)); printf '%s' "$n" > "$0"; [ "$n" -gt {failures} ]"#
    );
    let counter = counter.display().to_string();
    CommandLine::new("sh", ["-c", script.as_str(), counter.as_str()])
}

/// How many times a `flaky_command` has run so far.
pub fn attempts(counter: &Path) -> u32 {
    fs::read_to_string(counter)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}
