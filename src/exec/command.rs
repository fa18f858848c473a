// src/exec/command.rs

//! Command descriptor and the single-shot spawn-and-wait primitive.

use std::fmt;
use std::process::{Command, Stdio};

use anyhow::{Context, bail};

use crate::errors::Result;
use crate::exec::sink::EventSink;

/// A program plus its ordered arguments.
///
/// Arguments are handed to the OS verbatim; nothing is shell-interpreted, so
/// there is no quoting or injection surface. The program name is resolved via
/// the platform's normal executable search (`PATH`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandLine {
    /// Renders the full space-joined command line, as logged before execution.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Spawn the command once and block until it exits.
///
/// Stderr is always inherited from the host process. With `capture = false`,
/// stdout is inherited too and the returned bytes are empty; with
/// `capture = true`, stdout is buffered in memory and returned raw.
///
/// A process that cannot be started and a process that exits non-zero both
/// surface as the same generic error. Callers get no exit-code taxonomy;
/// provisioning-style callers treat every failure uniformly.
pub(crate) fn run_once(sink: &dyn EventSink, capture: bool, cmd: &CommandLine) -> Result<Vec<u8>> {
    sink.info(&format!("running: {cmd}"));

    let mut command = Command::new(cmd.program());
    command.args(cmd.args()).stderr(Stdio::inherit());

    if capture {
        let output = command
            .stdout(Stdio::piped())
            .output()
            .with_context(|| format!("spawning process for '{}'", cmd.program()))?;

        if !output.status.success() {
            bail!("'{cmd}' exited with {}", output.status);
        }
        Ok(output.stdout)
    } else {
        let status = command
            .stdout(Stdio::inherit())
            .status()
            .with_context(|| format!("spawning process for '{}'", cmd.program()))?;

        if !status.success() {
            bail!("'{cmd}' exited with {status}");
        }
        Ok(Vec::new())
    }
}
