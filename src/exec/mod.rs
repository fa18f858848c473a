// src/exec/mod.rs

//! Process execution layer.
//!
//! This module owns everything between "a command line" and "a finished
//! child process":
//!
//! - [`command`] holds the [`CommandLine`] descriptor and the single-shot
//!   spawn-and-wait primitive.
//! - [`retry`] holds the exponential backoff policy.
//! - [`sink`] defines the [`EventSink`] capability used for logging and
//!   fatal termination, so failure policy stays out of the execution code.
//! - [`runner`] ties the three together into the public [`Runner`] API.

pub mod command;
pub mod retry;
pub mod runner;
pub mod sink;

pub use command::CommandLine;
pub use retry::RetryPolicy;
pub use runner::Runner;
pub use sink::{EventSink, TracingSink};
