// src/errors.rs

//! Crate-wide error aliases.
//!
//! Currently a thin wrapper around `anyhow`; the module exists so structured
//! error types have one obvious home if they are ever needed.

pub use anyhow::{Error, Result};
