//! tmeditor CLI library
//!
//! This library provides the command-line interface for validating
//! Level-1 trigger menu algorithm expressions.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
