//! sixdot CLI library
//!
//! This library provides the command-line interface for the sixdot
//! Spanish text to Braille translator.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
