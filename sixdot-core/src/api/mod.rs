//! Unified API for sixdot-core
//!
//! This module provides a small interface over the translation engine that
//! front ends (CLI, other programs) use instead of the domain types.

mod config;
mod error;
mod input;
mod output;
mod translator;

#[cfg(test)]
mod tests;

pub use config::{defaults, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use output::{Output, TranslationMetadata};
pub use translator::BrailleTranslator;
