//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use sixdot_core::TranslationStats;
use std::io::Write;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Braille only, one block per input
    #[default]
    Text,
    /// JSON array of translations with statistics
    Json,
    /// Markdown document with source and Braille sections
    Markdown,
}

impl OutputFormat {
    /// All formats, in display order
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    /// Name used on the command line and in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Braille text, optionally preceded by the source",
            OutputFormat::Json => "JSON array of {source, text, braille, stats} records",
            OutputFormat::Markdown => "Markdown sections with source and Braille blocks",
        }
    }
}

/// One translated input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Where the text came from (file path, `<stdin>` or `<text>`)
    pub source: String,
    /// Source text
    pub text: String,
    /// Braille translation
    pub braille: String,
    /// Engine counters
    pub stats: TranslationStats,
}

/// Presentation options shared by the formatters
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Print the source text next to the Braille
    pub include_source: bool,
    /// Indent JSON output
    pub pretty_json: bool,
}

/// `text` without one final line feed
///
/// Other trailing whitespace is part of the translation and is kept.
pub(crate) fn strip_final_newline(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single translation
    fn write_translation(&mut self, record: &TranslationRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    options: FormatOptions,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options.include_source)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options.pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, options.include_source)),
    }
}
