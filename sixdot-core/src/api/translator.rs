//! Main translator implementation

use std::io::Read;
use std::time::Instant;

use crate::api::{Config, Error, Input, Output};
use crate::domain::{SymbolTable, TranslationEngine};
use crate::traits::Translator;

/// Spanish text to Braille translator with a clean API
#[derive(Debug, Clone)]
pub struct BrailleTranslator {
    engine: TranslationEngine<'static>,
    config: Config,
}

impl BrailleTranslator {
    /// Create a new translator with default configuration
    pub fn new() -> Self {
        Self::from_valid_config(Config::default())
    }

    /// Create a translator with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: Config) -> Self {
        let engine = TranslationEngine::with_table(SymbolTable::spanish())
            .with_capitalization(config.capitalization);
        Self { engine, config }
    }

    /// Translate text directly. Never fails.
    pub fn translate(&self, text: &str) -> String {
        self.engine.translate(text)
    }

    /// Translate input and return the Braille text with metadata
    pub fn process(&self, input: Input) -> Result<Output, Error> {
        let start = Instant::now();

        let text = input.into_text(self.config.max_input_bytes)?;

        log::debug!("translating {} bytes", text.len());
        let (braille, stats) = self.engine.translate_with_stats(&text);

        let duration = start.elapsed();
        log::debug!(
            "emitted {} cells ({} passed through) in {:?}",
            stats.cells_emitted,
            stats.passthrough_chars,
            duration
        );
        Ok(Output::new(braille, &text, stats, duration))
    }

    /// Translate input from a reader stream
    pub fn process_stream<R: Read + Send + Sync + 'static>(
        &self,
        reader: R,
    ) -> Result<Output, Error> {
        self.process(Input::from_reader(reader))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying engine
    pub fn engine(&self) -> &TranslationEngine<'static> {
        &self.engine
    }
}

impl Default for BrailleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for BrailleTranslator {
    fn translate(&self, text: &str) -> String {
        BrailleTranslator::translate(self, text)
    }

    fn name(&self) -> &str {
        Translator::name(&self.engine)
    }
}
