//! Output types for unified API

use std::time::Duration;

use crate::domain::TranslationStats;

/// Translation output with metadata
#[derive(Debug, Clone)]
pub struct Output {
    /// Braille text (cells plus any characters copied through)
    pub braille: String,
    /// Processing metadata
    pub metadata: TranslationMetadata,
}

/// Metadata about one translation
#[derive(Debug, Clone)]
pub struct TranslationMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Bytes of source text
    pub bytes_processed: usize,
    /// Counters from the engine
    pub stats: TranslationStats,
}

impl Output {
    pub(crate) fn new(
        braille: String,
        source: &str,
        stats: TranslationStats,
        duration: Duration,
    ) -> Self {
        Self {
            braille,
            metadata: TranslationMetadata {
                duration,
                bytes_processed: source.len(),
                stats,
            },
        }
    }

    /// Number of Braille cells in the output
    pub fn cell_count(&self) -> usize {
        self.metadata.stats.cells_emitted
    }

    /// Check whether every input character had a cell
    pub fn is_fully_translated(&self) -> bool {
        self.metadata.stats.passthrough_chars == 0
    }
}
