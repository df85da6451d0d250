//! Markdown output formatter

use super::{strip_final_newline, OutputFormatter, TranslationRecord};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - one section per input
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    include_source: bool,
    translation_count: usize,
    cell_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, include_source: bool) -> Self {
        Self {
            writer,
            include_source,
            translation_count: 0,
            cell_count: 0,
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn write_translation(&mut self, record: &TranslationRecord) -> Result<()> {
        self.translation_count += 1;
        self.cell_count += record.stats.cells_emitted;

        writeln!(self.writer, "## {}", record.source)?;
        writeln!(self.writer)?;
        if self.include_source {
            writeln!(self.writer, "```text")?;
            writeln!(self.writer, "{}", strip_final_newline(&record.text))?;
            writeln!(self.writer, "```")?;
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "```braille")?;
        writeln!(self.writer, "{}", strip_final_newline(&record.braille))?;
        writeln!(self.writer, "```")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total translations: {}, cells: {}*",
            self.translation_count, self.cell_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
