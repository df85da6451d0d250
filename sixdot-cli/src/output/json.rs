//! JSON output formatter

use super::{OutputFormatter, TranslationRecord};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs translations as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<TranslationRecord>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn write_translation(&mut self, record: &TranslationRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
