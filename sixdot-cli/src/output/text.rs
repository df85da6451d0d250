//! Plain text output formatter

use super::{strip_final_newline, OutputFormatter, TranslationRecord};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs the Braille of each input
pub struct TextFormatter<W: Write> {
    writer: W,
    include_source: bool,
    written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, include_source: bool) -> Self {
        Self {
            writer,
            include_source,
            written: 0,
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn write_translation(&mut self, record: &TranslationRecord) -> Result<()> {
        // Blank line between inputs
        if self.written > 0 {
            writeln!(self.writer)?;
        }
        if self.include_source {
            writeln!(self.writer, "{}", strip_final_newline(&record.text))?;
        }
        writeln!(self.writer, "{}", strip_final_newline(&record.braille))?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::record;

    fn render(include_source: bool, texts: &[&str]) -> String {
        let mut formatter = TextFormatter::new(Vec::new(), include_source);
        for text in texts {
            formatter.write_translation(&record("<text>", text)).unwrap();
        }
        formatter.finish().unwrap();
        String::from_utf8(formatter.into_inner()).unwrap()
    }

    #[test]
    fn test_braille_only() {
        assert_eq!(render(false, &["ab"]), "\u{2801}\u{2803}\n");
    }

    #[test]
    fn test_with_source() {
        assert_eq!(render(true, &["ab"]), "ab\n\u{2801}\u{2803}\n");
    }

    #[test]
    fn test_multiple_inputs_are_separated() {
        assert_eq!(render(false, &["a", "b"]), "\u{2801}\n\n\u{2803}\n");
    }

    #[test]
    fn test_trailing_newline_is_not_doubled() {
        assert_eq!(render(false, &["a\n"]), "\u{2801}\n");
    }

    #[test]
    fn test_passed_through_whitespace_is_kept() {
        // Tab, no-break space and a blank line have no cell and are copied
        assert_eq!(render(false, &["a\t"]), "\u{2801}\t\n");
        assert_eq!(render(false, &["a\u{00A0}"]), "\u{2801}\u{00A0}\n");
        assert_eq!(render(true, &["a\n\n"]), "a\n\n\u{2801}\n\n");
    }
}
