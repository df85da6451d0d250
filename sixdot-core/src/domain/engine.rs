//! Single-pass text to Braille translation
//!
//! The engine walks the input once, left to right, over Unicode scalar
//! values. The only state carried between characters is whether a number is
//! currently open (so the numeric indicator is written once per run of
//! digits) and the span of the word being capitalized.

use serde::{Deserialize, Serialize};

use super::capitalization::{CapitalizationRule, WordSpan};
use super::classifier::CharacterClass;
use super::dot_pattern::DotPattern;
use super::symbol_table::SymbolTable;
use crate::traits::Translator;

/// Counters collected while translating one input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationStats {
    /// Unicode scalar values read from the input
    pub chars_scanned: usize,
    /// Braille cells written, prefixes included
    pub cells_emitted: usize,
    /// Numeric indicators written
    pub number_prefixes: usize,
    /// Capital indicators written
    pub capital_prefixes: usize,
    /// Characters copied through untranslated
    pub passthrough_chars: usize,
}

impl TranslationStats {
    /// Add another input's counters to these
    pub fn merge(&mut self, other: &TranslationStats) {
        self.chars_scanned += other.chars_scanned;
        self.cells_emitted += other.cells_emitted;
        self.number_prefixes += other.number_prefixes;
        self.capital_prefixes += other.capital_prefixes;
        self.passthrough_chars += other.passthrough_chars;
    }
}

/// Stateless translator over a borrowed symbol table
#[derive(Debug, Clone, Copy)]
pub struct TranslationEngine<'t> {
    table: &'t SymbolTable,
    capitalization: CapitalizationRule,
}

impl TranslationEngine<'static> {
    /// Engine over the built-in Spanish table
    pub fn new() -> Self {
        Self::with_table(SymbolTable::spanish())
    }
}

impl Default for TranslationEngine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> TranslationEngine<'t> {
    /// Engine over a caller-provided table
    pub fn with_table(table: &'t SymbolTable) -> Self {
        Self {
            table,
            capitalization: CapitalizationRule::default(),
        }
    }

    /// Use a different capital-indicator rule
    pub fn with_capitalization(mut self, rule: CapitalizationRule) -> Self {
        self.capitalization = rule;
        self
    }

    /// The table this engine reads
    pub fn table(&self) -> &'t SymbolTable {
        self.table
    }

    /// The capital-indicator rule in use
    pub fn capitalization(&self) -> CapitalizationRule {
        self.capitalization
    }

    /// Translate `text` to Unicode Braille.
    ///
    /// Never fails: characters missing from the table are copied through.
    pub fn translate(&self, text: &str) -> String {
        self.translate_with_stats(text).0
    }

    /// Translate `text` and report what was emitted
    pub fn translate_with_stats(&self, text: &str) -> (String, TranslationStats) {
        if text.is_empty() {
            return (String::new(), TranslationStats::default());
        }

        let mut scan = Scan::new(self, text);
        scan.run();
        (scan.out, scan.stats)
    }
}

impl Translator for TranslationEngine<'_> {
    fn translate(&self, text: &str) -> String {
        TranslationEngine::translate(self, text)
    }

    fn name(&self) -> &str {
        "spanish-uncontracted"
    }
}

/// Per-call scan state
struct Scan<'e, 't> {
    engine: &'e TranslationEngine<'t>,
    chars: Vec<char>,
    out: String,
    numeric_mode: bool,
    /// Word containing the last uppercase letter seen
    word: Option<WordSpan>,
    /// Whether `word` already received its whole-word indicator
    word_marked: bool,
    stats: TranslationStats,
}

impl<'e, 't> Scan<'e, 't> {
    fn new(engine: &'e TranslationEngine<'t>, text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        // Braille cells are three bytes in UTF-8
        let out = String::with_capacity(chars.len() * 3);

        Self {
            engine,
            chars,
            out,
            numeric_mode: false,
            word: None,
            word_marked: false,
            stats: TranslationStats::default(),
        }
    }

    fn run(&mut self) {
        let table = self.engine.table;

        for index in 0..self.chars.len() {
            let ch = self.chars[index];
            self.stats.chars_scanned += 1;

            let class = CharacterClass::of(ch, table);
            if !class.keeps_numeric_mode() {
                self.leave_numeric_mode(index);
            }

            match class {
                CharacterClass::Digit => {
                    if !self.numeric_mode {
                        log::trace!("entering numeric mode at {index}");
                        self.numeric_mode = true;
                        self.emit(table.number_prefix());
                        self.stats.number_prefixes += 1;
                    }
                    self.emit_or_copy(ch);
                }
                CharacterClass::Letter | CharacterClass::Other if ch.is_uppercase() => {
                    self.emit_capital(index, ch);
                }
                _ => self.emit_or_copy(ch),
            }
        }
    }

    fn leave_numeric_mode(&mut self, index: usize) {
        if self.numeric_mode {
            log::trace!("leaving numeric mode at {index}");
            self.numeric_mode = false;
        }
    }

    /// Write an uppercase character: indicator (if due) then its lowercase cell
    fn emit_capital(&mut self, index: usize, ch: char) {
        let table = self.engine.table;
        let Some(cell) = table.pattern(ch) else {
            // No lowercase cell: no indicator either
            self.copy(ch);
            return;
        };

        let needs_prefix = match self.engine.capitalization {
            CapitalizationRule::PerLetter => true,
            CapitalizationRule::WholeWord => {
                let span = self.word_at(index);
                if span.fully_capitalized {
                    let first = !self.word_marked;
                    self.word_marked = true;
                    first
                } else {
                    true
                }
            }
        };

        if needs_prefix {
            self.emit(table.capital_prefix());
            self.stats.capital_prefixes += 1;
        }
        self.emit(cell);
    }

    /// Word span around `index`, reused while the scan stays inside it
    fn word_at(&mut self, index: usize) -> WordSpan {
        match self.word {
            Some(span) if span.contains(index) => span,
            _ => {
                let span = WordSpan::around(&self.chars, index);
                if span.fully_capitalized {
                    log::trace!("capitalized word at {}..{}", span.start, span.end);
                }
                self.word = Some(span);
                self.word_marked = false;
                span
            }
        }
    }

    fn emit_or_copy(&mut self, ch: char) {
        match self.engine.table.pattern(ch) {
            Some(cell) => self.emit(cell),
            None => self.copy(ch),
        }
    }

    #[inline]
    fn emit(&mut self, cell: DotPattern) {
        self.out.push(cell.to_unicode_scalar());
        self.stats.cells_emitted += 1;
    }

    #[inline]
    fn copy(&mut self, ch: char) {
        self.out.push(ch);
        self.stats.passthrough_chars += 1;
    }
}
