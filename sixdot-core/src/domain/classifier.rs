//! Character classification for the translation scan

use super::symbol_table::SymbolTable;

/// Classification of a scalar value, computed once per character
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterClass {
    /// Digit the table translates (starts or continues a number)
    Digit,
    /// Comma or period, which may separate groups inside a number
    DecimalSeparator,
    /// The space character
    Space,
    /// Alphabetic character (may be uppercase)
    Letter,
    /// Any other character (punctuation, symbols, control characters, ...)
    Other,
}

impl CharacterClass {
    /// Classify a character against a symbol table
    #[inline]
    pub fn of(ch: char, table: &SymbolTable) -> Self {
        match ch {
            _ if table.is_numeric(ch) => CharacterClass::Digit,
            ',' | '.' => CharacterClass::DecimalSeparator,
            ' ' => CharacterClass::Space,
            _ if ch.is_alphabetic() => CharacterClass::Letter,
            _ => CharacterClass::Other,
        }
    }

    /// Check whether this class keeps an open number run going
    #[inline]
    pub fn keeps_numeric_mode(self) -> bool {
        matches!(self, CharacterClass::Digit | CharacterClass::DecimalSeparator)
    }
}
