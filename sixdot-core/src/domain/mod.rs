//! Domain layer for text to Braille translation
//!
//! Pure, allocation-light logic with no I/O: the cell model, the Spanish
//! dictionary and the scanning engine that places numeric and capital
//! indicators.

pub mod capitalization;
pub mod classifier;
pub mod dot_pattern;
pub mod engine;
pub mod symbol_table;

pub use capitalization::{is_fully_capitalized_word, CapitalizationRule, WordSpan};
pub use classifier::CharacterClass;
pub use dot_pattern::{DotPattern, BRAILLE_BASE};
pub use engine::{TranslationEngine, TranslationStats};
pub use symbol_table::{PatternCode, SymbolTable, CAPITAL_PREFIX, NUMBER_PREFIX};
