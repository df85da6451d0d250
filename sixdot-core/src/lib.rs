//! Spanish text to six-dot Braille translation
//!
//! This crate turns text written with the Spanish alphabet, digits,
//! punctuation and accented letters into uncontracted six-dot Braille,
//! rendered as characters of the Unicode Braille Patterns block
//! (U+2800..U+283F).
//!
//! # Architecture
//!
//! - **Domain layer**: the cell model ([`DotPattern`]), the dictionary
//!   ([`SymbolTable`]) and the single-pass scanner ([`TranslationEngine`])
//!   that decides where numeric and capital indicators go.
//! - **API layer**: configuration, input decoding and output metadata for
//!   front ends such as the `sixdot` CLI.
//!
//! # Example
//!
//! ```rust
//! use sixdot_core::BrailleTranslator;
//!
//! let translator = BrailleTranslator::new();
//!
//! // "1" needs the numeric indicator (dots 3456) before the 'a' cell
//! assert_eq!(translator.translate("1"), "\u{283C}\u{2801}");
//!
//! // A fully capitalized word gets a single capital indicator
//! assert_eq!(translator.translate("SOL"), "\u{2828}\u{280E}\u{2815}\u{2807}");
//! ```

pub mod api;
pub mod domain;
pub mod traits;

pub use api::{
    BrailleTranslator, Config, ConfigBuilder, Error, Input, Output, Result, TranslationMetadata,
};
pub use domain::{
    CapitalizationRule, CharacterClass, DotPattern, SymbolTable, TranslationEngine,
    TranslationStats,
};
pub use traits::Translator;

/// Translate `text` with the default Spanish table and rules
pub fn translate(text: &str) -> String {
    TranslationEngine::new().translate(text)
}
