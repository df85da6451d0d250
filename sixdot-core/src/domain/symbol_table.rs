//! Character to dot-pattern dictionary with O(1) lookup
//!
//! Optimized for hot-path performance with ASCII fast-path.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::dot_pattern::DotPattern;

/// Compact dot-pattern code, e.g. `"145"` for `d`
pub type PatternCode = &'static str;

/// Numeric indicator placed before a run of digits (dots 3-4-5-6)
pub const NUMBER_PREFIX: PatternCode = "3456";

/// Capital indicator placed before an uppercase letter or word (dots 4-6)
pub const CAPITAL_PREFIX: PatternCode = "46";

/// Spanish uncontracted Braille, in display order.
///
/// Keys are lowercase; digits reuse the cells of `a`..=`j`.
const SPANISH_ENTRIES: &[(char, PatternCode)] = &[
    // Letters
    ('a', "1"),
    ('b', "12"),
    ('c', "14"),
    ('d', "145"),
    ('e', "15"),
    ('f', "124"),
    ('g', "1245"),
    ('h', "125"),
    ('i', "24"),
    ('j', "245"),
    ('k', "13"),
    ('l', "123"),
    ('m', "134"),
    ('n', "1345"),
    ('ñ', "12456"),
    ('o', "135"),
    ('p', "1234"),
    ('q', "12345"),
    ('r', "1235"),
    ('s', "234"),
    ('t', "2345"),
    ('u', "136"),
    ('v', "1236"),
    ('w', "2456"),
    ('x', "1346"),
    ('y', "13456"),
    ('z', "1356"),
    // Accented vowels and diaeresis
    ('á', "12356"),
    ('é', "2346"),
    ('í', "34"),
    ('ó', "346"),
    ('ú', "23456"),
    ('ü', "1256"),
    // Digits (used after the numeric indicator)
    ('1', "1"),
    ('2', "12"),
    ('3', "14"),
    ('4', "145"),
    ('5', "15"),
    ('6', "124"),
    ('7', "1245"),
    ('8', "125"),
    ('9', "24"),
    ('0', "245"),
    // Space and punctuation
    (' ', "0"),
    ('.', "3"),
    (',', "2"),
    (';', "23"),
    (':', "25"),
    ('?', "26"),
    ('¿', "26"),
    ('!', "235"),
    ('¡', "235"),
    ('-', "36"),
    ('(', "126"),
    (')', "345"),
    ('"', "236"),
    // Math signs
    ('+', "346"),
    ('*', "16"),
    ('×', "16"),
    ('/', "34"),
    ('÷', "256"),
    ('=', "2356"),
];

static SPANISH: OnceLock<SymbolTable> = OnceLock::new();

/// Immutable lookup table from source characters to pattern codes
#[derive(Debug, Clone)]
pub struct SymbolTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [Option<PatternCode>; 128],
    /// HashMap for non-ASCII keys (accented letters, ñ, ¿, ¡, ...)
    non_ascii: HashMap<char, PatternCode>,
    /// Entries in insertion order, for listing
    entries: Vec<(char, PatternCode)>,
}

impl SymbolTable {
    /// Build a table from `(character, code)` pairs.
    ///
    /// Keys are stored lowercased. A later entry for the same key replaces
    /// the earlier one.
    pub fn new(entries: &[(char, PatternCode)]) -> Self {
        let mut ascii_table = [None; 128];
        let mut non_ascii = HashMap::new();
        let mut ordered: Vec<(char, PatternCode)> = Vec::with_capacity(entries.len());

        for &(ch, code) in entries {
            let key = normalize(ch).unwrap_or(ch);
            if key.is_ascii() {
                ascii_table[key as usize] = Some(code);
            } else {
                non_ascii.insert(key, code);
            }

            match ordered.iter_mut().find(|(existing, _)| *existing == key) {
                Some(slot) => slot.1 = code,
                None => ordered.push((key, code)),
            }
        }

        Self {
            ascii_table,
            non_ascii,
            entries: ordered,
        }
    }

    /// The shared Spanish table, built on first access
    pub fn spanish() -> &'static SymbolTable {
        SPANISH.get_or_init(|| SymbolTable::new(SPANISH_ENTRIES))
    }

    /// Look up the pattern code of a character, ignoring case - hot path
    #[inline]
    pub fn lookup(&self, ch: char) -> Option<PatternCode> {
        let key = normalize(ch)?;
        if key.is_ascii() {
            // Fast path: direct array lookup
            self.ascii_table[key as usize]
        } else {
            // Slow path: hash lookup
            self.non_ascii.get(&key).copied()
        }
    }

    /// Look up a character and parse its code into a cell
    #[inline]
    pub fn pattern(&self, ch: char) -> Option<DotPattern> {
        self.lookup(ch).map(DotPattern::from_code)
    }

    /// Check if the character is one of the digits the table translates
    #[inline]
    pub fn is_numeric(&self, ch: char) -> bool {
        ch.is_ascii_digit() && self.lookup(ch).is_some()
    }

    /// Cell emitted before the first digit of a number
    pub fn number_prefix(&self) -> DotPattern {
        DotPattern::from_code(NUMBER_PREFIX)
    }

    /// Cell emitted before a capital letter or a fully capitalized word
    pub fn capital_prefix(&self) -> DotPattern {
        DotPattern::from_code(CAPITAL_PREFIX)
    }

    /// All entries in table order
    pub fn entries(&self) -> impl Iterator<Item = (char, PatternCode)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::spanish().clone()
    }
}

/// Single-scalar lowercase form of `ch`.
///
/// Characters whose lowercase expands to several scalar values (e.g. `İ`)
/// have no key in the table.
#[inline]
fn normalize(ch: char) -> Option<char> {
    if ch.is_ascii() {
        return Some(ch.to_ascii_lowercase());
    }

    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => Some(single),
        _ => None,
    }
}
