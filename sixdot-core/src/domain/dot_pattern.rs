//! Six-dot Braille cell representation
//!
//! Dots are numbered the standard way:
//!
//! ```text
//! 1 o o 4
//! 2 o o 5
//! 3 o o 6
//! ```
//!
//! Dot `k` maps to bit `k - 1` of the offset from U+2800, which is exactly the
//! layout of the Unicode Braille Patterns block for six-dot cells.

use std::fmt;

/// First code point of the Unicode Braille Patterns block (the blank cell)
pub const BRAILLE_BASE: u32 = 0x2800;

/// Number of dots in a cell
pub const DOT_COUNT: u8 = 6;

/// Which of the six dots of a Braille cell are raised
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DotPattern {
    /// Bit `k - 1` is set when dot `k` is raised; bits 6 and 7 are always clear
    bits: u8,
}

impl DotPattern {
    /// The cell with no raised dots (used for spaces)
    pub const BLANK: DotPattern = DotPattern { bits: 0 };

    /// Parse a compact code such as `"145"` into a pattern.
    ///
    /// Every digit in `1..=6` raises that dot. Other digits, repeated digits
    /// and non-digit characters are skipped, so this never fails: `"0"` and
    /// `""` both produce [`DotPattern::BLANK`].
    pub fn from_code(code: &str) -> Self {
        let bits = code
            .chars()
            .filter_map(|ch| ch.to_digit(10))
            .filter(|dot| (1..=u32::from(DOT_COUNT)).contains(dot))
            .fold(0u8, |acc, dot| acc | (1 << (dot - 1)));

        Self { bits }
    }

    /// Check whether dot `dot` is raised. Out-of-range dots are never raised.
    #[inline]
    pub fn is_active(&self, dot: u8) -> bool {
        (1..=DOT_COUNT).contains(&dot) && self.bits & (1 << (dot - 1)) != 0
    }

    /// Raw bit mask (bit `k - 1` for dot `k`)
    #[inline]
    pub fn bits(&self) -> u8 {
        self.bits
    }

    /// Check if no dot is raised
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.bits == 0
    }

    /// The Unicode Braille character for this cell (always U+2800..=U+283F)
    #[inline]
    pub fn to_unicode_scalar(&self) -> char {
        // bits < 0x40, so the sum stays inside the Braille block
        char::from_u32(BRAILLE_BASE + u32::from(self.bits)).unwrap_or('\u{2800}')
    }

    /// Raised dots in ascending order
    pub fn raised_dots(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=DOT_COUNT).filter(move |dot| self.is_active(*dot))
    }

    /// Canonical compact code: the raised dots in ascending order.
    ///
    /// The blank cell yields an empty string.
    pub fn pattern_code(&self) -> String {
        self.raised_dots()
            .map(|dot| char::from(b'0' + dot))
            .collect()
    }
}

impl From<&str> for DotPattern {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

impl From<DotPattern> for char {
    fn from(pattern: DotPattern) -> Self {
        pattern.to_unicode_scalar()
    }
}

impl fmt::Display for DotPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_unicode_scalar())
    }
}
