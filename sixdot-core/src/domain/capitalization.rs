//! Capital-indicator placement
//!
//! Braille marks a single capital with one indicator before the letter, and a
//! fully capitalized word with one indicator before the whole word.

use serde::{Deserialize, Serialize};

/// How capital indicators are placed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapitalizationRule {
    /// One indicator for an all-caps word of two or more letters, otherwise
    /// one before each capital
    #[default]
    WholeWord,
    /// One indicator before every capital letter
    PerLetter,
}

impl CapitalizationRule {
    /// Name used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            CapitalizationRule::WholeWord => "whole-word",
            CapitalizationRule::PerLetter => "per-letter",
        }
    }
}

/// A maximal run of letters, `[start, end)` in scalar-value indices
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordSpan {
    pub start: usize,
    pub end: usize,
    /// Every letter is uppercase and there are at least two of them
    pub fully_capitalized: bool,
}

impl WordSpan {
    /// Find the word containing `index`.
    ///
    /// Expands left while the preceding scalar is a letter and right while the
    /// current scalar is a letter. `index` is expected to point at a letter.
    pub fn around(chars: &[char], index: usize) -> Self {
        let mut start = index;
        while start > 0 && chars[start - 1].is_alphabetic() {
            start -= 1;
        }

        let mut end = index;
        while end < chars.len() && chars[end].is_alphabetic() {
            end += 1;
        }

        let letters = &chars[start..end];
        let fully_capitalized = letters.len() >= 2 && letters.iter().all(|ch| ch.is_uppercase());

        Self {
            start,
            end,
            fully_capitalized,
        }
    }

    /// Check whether `index` falls inside this span
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }

    /// Number of letters in the span
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Check whether the word around `index` is fully capitalized
pub fn is_fully_capitalized_word(chars: &[char], index: usize) -> bool {
    WordSpan::around(chars, index).fully_capitalized
}
