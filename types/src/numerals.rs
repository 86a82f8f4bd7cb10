//! Numeral rendering and reverse mapping between digit systems.
//!
//! The quiz displays every number in Eastern Arabic-Indic digits while the
//! engine stores Western (ASCII) digits only. Conversion goes through an
//! explicit [`DigitMap`] rather than host locale data, so behavior is
//! deterministic and testable on any machine.
//!
//! # Round-trip contract
//!
//! For any `n: u64`, [`to_western`] applied to [`to_eastern`] (or to
//! [`to_eastern_grouped`]) reproduces the Western decimal digits of `n`.
//! The reverse map strips the grouping separator, so the contract holds
//! whether or not the renderer grouped.

use std::borrow::Cow;

/// A digit system: ten glyphs in value order plus a grouping separator.
///
/// All operations are pure and total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitMap {
    digits: [char; 10],
    group_separator: char,
}

/// Eastern Arabic-Indic digits (U+0660–U+0669) with the Arabic thousands
/// separator (U+066C).
pub const EASTERN_ARABIC: DigitMap = DigitMap {
    digits: ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'],
    group_separator: '٬',
};

impl DigitMap {
    /// Build a map from explicit glyphs.
    #[must_use]
    pub const fn new(digits: [char; 10], group_separator: char) -> Self {
        Self {
            digits,
            group_separator,
        }
    }

    /// Render `n` in this map's glyphs, without grouping.
    #[must_use]
    pub fn render(&self, n: u64) -> String {
        n.to_string()
            .chars()
            .map(|c| self.glyph_for(c))
            .collect()
    }

    /// Render `n` in this map's glyphs with the separator every three digits.
    #[must_use]
    pub fn render_grouped(&self, n: u64) -> String {
        let western = n.to_string();
        let len = western.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, c) in western.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.group_separator);
            }
            out.push(self.glyph_for(c));
        }
        out
    }

    /// Map each ASCII digit in `s` to this map's glyph, leaving every
    /// other character unchanged.
    ///
    /// This is the display path for buffers that must preserve leading
    /// zeros, where rendering through a number would lose them.
    #[must_use]
    pub fn render_digits(&self, s: &str) -> String {
        s.chars().map(|c| self.glyph_for(c)).collect()
    }

    /// Map each of this system's digit glyphs in `s` to its ASCII digit,
    /// strip the grouping separator, and leave every other character
    /// unchanged.
    ///
    /// Returns `Cow::Borrowed` when `s` contains nothing to rewrite (the
    /// common case for input typed on a Western keyboard).
    ///
    /// # Examples
    ///
    /// ```
    /// use darb_types::numerals::EASTERN_ARABIC;
    ///
    /// assert_eq!(EASTERN_ARABIC.to_western("٣٥"), "35");
    /// assert_eq!(EASTERN_ARABIC.to_western("12"), "12");
    /// assert_eq!(EASTERN_ARABIC.to_western("a٣b"), "a3b");
    /// assert_eq!(EASTERN_ARABIC.to_western(""), "");
    /// ```
    #[must_use]
    pub fn to_western<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if !s
            .chars()
            .any(|c| c == self.group_separator || self.value_of(c).is_some())
        {
            return Cow::Borrowed(s);
        }

        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            if c == self.group_separator {
                continue;
            }
            match self.value_of(c) {
                Some(v) => out.push((b'0' + v) as char),
                None => out.push(c),
            }
        }
        Cow::Owned(out)
    }

    /// The value (0-9) of one of this map's glyphs, or `None` for any
    /// other character.
    #[must_use]
    pub fn value_of(&self, c: char) -> Option<u8> {
        self.digits.iter().position(|&d| d == c).map(|i| i as u8)
    }

    /// This map's glyph for an ASCII digit.
    ///
    /// Non-digit characters pass through unchanged; `render` only ever
    /// feeds it the output of `u64::to_string`.
    fn glyph_for(&self, c: char) -> char {
        match c.to_digit(10) {
            Some(v) => self.digits[v as usize],
            None => c,
        }
    }
}

/// Render `n` in Eastern Arabic-Indic digits, ungrouped.
#[must_use]
pub fn to_eastern(n: u64) -> String {
    EASTERN_ARABIC.render(n)
}

/// Render `n` in Eastern Arabic-Indic digits with thousands grouping.
#[must_use]
pub fn to_eastern_grouped(n: u64) -> String {
    EASTERN_ARABIC.render_grouped(n)
}

/// Map Eastern Arabic-Indic digits in `s` to Western digits.
#[must_use]
pub fn to_western(s: &str) -> Cow<'_, str> {
    EASTERN_ARABIC.to_western(s)
}
