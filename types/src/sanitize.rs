//! Answer input sanitization.
//!
//! Raw input reaches the answer draft from keystrokes and terminal paste
//! events, in either numeral system and possibly mixed with arbitrary
//! characters. Everything passes through [`sanitize_answer_input`] before
//! it is stored, which is what guarantees the draft's digits-only
//! invariant — the engine never re-validates.

use std::borrow::Cow;

use crate::numerals::EASTERN_ARABIC;

/// Reduce raw input to Western digits.
///
/// Maps Eastern Arabic-Indic digits to their ASCII counterparts, then
/// drops every character that is not an ASCII digit. The result always
/// matches `^[0-9]*$`.
///
/// # Performance
///
/// Returns `Cow::Borrowed` when the input is already clean (the common
/// case: a single ASCII digit per keystroke).
///
/// # Examples
///
/// ```
/// use darb_types::sanitize_answer_input;
///
/// assert_eq!(sanitize_answer_input("35"), "35");
/// assert_eq!(sanitize_answer_input("٣٥"), "35");
/// assert_eq!(sanitize_answer_input("3a5 ٧!"), "357");
/// assert_eq!(sanitize_answer_input("abc"), "");
/// ```
#[must_use]
pub fn sanitize_answer_input(raw: &str) -> Cow<'_, str> {
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(raw);
    }

    let western = EASTERN_ARABIC.to_western(raw);
    Cow::Owned(western.chars().filter(char::is_ascii_digit).collect())
}
