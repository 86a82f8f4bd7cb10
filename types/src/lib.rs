//! Core domain types for Darb - no IO, no async.
//!
//! Everything here is pure data and pure functions: the numeral
//! conversion tables, the answer sanitizer, and the validated quiz
//! domain types. Both the engine (state ownership) and the tui
//! (rendering/input) depend on this crate; it depends on neither.

mod factor;
pub mod numerals;
mod sanitize;
mod ui;

pub use factor::{Factor, FactorRangeError, Score};
pub use numerals::{DigitMap, EASTERN_ARABIC, to_eastern, to_eastern_grouped, to_western};
pub use sanitize::sanitize_answer_input;
pub use ui::UiOptions;
