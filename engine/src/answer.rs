//! Answer draft buffer and the Idle-only entry wrapper.

use darb_types::sanitize_answer_input;
use tracing::debug;

use crate::state::{QuizPhase, Verdict};
use crate::App;

/// Largest number of digits the draft accepts. The in-range products top
/// out at three digits; the cap keeps `u32` parsing total for anything a
/// user manages to type.
pub(crate) const MAX_ANSWER_DIGITS: usize = 6;

/// The in-progress answer: a cursor over a digits-only buffer.
///
/// Invariant: `text` matches `^[0-9]*$`. Every write path goes through
/// [`sanitize_answer_input`], so the invariant cannot be broken by input
/// in either numeral system, pasted text, or control sequences. ASCII
/// digits are single bytes, so the cursor indexes bytes and characters
/// interchangeably.
#[derive(Debug, Default)]
pub(crate) struct AnswerDraft {
    text: String,
    cursor: usize,
}

impl AnswerDraft {
    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn insert_sanitized(&mut self, clean: &str) {
        let room = MAX_ANSWER_DIGITS.saturating_sub(self.text.len());
        for c in clean.chars().take(room) {
            self.text.insert(self.cursor, c);
            self.cursor += 1;
        }
    }

    fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.text.remove(self.cursor);
        }
    }

    fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.len());
    }

    fn move_cursor_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Parse the buffer. `None` only when empty; the digits-only
    /// invariant plus the length cap make everything else a valid `u32`.
    fn parse(&self) -> Option<u32> {
        self.text.parse().ok()
    }
}

/// Mode wrapper for answer editing, obtainable only while the round is
/// [`QuizPhase::Idle`].
///
/// Holding one proves the phase check happened: editing a settled round
/// or submitting twice is unrepresentable rather than merely guarded.
pub struct AnswerEntry<'a> {
    pub(crate) app: &'a mut App,
}

impl App {
    /// Get the answer-entry wrapper if the current round is still open.
    pub fn answer_entry(&mut self) -> Option<AnswerEntry<'_>> {
        self.phase.is_idle().then_some(AnswerEntry { app: self })
    }
}

impl AnswerEntry<'_> {
    /// Insert one keystroke. Accepts digits in either numeral system;
    /// anything else is dropped by the sanitizer.
    pub fn insert_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut buf));
    }

    /// Insert a run of text (paste path) through the sanitizer.
    pub fn insert_str(&mut self, raw: &str) {
        let clean = sanitize_answer_input(raw);
        self.app.answer.insert_sanitized(&clean);
    }

    pub fn delete_char(&mut self) {
        self.app.answer.delete_char();
    }

    pub fn clear(&mut self) {
        self.app.answer.clear();
    }

    pub fn move_cursor_left(&mut self) {
        self.app.answer.move_cursor_left();
    }

    pub fn move_cursor_right(&mut self) {
        self.app.answer.move_cursor_right();
    }

    pub fn move_cursor_end(&mut self) {
        self.app.answer.move_cursor_end();
    }

    /// Submit the draft, settling the round.
    ///
    /// Returns `None` without any state change when the draft is empty —
    /// submission requires a non-empty answer. Otherwise compares the
    /// guess against the product, moves to `Answered`, and bumps the
    /// score on a correct answer.
    #[must_use]
    pub fn submit(self) -> Option<Verdict> {
        let guess = self.app.answer.parse()?;
        let product = self.app.product();
        let verdict = Verdict::of_guess(guess, product);
        debug!(guess, product, correct = verdict.is_correct(), "answer submitted");

        self.app.phase = QuizPhase::Answered(verdict);
        if verdict.is_correct() {
            self.app.score.increment();
        }
        Some(verdict)
    }
}
