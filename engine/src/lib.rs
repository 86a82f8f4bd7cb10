//! Quiz engine for Darb - state machine and configuration.
//!
//! This crate owns the application state without any TUI dependency.
//! The rendering layer reads state through accessors and drives it
//! through named transitions; every transition is a synchronous, total
//! function of current state plus one input.

use std::time::{Duration, Instant};

use tracing::debug;

pub use darb_types::{Factor, FactorRangeError, Score, UiOptions};

mod answer;
mod config;
mod state;

pub use answer::AnswerEntry;
pub use config::{AppConfig, ConfigError, DarbConfig, QuizConfig, config_path};
pub use state::{Focus, GRID_COLS, GridCursor, QuizPhase, Verdict};

use answer::AnswerDraft;

const DEFAULT_TABLE: u8 = 7;
const DEFAULT_MULTIPLIER: u8 = 5;
const DEFAULT_STARTING_SCORE: u32 = 35;

/// How long a transient status line stays visible.
const STATUS_TTL: Duration = Duration::from_secs(5);

#[derive(Debug)]
struct StatusLine {
    text: String,
    shown_at: Instant,
}

/// The quiz application state.
///
/// Exclusively owned by the frame loop; the TUI receives `&App` for
/// rendering and calls transition methods for input events. The correct
/// answer is recomputed from the factors on demand and never stored.
#[derive(Debug)]
pub struct App {
    table: Factor,
    multiplier: Factor,
    pub(crate) answer: AnswerDraft,
    pub(crate) phase: QuizPhase,
    pub(crate) score: Score,
    focus: Focus,
    table_cursor: GridCursor,
    multiplier_cursor: GridCursor,
    ui_options: UiOptions,
    digit_grouping: bool,
    status: Option<StatusLine>,
    should_quit: bool,
}

impl App {
    /// Build the initial state, seeded from configuration where present.
    ///
    /// Out-of-range configured factors fall back to the defaults with a
    /// warning; they never clamp.
    #[must_use]
    pub fn new(config: Option<&DarbConfig>) -> Self {
        let app_cfg = config.and_then(|c| c.app.as_ref());
        let quiz_cfg = config.and_then(|c| c.quiz.as_ref());

        let table = resolve_factor(quiz_cfg.and_then(|q| q.table), DEFAULT_TABLE, "quiz.table");
        let multiplier = resolve_factor(
            quiz_cfg.and_then(|q| q.multiplier),
            DEFAULT_MULTIPLIER,
            "quiz.multiplier",
        );
        let score = Score::new(
            quiz_cfg
                .and_then(|q| q.starting_score)
                .unwrap_or(DEFAULT_STARTING_SCORE),
        );

        Self {
            table,
            multiplier,
            answer: AnswerDraft::default(),
            phase: QuizPhase::Idle,
            score,
            focus: Focus::default(),
            table_cursor: GridCursor::at(table),
            multiplier_cursor: GridCursor::at(multiplier),
            ui_options: app_cfg.map(AppConfig::ui_options).unwrap_or_default(),
            digit_grouping: quiz_cfg.is_some_and(|q| q.digit_grouping),
            status: None,
            should_quit: false,
        }
    }

    // ------------------------------------------------------------------
    // Read surface
    // ------------------------------------------------------------------

    #[must_use]
    pub fn table(&self) -> Factor {
        self.table
    }

    #[must_use]
    pub fn multiplier(&self) -> Factor {
        self.multiplier
    }

    /// The correct answer for the current question, recomputed on demand.
    #[must_use]
    pub fn product(&self) -> u32 {
        u32::from(self.table.get()) * u32::from(self.multiplier.get())
    }

    /// The digits-only answer buffer.
    #[must_use]
    pub fn answer_text(&self) -> &str {
        self.answer.text()
    }

    /// Cursor position within the answer buffer, in digits.
    #[must_use]
    pub fn answer_cursor(&self) -> usize {
        self.answer.cursor()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlight cursor of a grid pane; `None` for the answer pane.
    #[must_use]
    pub fn grid_cursor(&self, pane: Focus) -> Option<GridCursor> {
        match pane {
            Focus::TableGrid => Some(self.table_cursor),
            Focus::MultiplierGrid => Some(self.multiplier_cursor),
            Focus::Answer => None,
        }
    }

    /// The selected factor of a grid pane; `None` for the answer pane.
    #[must_use]
    pub fn selected_factor(&self, pane: Focus) -> Option<Factor> {
        match pane {
            Focus::TableGrid => Some(self.table),
            Focus::MultiplierGrid => Some(self.multiplier),
            Focus::Answer => None,
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    /// Whether numerals render with a thousands separator.
    #[must_use]
    pub fn digit_grouping(&self) -> bool {
        self.digit_grouping
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Select the table factor: clears the draft and reopens the round.
    pub fn select_table(&mut self, factor: Factor) {
        debug!(factor = factor.get(), "table selected");
        self.table = factor;
        self.table_cursor = GridCursor::at(factor);
        self.reset_round();
    }

    /// Select the multiplier factor: clears the draft and reopens the round.
    pub fn select_multiplier(&mut self, factor: Factor) {
        debug!(factor = factor.get(), "multiplier selected");
        self.multiplier = factor;
        self.multiplier_cursor = GridCursor::at(factor);
        self.reset_round();
    }

    fn reset_round(&mut self) {
        self.answer.clear();
        self.phase = QuizPhase::Idle;
    }

    /// Apply the focused grid's highlight as a selection. No-op on the
    /// answer pane (Enter submits there instead; see the input layer).
    pub fn select_highlighted(&mut self) {
        match self.focus {
            Focus::TableGrid => self.select_table(self.table_cursor.factor()),
            Focus::MultiplierGrid => self.select_multiplier(self.multiplier_cursor.factor()),
            Focus::Answer => {}
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn highlight_left(&mut self) {
        if let Some(cursor) = self.focused_cursor_mut() {
            cursor.move_left();
        }
    }

    pub fn highlight_right(&mut self) {
        if let Some(cursor) = self.focused_cursor_mut() {
            cursor.move_right();
        }
    }

    pub fn highlight_up(&mut self) {
        if let Some(cursor) = self.focused_cursor_mut() {
            cursor.move_up();
        }
    }

    pub fn highlight_down(&mut self) {
        if let Some(cursor) = self.focused_cursor_mut() {
            cursor.move_down();
        }
    }

    fn focused_cursor_mut(&mut self) -> Option<&mut GridCursor> {
        match self.focus {
            Focus::TableGrid => Some(&mut self.table_cursor),
            Focus::MultiplierGrid => Some(&mut self.multiplier_cursor),
            Focus::Answer => None,
        }
    }

    /// Show a transient status-line message.
    pub fn set_status_warning(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            text: text.into(),
            shown_at: Instant::now(),
        });
    }

    /// Advance time-based state; called once per frame.
    pub fn tick(&mut self) {
        if self
            .status
            .as_ref()
            .is_some_and(|s| s.shown_at.elapsed() >= STATUS_TTL)
        {
            self.status = None;
        }
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }
}

fn resolve_factor(configured: Option<u8>, default: u8, key: &str) -> Factor {
    let fallback = Factor::new(default).expect("default factors are in range");
    match configured {
        None => fallback,
        Some(n) => match Factor::new(n) {
            Ok(factor) => factor,
            Err(err) => {
                tracing::warn!("Ignoring {key} = {n}: {err}");
                fallback
            }
        },
    }
}
