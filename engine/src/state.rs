//! Quiz round state machine types.

use darb_types::Factor;

/// Outcome of a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    #[must_use]
    pub fn of_guess(guess: u32, product: u32) -> Self {
        if guess == product {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Phase of the current round.
///
/// # State Machine
/// ```text
/// ┌──────┐   submit (non-empty draft)   ┌───────────────────┐
/// │ Idle │ ───────────────────────────> │ Answered(verdict) │
/// └──────┘                              └───────────────────┘
///     ^                                          │
///     │       select_table / select_multiplier   │
///     └──────────────────────────────────────────┘
/// ```
///
/// Answer editing is only reachable from `Idle` (see
/// [`crate::AnswerEntry`]); a factor selection is the only way back out
/// of `Answered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizPhase {
    #[default]
    Idle,
    Answered(Verdict),
}

impl QuizPhase {
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn verdict(self) -> Option<Verdict> {
        match self {
            Self::Idle => None,
            Self::Answered(verdict) => Some(verdict),
        }
    }
}

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    TableGrid,
    MultiplierGrid,
    Answer,
}

impl Focus {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::TableGrid => Self::MultiplierGrid,
            Self::MultiplierGrid => Self::Answer,
            Self::Answer => Self::TableGrid,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::TableGrid => Self::Answer,
            Self::MultiplierGrid => Self::TableGrid,
            Self::Answer => Self::MultiplierGrid,
        }
    }
}

/// Columns per factor grid; twelve factors render as a 4x3 block.
pub const GRID_COLS: u8 = 4;

/// Highlight position within a factor grid.
///
/// Holds a zero-based index over [`Factor::all`] in row-major order.
/// Movement saturates at the grid edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridCursor(u8);

impl GridCursor {
    const LAST: u8 = Factor::MAX - Factor::MIN;

    /// Cursor positioned on `factor`.
    #[must_use]
    pub fn at(factor: Factor) -> Self {
        Self(factor.get() - Factor::MIN)
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// The factor under the cursor.
    #[must_use]
    pub fn factor(self) -> Factor {
        Factor::new(self.0 + Factor::MIN).expect("cursor index stays within the factor range")
    }

    pub fn move_left(&mut self) {
        if self.0 % GRID_COLS > 0 {
            self.0 -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.0 % GRID_COLS < GRID_COLS - 1 && self.0 < Self::LAST {
            self.0 += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.0 = self.0.saturating_sub(GRID_COLS);
    }

    pub fn move_down(&mut self) {
        if self.0 + GRID_COLS <= Self::LAST {
            self.0 += GRID_COLS;
        }
    }
}

#[cfg(test)]
mod tests {
    use darb_types::Factor;

    use super::{Focus, GridCursor, QuizPhase, Verdict};

    #[test]
    fn verdict_compares_guess_to_product() {
        assert!(Verdict::of_guess(35, 35).is_correct());
        assert!(!Verdict::of_guess(12, 35).is_correct());
    }

    #[test]
    fn phase_exposes_verdict_only_when_answered() {
        assert_eq!(QuizPhase::Idle.verdict(), None);
        assert_eq!(
            QuizPhase::Answered(Verdict::Correct).verdict(),
            Some(Verdict::Correct)
        );
    }

    #[test]
    fn focus_cycles_through_all_panes() {
        let start = Focus::TableGrid;
        assert_eq!(start.next().next().next(), start);
        assert_eq!(start.prev().prev().prev(), start);
        assert_eq!(start.next().prev(), start);
    }

    #[test]
    fn cursor_maps_to_factor_and_back() {
        for factor in Factor::all() {
            assert_eq!(GridCursor::at(factor).factor(), factor);
        }
    }

    #[test]
    fn cursor_saturates_at_grid_edges() {
        let mut cursor = GridCursor::at(Factor::new(1).unwrap());
        cursor.move_left();
        cursor.move_up();
        assert_eq!(cursor.factor().get(), 1);

        let mut cursor = GridCursor::at(Factor::new(12).unwrap());
        cursor.move_right();
        cursor.move_down();
        assert_eq!(cursor.factor().get(), 12);
    }

    #[test]
    fn cursor_moves_by_row_and_column() {
        // 4x3 grid: 1 2 3 4 / 5 6 7 8 / 9 10 11 12
        let mut cursor = GridCursor::at(Factor::new(1).unwrap());
        cursor.move_right();
        assert_eq!(cursor.factor().get(), 2);
        cursor.move_down();
        assert_eq!(cursor.factor().get(), 6);
        cursor.move_left();
        assert_eq!(cursor.factor().get(), 5);
        cursor.move_down();
        assert_eq!(cursor.factor().get(), 9);
    }

    #[test]
    fn cursor_does_not_wrap_rows() {
        let mut cursor = GridCursor::at(Factor::new(4).unwrap());
        cursor.move_right();
        assert_eq!(cursor.factor().get(), 4);
        let mut cursor = GridCursor::at(Factor::new(5).unwrap());
        cursor.move_left();
        assert_eq!(cursor.factor().get(), 5);
    }
}
