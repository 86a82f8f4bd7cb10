//! TUI rendering for Darb using ratatui.

mod input;
mod theme;

pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use darb_engine::{App, Focus, GRID_COLS, QuizPhase, Verdict};
use darb_types::{EASTERN_ARABIC, Factor, to_eastern, to_eastern_grouped};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Title + score
            Constraint::Length(5), // Factor grids
            Constraint::Length(3), // Question banner
            Constraint::Length(3), // Answer form
            Constraint::Length(1), // Feedback
            Constraint::Min(0),    // Filler
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title(frame, app, chunks[0], &palette);
    draw_grids(frame, app, chunks[1], &palette);
    draw_question(frame, app, chunks[2], &palette, &glyphs);
    draw_answer_form(frame, app, chunks[3], &palette);
    draw_feedback(frame, app, chunks[4], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[6], &palette);
}

/// Render a number in the configured numeral style.
fn render_number(app: &App, n: u64) -> String {
    if app.digit_grouping() {
        to_eastern_grouped(n)
    } else {
        to_eastern(n)
    }
}

fn draw_title(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let score = render_number(app, u64::from(app.score().get()));
    let right = format!("Score {score}");
    let left = "Darb · multiplication drills";

    let pad = (area.width as usize)
        .saturating_sub(left.width())
        .saturating_sub(right.width());
    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(palette.text_primary)),
        Span::raw(" ".repeat(pad)),
        Span::styled(right, styles::score(palette)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_grids(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_grid(frame, app, Focus::TableGrid, "Table", halves[0], palette);
    draw_grid(
        frame,
        app,
        Focus::MultiplierGrid,
        "Multiplier",
        halves[1],
        palette,
    );
}

fn draw_grid(frame: &mut Frame, app: &App, pane: Focus, title: &str, area: Rect, palette: &Palette) {
    let focused = app.focus() == pane;
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::pane_border(palette, focused))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let selected = app.selected_factor(pane);
    let cursor = app.grid_cursor(pane);
    let cell_width = (inner.width / u16::from(GRID_COLS)).max(4) as usize;

    let mut lines = Vec::new();
    let mut row = Vec::new();
    for factor in Factor::all() {
        let index = factor.get() - Factor::MIN;
        let style = if selected == Some(factor) {
            styles::grid_selected(palette)
        } else if focused && cursor.is_some_and(|c| c.index() == index) {
            styles::grid_cursor(palette)
        } else {
            styles::grid_cell(palette)
        };
        row.push(Span::styled(cell_text(factor, cell_width), style));

        if (index + 1) % GRID_COLS == 0 {
            lines.push(Line::from(std::mem::take(&mut row)));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// One grid cell: the factor's Eastern numeral centered in `width` columns.
fn cell_text(factor: Factor, width: usize) -> String {
    let label = to_eastern(u64::from(factor.get()));
    let pad = width.saturating_sub(label.width());
    let left = pad / 2;
    format!("{}{label}{}", " ".repeat(left), " ".repeat(pad - left))
}

/// The question banner text, e.g. "٧ × ٥".
fn question_text(app: &App, glyphs: &Glyphs) -> String {
    format!(
        "{} {} {}",
        render_number(app, u64::from(app.table().get())),
        glyphs.times,
        render_number(app, u64::from(app.multiplier().get())),
    )
}

fn draw_question(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let banner = Paragraph::new(question_text(app, glyphs))
        .style(styles::question(palette))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.bg_border)),
        );
    frame.render_widget(banner, area);
}

fn draw_answer_form(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_answer_input(frame, app, halves[0], palette);
    draw_correct_answer(frame, app, halves[1], palette);
}

fn draw_answer_input(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let focused = app.focus() == Focus::Answer;
    let open = app.phase().is_idle();

    // Input goes visually disabled once the round is settled.
    let border = if open {
        styles::pane_border(palette, focused)
    } else {
        Style::default().fg(palette.text_disabled)
    };
    let content_style = if open {
        Style::default().fg(palette.text_primary)
    } else {
        Style::default().fg(palette.text_disabled)
    };

    let block = Block::default()
        .title("Your answer")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);

    let echo = EASTERN_ARABIC.render_digits(app.answer_text());
    frame.render_widget(Paragraph::new(echo).style(content_style).block(block), area);

    if open && focused {
        let x = inner.x + app.answer_cursor() as u16;
        frame.set_cursor_position(Position::new(x.min(inner.right().saturating_sub(1)), inner.y));
    }
}

fn draw_correct_answer(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    // Populated only after submission; always non-interactive.
    let content = match app.phase() {
        QuizPhase::Idle => String::new(),
        QuizPhase::Answered(_) => render_number(app, u64::from(app.product())),
    };

    let field = Paragraph::new(content)
        .style(Style::default().fg(palette.text_secondary))
        .block(
            Block::default()
                .title("Correct answer")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.text_disabled))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(field, area);
}

fn draw_feedback(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let (text, style) = match app.phase() {
        QuizPhase::Idle => (
            "Pick two numbers, type your answer, press Enter.".to_string(),
            styles::key_hint(palette),
        ),
        QuizPhase::Answered(Verdict::Correct) => (
            format!("{} Well done! That's correct.", glyphs.correct),
            styles::verdict_correct(palette),
        ),
        QuizPhase::Answered(Verdict::Incorrect) => (
            format!(
                "{} Not quite. The correct answer is {}.",
                glyphs.incorrect,
                render_number(app, u64::from(app.product())),
            ),
            styles::verdict_incorrect(palette),
        ),
    };

    let feedback = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(feedback, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    if let Some(status) = app.status() {
        let warning = Paragraph::new(status).style(Style::default().fg(palette.warning));
        frame.render_widget(warning, area);
        return;
    }

    let hint = |key: &'static str, action: &'static str| {
        vec![
            Span::styled(key, styles::key_highlight(palette)),
            Span::styled(action, styles::key_hint(palette)),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(hint("Tab", " pane  "));
    spans.extend(hint("←↑↓→", " move  "));
    spans.extend(hint("Enter", " select/submit  "));
    spans.extend(hint("q", " quit"));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use darb_engine::{App, Factor};
    use darb_types::UiOptions;

    use super::{cell_text, glyphs, question_text, render_number};

    #[test]
    fn question_uses_eastern_numerals() {
        let app = App::new(None);
        let g = glyphs(UiOptions::default());
        assert_eq!(question_text(&app, &g), "٧ × ٥");
    }

    #[test]
    fn question_uses_ascii_times_when_configured() {
        let app = App::new(None);
        let g = glyphs(UiOptions {
            ascii_only: true,
            high_contrast: false,
        });
        assert_eq!(question_text(&app, &g), "٧ x ٥");
    }

    #[test]
    fn cell_text_centers_label() {
        let twelve = Factor::new(12).expect("in range");
        let cell = cell_text(twelve, 6);
        assert_eq!(cell, "  ١٢  ");
    }

    #[test]
    fn render_number_honors_grouping_config() {
        let app = App::new(None);
        assert_eq!(render_number(&app, 1000), "١٠٠٠");

        let config = darb_engine::DarbConfig {
            app: None,
            quiz: Some(darb_engine::QuizConfig {
                digit_grouping: true,
                ..Default::default()
            }),
        };
        let grouped = App::new(Some(&config));
        assert_eq!(render_number(&grouped, 1000), "١٬٠٠٠");
    }
}
