//! Shared helpers for the integration suite.

use darb_engine::{App, DarbConfig, QuizConfig};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Position;

/// An app seeded with the default configuration.
pub fn test_app() -> App {
    App::new(None)
}

/// An app seeded with a specific `[quiz]` section.
pub fn app_with_quiz(quiz: QuizConfig) -> App {
    let config = DarbConfig {
        app: None,
        quiz: Some(quiz),
    };
    App::new(Some(&config))
}

/// Render one frame on a test backend and flatten it to text, one line
/// per terminal row.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|frame| darb_tui::draw(frame, app))
        .expect("frame renders");

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[Position::new(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
