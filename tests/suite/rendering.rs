//! Full-frame render assertions on a test backend.

use darb_engine::{AnswerEntry, QuizConfig};

use crate::common::{app_with_quiz, render_to_string, test_app};

const WIDTH: u16 = 72;
const HEIGHT: u16 = 18;

#[test]
fn initial_frame_shows_grids_question_and_score() {
    let app = test_app();
    let frame = render_to_string(&app, WIDTH, HEIGHT);

    assert!(frame.contains("Table"), "missing table grid:\n{frame}");
    assert!(frame.contains("Multiplier"), "missing multiplier grid:\n{frame}");
    assert!(frame.contains("٧ × ٥"), "missing question banner:\n{frame}");
    assert!(frame.contains("Score ٣٥"), "missing score:\n{frame}");
    // Grid labels run all the way to twelve.
    assert!(frame.contains("١٢"), "missing grid label:\n{frame}");
    assert!(frame.contains("Your answer"), "missing answer field:\n{frame}");
    assert!(
        frame.contains("Correct answer"),
        "missing correct-answer field:\n{frame}"
    );
}

#[test]
fn typed_answer_echoes_in_eastern_digits() {
    // "١٢" already appears as a label in each grid; the echo adds one more.
    let mut app = test_app();
    let before = render_to_string(&app, WIDTH, HEIGHT).matches("١٢").count();

    app.answer_entry().expect("round open").insert_str("12");
    let after = render_to_string(&app, WIDTH, HEIGHT).matches("١٢").count();

    assert!(after > before, "answer not echoed in eastern digits");
}

#[test]
fn incorrect_feedback_includes_the_product() {
    let mut app = test_app();
    app.answer_entry().expect("round open").insert_str("12");
    let _ = app.answer_entry().and_then(AnswerEntry::submit);

    let frame = render_to_string(&app, WIDTH, HEIGHT);
    assert!(frame.contains("Not quite"), "missing feedback:\n{frame}");
    assert!(
        frame.contains("The correct answer is ٣٥."),
        "feedback lacks the product:\n{frame}"
    );
}

#[test]
fn correct_feedback_and_updated_score_render() {
    let mut app = test_app();
    app.answer_entry().expect("round open").insert_str("٣٥");
    let _ = app.answer_entry().and_then(AnswerEntry::submit);

    let frame = render_to_string(&app, WIDTH, HEIGHT);
    assert!(frame.contains("Well done"), "missing feedback:\n{frame}");
    assert!(frame.contains("Score ٣٦"), "score did not advance:\n{frame}");
}

#[test]
fn correct_answer_field_is_empty_until_submission() {
    let app = test_app();
    let before = render_to_string(&app, WIDTH, HEIGHT);
    // The product only appears in the question row before submission;
    // afterwards it also fills the correct-answer field.
    let occurrences_before = before.matches("٣٥").count();

    let mut app = test_app();
    app.answer_entry().expect("round open").insert_str("1");
    let _ = app.answer_entry().and_then(AnswerEntry::submit);
    let after = render_to_string(&app, WIDTH, HEIGHT);
    let occurrences_after = after.matches("٣٥").count();

    assert!(
        occurrences_after > occurrences_before,
        "correct-answer field not populated:\nbefore:\n{before}\nafter:\n{after}"
    );
}

#[test]
fn ascii_glyph_mode_renders_ascii_times_sign() {
    let config = darb_engine::DarbConfig {
        app: Some(darb_engine::AppConfig {
            ascii_only: true,
            high_contrast: false,
        }),
        quiz: None,
    };
    let app = darb_engine::App::new(Some(&config));

    let frame = render_to_string(&app, WIDTH, HEIGHT);
    assert!(frame.contains("٧ x ٥"), "missing ascii question:\n{frame}");
}

#[test]
fn status_warning_replaces_key_hints() {
    let mut app = test_app();
    let hints = render_to_string(&app, WIDTH, HEIGHT);
    assert!(hints.contains("quit"), "missing key hints:\n{hints}");

    app.set_status_warning("Config could not be loaded; using defaults");
    let warned = render_to_string(&app, WIDTH, HEIGHT);
    assert!(
        warned.contains("Config could not be loaded"),
        "missing status warning:\n{warned}"
    );
}

#[test]
fn grouped_numerals_render_with_separator() {
    let app = app_with_quiz(QuizConfig {
        starting_score: Some(1000),
        digit_grouping: true,
        ..Default::default()
    });

    let frame = render_to_string(&app, WIDTH, HEIGHT);
    assert!(frame.contains("Score ١٬٠٠٠"), "missing grouped score:\n{frame}");
}
