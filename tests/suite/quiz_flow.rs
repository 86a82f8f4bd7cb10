//! End-to-end quiz state machine scenarios.

use darb_engine::{Factor, QuizConfig, QuizPhase, Verdict};
use darb_types::to_eastern;

use crate::common::{app_with_quiz, test_app};

fn submit(app: &mut darb_engine::App) -> Option<Verdict> {
    app.answer_entry().and_then(darb_engine::AnswerEntry::submit)
}

#[test]
fn seeded_round_answers_correctly_in_eastern_digits() {
    let mut app = test_app();
    assert_eq!(app.table().get(), 7);
    assert_eq!(app.multiplier().get(), 5);
    assert_eq!(app.score().get(), 35);

    app.answer_entry().expect("round open").insert_str("٣٥");
    assert_eq!(app.answer_text(), "35");

    assert_eq!(submit(&mut app), Some(Verdict::Correct));
    assert_eq!(app.phase(), QuizPhase::Answered(Verdict::Correct));
    assert_eq!(app.score().get(), 36);
    assert_eq!(to_eastern(u64::from(app.product())), "٣٥");
}

#[test]
fn wrong_answer_keeps_score_and_exposes_product() {
    let mut app = test_app();
    app.answer_entry().expect("round open").insert_str("12");

    assert_eq!(submit(&mut app), Some(Verdict::Incorrect));
    assert_eq!(app.score().get(), 35);
    assert_eq!(to_eastern(u64::from(app.product())), "٣٥");
}

#[test]
fn score_accumulates_across_rounds() {
    let mut app = app_with_quiz(QuizConfig {
        starting_score: Some(0),
        ..Default::default()
    });

    for (a, b) in [(2u8, 3u8), (4, 4), (12, 12)] {
        app.select_table(Factor::new(a).expect("in range"));
        app.select_multiplier(Factor::new(b).expect("in range"));
        let product = u32::from(a) * u32::from(b);
        app.answer_entry()
            .expect("round open")
            .insert_str(&product.to_string());
        assert_eq!(submit(&mut app), Some(Verdict::Correct));
    }
    assert_eq!(app.score().get(), 3);
}

#[test]
fn selecting_a_factor_reopens_a_settled_round() {
    let mut app = test_app();
    app.answer_entry().expect("round open").insert_str("99");
    let _ = submit(&mut app);
    assert!(!app.phase().is_idle());
    assert!(app.answer_entry().is_none());

    app.select_table(Factor::new(9).expect("in range"));
    assert!(app.phase().is_idle());
    assert_eq!(app.answer_text(), "");
    assert_eq!(app.product(), 45);
    assert!(app.answer_entry().is_some());
}

#[test]
fn empty_submission_never_settles_the_round() {
    let mut app = test_app();
    assert_eq!(submit(&mut app), None);
    assert!(app.phase().is_idle());
    assert_eq!(app.score().get(), 35);

    // A rejected submission leaves the round answerable.
    app.answer_entry().expect("round open").insert_str("٣٥");
    assert_eq!(submit(&mut app), Some(Verdict::Correct));
}

#[test]
fn garbage_input_reduces_to_digits_before_submission() {
    let mut app = test_app();
    app.answer_entry()
        .expect("round open")
        .insert_str("The answer is ٣x5!");
    assert_eq!(app.answer_text(), "35");
    assert_eq!(submit(&mut app), Some(Verdict::Correct));
}
