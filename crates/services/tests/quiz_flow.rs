use quiz_core::model::{QuestionDraft, Role};
use quiz_core::time::fixed_clock;
use services::{QuestionBank, QuizView, SessionController, ViewState};

/// Three questions that all keep the correct answer at index 0, so the test
/// can answer deliberately no matter how the session was shuffled.
fn three_question_bank() -> QuestionBank {
    let questions = (1..=3)
        .map(|id| {
            QuestionDraft::new(format!("Q{id}"), ["right", "wrong", "also wrong"], 0)
                .validate()
                .unwrap()
        })
        .collect();
    QuestionBank::new(questions)
}

fn signed_in_controller() -> SessionController {
    let mut controller =
        SessionController::new(three_question_bank()).with_clock(fixed_clock());
    let user = controller.submit_login("admin@x.com", "Passw0rd").unwrap();
    assert_eq!(user.role(), Role::Admin);
    controller
}

fn progress_label(view: &QuizView) -> &str {
    match view {
        QuizView::Question(question) => &question.progress_label,
        QuizView::Finished { .. } => panic!("expected a question view"),
    }
}

#[test]
fn full_session_reports_progress_and_final_score() {
    let mut controller = signed_in_controller();

    let view = controller.request_quiz().unwrap();
    assert_eq!(progress_label(&view), "Question 1/3");

    // Correct, wrong, then no selection at all.
    let view = controller.submit_answer(Some(0));
    assert_eq!(progress_label(&view), "Question 2/3");

    let view = controller.submit_answer(Some(1));
    assert_eq!(progress_label(&view), "Question 3/3");

    let view = controller.submit_answer(None);
    assert_eq!(view, QuizView::Finished { final_score: 1 });
    assert_eq!(controller.state(), ViewState::Dashboard);

    let dashboard = controller.dashboard().unwrap();
    assert_eq!(dashboard.last_score, Some(1));
    assert_eq!(dashboard.role.role_name, "Admin");
}

#[test]
fn restarting_discards_the_previous_score() {
    let mut controller = signed_in_controller();

    controller.request_quiz().unwrap();
    for _ in 0..3 {
        controller.submit_answer(Some(0));
    }
    assert_eq!(controller.dashboard().unwrap().last_score, Some(3));

    // A second session starts from zero regardless of the first outcome.
    controller.request_quiz().unwrap();
    let mut last = None;
    for _ in 0..3 {
        last = Some(controller.submit_answer(None));
    }
    assert_eq!(last, Some(QuizView::Finished { final_score: 0 }));
    assert_eq!(controller.dashboard().unwrap().last_score, Some(0));
}

#[test]
fn views_carry_everything_a_renderer_needs() {
    let mut controller = signed_in_controller();

    let view = controller.request_quiz().unwrap();
    let QuizView::Question(question) = view else {
        panic!("expected a question view");
    };
    assert!(question.question_text.starts_with('Q'));
    assert_eq!(
        question.options,
        vec!["right".to_string(), "wrong".to_string(), "also wrong".to_string()]
    );
}
