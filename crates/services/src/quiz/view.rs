//! Presentation-facing view models returned by the controller.
//!
//! These carry everything a renderer needs and nothing else: no layout,
//! no colors, no widget assumptions. Formatting beyond the progress label
//! (which is part of the contract) stays in the presentation layer.

/// The question currently awaiting an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// Display progress, e.g. `"Question 2/10"`.
    pub progress_label: String,
    pub question_text: String,
    pub options: Vec<String>,
}

/// What the quiz screen should show after a user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizView {
    /// A question to render; the session continues.
    Question(QuestionView),
    /// The session is over; announce the final score and return to the
    /// dashboard.
    Finished { final_score: usize },
}

impl QuizView {
    /// Whether this view ends the quiz screen.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, QuizView::Finished { .. })
    }
}

/// Role name and welcome message for the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleDescription {
    pub role_name: String,
    pub welcome_message: String,
}

/// Dashboard contents for the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub role: RoleDescription,
    /// Final score of the most recently completed session, if any.
    pub last_score: Option<usize>,
}
