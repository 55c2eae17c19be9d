use quiz_core::Clock;
use quiz_core::model::{AuthenticatedUser, Credentials, Question};

use crate::error::ControllerError;
use super::bank::QuestionBank;
use super::score::ScoreTracker;
use super::session::QuizSession;
use super::view::{DashboardView, QuestionView, QuizView, RoleDescription};

//
// ─── VIEW STATE ────────────────────────────────────────────────────────────────
//

/// The screen the presentation layer should be showing.
///
/// There is no terminal state: once signed in, the application loops
/// between `Dashboard` and `Quiz` indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Login,
    Dashboard,
    Quiz,
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// The view-state machine wiring user intents to the quiz workflow.
///
/// Owns the session and score state exclusively (single-writer: the
/// presentation layer delivers one intent at a time and each intent runs to
/// completion). Every intent returns the data the renderer needs for the
/// next screen; illegal intents are either guarded with an error
/// (`request_quiz` without a user) or degrade to a no-op (`submit_answer`
/// with no question in flight).
#[derive(Debug)]
pub struct SessionController {
    clock: Clock,
    bank: QuestionBank,
    state: ViewState,
    user: Option<AuthenticatedUser>,
    session: Option<QuizSession>,
    score: ScoreTracker,
    current: Option<Question>,
    last_score: Option<usize>,
}

impl SessionController {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            clock: Clock::default_clock(),
            bank,
            state: ViewState::Login,
            user: None,
            session: None,
            score: ScoreTracker::new(),
            current: None,
            last_score: None,
        }
    }

    /// Replace the time source, mainly for deterministic tests.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Role name and welcome message for the signed-in user, if any.
    #[must_use]
    pub fn current_role(&self) -> Option<RoleDescription> {
        self.user.as_ref().map(|user| RoleDescription {
            role_name: user.role().name().to_string(),
            welcome_message: user.role().welcome_message().to_string(),
        })
    }

    /// Dashboard contents for the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `ControllerError::NotAuthenticated` before a successful login.
    pub fn dashboard(&self) -> Result<DashboardView, ControllerError> {
        let role = self
            .current_role()
            .ok_or(ControllerError::NotAuthenticated)?;
        Ok(DashboardView {
            role,
            last_score: self.last_score,
        })
    }

    /// Handle a login attempt.
    ///
    /// On success the user is stored, the role resolved, and the view moves
    /// to the dashboard. On failure nothing changes and the view stays on
    /// the login screen.
    ///
    /// # Errors
    ///
    /// Returns `ControllerError::Validation` when the identifier or password
    /// fails the format gate.
    pub fn submit_login(
        &mut self,
        identifier: &str,
        password: &str,
    ) -> Result<&AuthenticatedUser, ControllerError> {
        let user = Credentials::new(identifier, password).validate()?;
        self.state = ViewState::Dashboard;
        Ok(self.user.insert(user))
    }

    /// Start a fresh quiz session.
    ///
    /// Replaces any prior session and zeroes the score in the same step, so
    /// no intermediate mix of old score and new questions is ever visible.
    /// An empty bank produces an immediately finished view and the state
    /// falls straight back to the dashboard.
    ///
    /// # Errors
    ///
    /// Returns `ControllerError::NotAuthenticated` before a successful login.
    pub fn request_quiz(&mut self) -> Result<QuizView, ControllerError> {
        if self.user.is_none() {
            return Err(ControllerError::NotAuthenticated);
        }

        let mut session = QuizSession::new(self.bank.build_session(), self.clock.now());
        self.score.reset();
        self.current = session.next_question();
        self.session = Some(session);
        Ok(self.advance_view())
    }

    /// Score the answer to the question in flight and dispatch the next one.
    ///
    /// `None` means no option was selected; it scores nothing and is not an
    /// error. With no question in flight this is a no-op that reports the
    /// finished view with the current score.
    pub fn submit_answer(&mut self, selected: Option<usize>) -> QuizView {
        let Some(question) = self.current.take() else {
            return QuizView::Finished {
                final_score: self.score.score(),
            };
        };

        self.score.record_if_correct(selected, &question);
        if let Some(session) = self.session.as_mut() {
            self.current = session.next_question();
        }
        self.advance_view()
    }

    /// Derive the quiz view from the cursor state and apply the matching
    /// state transition.
    fn advance_view(&mut self) -> QuizView {
        let view = match (&self.current, &self.session) {
            (Some(question), Some(session)) => QuizView::Question(QuestionView {
                progress_label: format!(
                    "Question {}/{}",
                    session.dispatched(),
                    session.total()
                ),
                question_text: question.text().to_string(),
                options: question.options().to_vec(),
            }),
            _ => QuizView::Finished {
                final_score: self.score.score(),
            },
        };

        match &view {
            QuizView::Question(_) => self.state = ViewState::Quiz,
            QuizView::Finished { final_score } => {
                if let Some(session) = self.session.as_mut() {
                    session.mark_complete(self.clock.now());
                }
                self.last_score = Some(*final_score);
                self.state = ViewState::Dashboard;
            }
        }
        view
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
