use chrono::{DateTime, Utc};

use quiz_core::model::Question;

use super::progress::SessionProgress;

/// One run through an ordered question sequence.
///
/// The sequence is fixed at construction; only the cursor moves. Once the
/// cursor reaches the end the session is terminal and stays terminal.
/// Starting a new quiz replaces the whole session rather than resetting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    position: usize,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Create a session over the given sequence with the cursor at 0.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic. An empty sequence is allowed and is immediately
    /// terminal.
    #[must_use]
    pub fn new(questions: Vec<Question>, started_at: DateTime<Utc>) -> Self {
        Self {
            questions,
            position: 0,
            started_at,
            completed_at: None,
        }
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Count of questions already dispatched (the 1-based display position
    /// of the question in flight).
    #[must_use]
    pub fn dispatched(&self) -> usize {
        self.position
    }

    /// Number of questions not yet dispatched.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.position)
    }

    /// Whether every question has been dispatched.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.position >= self.questions.len()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total(),
            dispatched: self.dispatched(),
            remaining: self.remaining(),
            is_terminal: self.is_terminal(),
        }
    }

    /// Dispatch the next question and advance the cursor.
    ///
    /// Terminal sessions keep returning `None` and leave the cursor parked
    /// at the end; calling this repeatedly is safe.
    pub fn next_question(&mut self) -> Option<Question> {
        let question = self.questions.get(self.position)?.clone();
        self.position += 1;
        Some(question)
    }

    /// Stamp the completion time. Idempotent: the first stamp wins.
    pub fn mark_complete(&mut self, completed_at: DateTime<Utc>) {
        if self.completed_at.is_none() {
            self.completed_at = Some(completed_at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quiz_core::model::QuestionDraft;
    use quiz_core::time::fixed_now;

    fn build_question(id: usize) -> Question {
        QuestionDraft::new(format!("Q{id}"), ["a", "b"], 0)
            .validate()
            .unwrap()
    }

    #[test]
    fn dispatches_in_order_until_terminal() {
        let mut session =
            QuizSession::new(vec![build_question(1), build_question(2)], fixed_now());

        assert_eq!(session.dispatched(), 0);
        assert_eq!(session.next_question().unwrap().text(), "Q1");
        assert_eq!(session.dispatched(), 1);
        assert_eq!(session.next_question().unwrap().text(), "Q2");
        assert_eq!(session.dispatched(), 2);
        assert!(session.is_terminal());
    }

    #[test]
    fn terminal_session_keeps_returning_none() {
        let mut session = QuizSession::new(vec![build_question(1)], fixed_now());
        session.next_question().unwrap();

        for _ in 0..3 {
            assert!(session.next_question().is_none());
            assert_eq!(session.dispatched(), 1);
        }
    }

    #[test]
    fn empty_session_is_immediately_terminal() {
        let mut session = QuizSession::new(Vec::new(), fixed_now());
        assert!(session.is_terminal());
        assert!(session.next_question().is_none());
        assert_eq!(session.dispatched(), 0);
    }

    #[test]
    fn progress_tracks_the_cursor() {
        let mut session =
            QuizSession::new(vec![build_question(1), build_question(2)], fixed_now());
        session.next_question();

        let progress = session.progress();
        assert_eq!(progress.total, 2);
        assert_eq!(progress.dispatched, 1);
        assert_eq!(progress.remaining, 1);
        assert!(!progress.is_terminal);
    }

    #[test]
    fn completion_stamp_is_idempotent() {
        let mut session = QuizSession::new(vec![build_question(1)], fixed_now());
        let first = fixed_now() + Duration::seconds(5);
        session.mark_complete(first);
        session.mark_complete(first + Duration::seconds(5));
        assert_eq!(session.completed_at(), Some(first));
    }
}
