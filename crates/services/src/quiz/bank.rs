use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::model::{Question, QuestionDraft};

/// In-memory question bank supplying the questions for quiz sessions.
///
/// Banks are built from validated questions; a host can deserialize
/// `QuestionDraft`s and validate them into a custom bank.
///
/// The bank itself never changes during a run; each session gets its own
/// independently shuffled copy of the questions.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
    session_limit: Option<usize>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            session_limit: None,
        }
    }

    /// Cap the number of questions handed to a session.
    ///
    /// Without a limit a session runs through the whole bank.
    #[must_use]
    pub fn with_session_limit(mut self, limit: usize) -> Self {
        self.session_limit = Some(limit);
        self
    }

    /// The built-in design-pattern question set.
    ///
    /// # Panics
    ///
    /// Never in practice: the literal set is statically valid.
    #[must_use]
    pub fn builtin() -> Self {
        let drafts = [
            QuestionDraft::new(
                "Which pattern is used for a single instance?",
                ["Factory", "Singleton", "Proxy", "Observer"],
                1,
            ),
            QuestionDraft::new(
                "Factory pattern is a creational pattern.",
                ["True", "False"],
                0,
            ),
            QuestionDraft::new(
                "Who manages quiz progress in this app?",
                ["The user", "The session", "The database", "The window"],
                1,
            ),
            QuestionDraft::new(
                "Which pattern lets subscribers react to state changes?",
                ["Observer", "Builder", "Adapter", "Singleton"],
                0,
            ),
            QuestionDraft::new(
                "Which pattern assembles complex objects step by step?",
                ["Prototype", "Builder", "Flyweight"],
                1,
            ),
            QuestionDraft::new(
                "An adapter converts one interface into another.",
                ["True", "False"],
                0,
            ),
            QuestionDraft::new(
                "Which pattern provides a stand-in that controls access to another object?",
                ["Proxy", "Facade", "Bridge"],
                0,
            ),
            QuestionDraft::new(
                "A facade exposes a simplified interface over a subsystem.",
                ["True", "False"],
                0,
            ),
            QuestionDraft::new(
                "Which pattern encapsulates a request as an object?",
                ["Strategy", "Command", "State", "Visitor"],
                1,
            ),
            QuestionDraft::new(
                "Which pattern swaps an algorithm at runtime?",
                ["Strategy", "Template Method", "Mediator"],
                0,
            ),
        ];

        let questions = drafts
            .into_iter()
            .map(|draft| draft.validate().expect("built-in questions are valid"))
            .collect();
        Self::new(questions)
    }

    /// Number of questions held by the bank.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Assemble the question sequence for a new session.
    ///
    /// Returns the bank's questions in a uniformly random order, truncated
    /// to the session limit when one is set. Only the order of questions
    /// changes; each question's option list stays untouched. An empty bank
    /// yields an empty (immediately terminal) sequence.
    #[must_use]
    pub fn build_session(&self) -> Vec<Question> {
        let mut questions = self.questions.clone();
        let mut rng = rng();
        questions.as_mut_slice().shuffle(&mut rng);
        if let Some(limit) = self.session_limit {
            questions.truncate(limit);
        }
        questions
    }
}
