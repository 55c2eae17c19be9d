use quiz_core::model::Question;

/// Running count of correct answers for the active session.
///
/// Reset at the start of every session; incremented at most once per
/// question, so the score never exceeds the session length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    correct: usize,
}

impl ScoreTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero the score for a fresh session.
    pub fn reset(&mut self) {
        self.correct = 0;
    }

    /// Record a point when the selection matches the question's answer.
    ///
    /// `None` means no option was chosen; it never matches and never errors,
    /// as does an out-of-range index. Returns whether the answer scored.
    pub fn record_if_correct(&mut self, selected: Option<usize>, question: &Question) -> bool {
        let correct = selected.is_some_and(|index| question.is_correct(index));
        if correct {
            self.correct += 1;
        }
        correct
    }

    /// Accumulated number of correct answers.
    #[must_use]
    pub fn score(&self) -> usize {
        self.correct
    }
}
