use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of answer options on a question.
pub const MIN_OPTIONS: usize = 2;
/// Maximum number of answer options on a question.
pub const MAX_OPTIONS: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("a question needs at least {MIN_OPTIONS} options, got {len}")]
    TooFewOptions { len: usize },

    #[error("a question allows at most {MAX_OPTIONS} options, got {len}")]
    TooManyOptions { len: usize },

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    #[error("correct index {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question as supplied by a bank author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl QuestionDraft {
    pub fn new<T, O>(text: T, options: O, correct_index: usize) -> Self
    where
        T: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_index,
        }
    }

    /// Validate the draft into an immutable [`Question`].
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the text or an option is blank, the
    /// option count falls outside `MIN_OPTIONS..=MAX_OPTIONS`, or
    /// `correct_index` does not point at an option.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }

        let len = self.options.len();
        if len < MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions { len });
        }
        if len > MAX_OPTIONS {
            return Err(QuestionError::TooManyOptions { len });
        }
        for (index, option) in self.options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(QuestionError::EmptyOption { index });
            }
        }
        if self.correct_index >= len {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: self.correct_index,
                len,
            });
        }

        Ok(Question {
            text: self.text,
            options: self.options,
            correct_index: self.correct_index,
        })
    }
}

/// A validated multiple-choice question.
///
/// Invariant: `correct_index` points at one of `options`, and the option
/// count stays within `MIN_OPTIONS..=MAX_OPTIONS`. Immutable after
/// construction; only `QuestionDraft::validate` builds one, which is also
/// why this type serializes but never deserializes directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_index: usize,
}

impl Question {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Whether the given option index is the correct answer.
    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_validates_into_question() {
        let question = QuestionDraft::new("2 + 2 = ?", ["3", "4"], 1)
            .validate()
            .unwrap();

        assert_eq!(question.text(), "2 + 2 = ?");
        assert_eq!(question.options().len(), 2);
        assert!(question.is_correct(1));
        assert!(!question.is_correct(0));
    }

    #[test]
    fn blank_text_is_rejected() {
        let err = QuestionDraft::new("   ", ["a", "b"], 0).validate().unwrap_err();
        assert_eq!(err, QuestionError::EmptyText);
    }

    #[test]
    fn option_count_is_bounded() {
        let err = QuestionDraft::new("q", ["only"], 0).validate().unwrap_err();
        assert_eq!(err, QuestionError::TooFewOptions { len: 1 });

        let err = QuestionDraft::new("q", ["a", "b", "c", "d", "e"], 0)
            .validate()
            .unwrap_err();
        assert_eq!(err, QuestionError::TooManyOptions { len: 5 });
    }

    #[test]
    fn blank_option_is_rejected() {
        let err = QuestionDraft::new("q", ["a", " "], 0).validate().unwrap_err();
        assert_eq!(err, QuestionError::EmptyOption { index: 1 });
    }

    #[test]
    fn correct_index_must_point_at_an_option() {
        let err = QuestionDraft::new("q", ["a", "b"], 2).validate().unwrap_err();
        assert_eq!(err, QuestionError::CorrectIndexOutOfRange { index: 2, len: 2 });
    }
}
