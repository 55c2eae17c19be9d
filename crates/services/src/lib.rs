#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use quiz_core::Clock;

pub use error::ControllerError;
pub use quiz::{
    DashboardView, QuestionBank, QuestionView, QuizSession, QuizView, RoleDescription,
    ScoreTracker, SessionController, SessionProgress, ViewState,
};
