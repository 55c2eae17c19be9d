mod bank;
mod controller;
mod progress;
mod score;
mod session;
mod view;

// Public API of the quiz subsystem.
pub use crate::error::ControllerError;
pub use bank::QuestionBank;
pub use controller::{SessionController, ViewState};
pub use progress::SessionProgress;
pub use score::ScoreTracker;
pub use session::QuizSession;
pub use view::{DashboardView, QuestionView, QuizView, RoleDescription};
