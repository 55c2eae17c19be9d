mod login;
mod question;
mod role;

pub use login::{AuthenticatedUser, CredentialError, Credentials, MIN_PASSWORD_LEN};
pub use question::{MAX_OPTIONS, MIN_OPTIONS, Question, QuestionDraft, QuestionError};
pub use role::Role;
