//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::CredentialError;

/// Errors emitted by `SessionController`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ControllerError {
    #[error("no user is signed in")]
    NotAuthenticated,
    #[error(transparent)]
    Validation(#[from] CredentialError),
}
