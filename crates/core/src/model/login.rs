use thiserror::Error;

use crate::model::role::Role;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Login format failures. Recoverable; the renderer shows the message and
/// lets the user retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CredentialError {
    #[error("identifier must contain '@'")]
    IdentifierMissingAt,

    #[error("password must be at least {MIN_PASSWORD_LEN} characters, got {len}")]
    PasswordTooShort { len: usize },

    #[error("password must contain at least one uppercase letter")]
    PasswordNeedsUppercase,
}

//
// ─── CREDENTIALS ───────────────────────────────────────────────────────────────
//

/// Raw login form input, validated into an [`AuthenticatedUser`].
///
/// This is a format gate, not authentication: no credential store is
/// consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }

    /// Apply the login format gate and resolve the user's role.
    ///
    /// The uppercase rule compares the password against its lowercased form,
    /// so passwords without any cased character (digits only, for example)
    /// are rejected.
    ///
    /// # Errors
    ///
    /// Returns the first failing `CredentialError`; nothing is mutated on
    /// failure.
    pub fn validate(self) -> Result<AuthenticatedUser, CredentialError> {
        if !self.identifier.contains('@') {
            return Err(CredentialError::IdentifierMissingAt);
        }
        let len = self.password.chars().count();
        if len < MIN_PASSWORD_LEN {
            return Err(CredentialError::PasswordTooShort { len });
        }
        if self.password == self.password.to_lowercase() {
            return Err(CredentialError::PasswordNeedsUppercase);
        }

        let role = Role::resolve(&self.identifier);
        Ok(AuthenticatedUser {
            identifier: self.identifier,
            role,
        })
    }
}

/// A signed-in identity, held for the lifetime of the application session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    identifier: String,
    role: Role,
}

impl AuthenticatedUser {
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
