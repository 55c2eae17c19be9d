use serde::{Deserialize, Serialize};

/// Permission and presentation category assigned to a signed-in identity.
///
/// A role is resolved once at login and never changes for the lifetime of
/// the application session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Student,
}

impl Role {
    /// Resolve a role from a login identifier.
    ///
    /// Identifiers containing `"admin"` (any case, anywhere in the string)
    /// resolve to `Admin`; everything else is a `Student`. Total over all
    /// strings.
    #[must_use]
    pub fn resolve(identifier: &str) -> Self {
        if identifier.to_lowercase().contains("admin") {
            Self::Admin
        } else {
            Self::Student
        }
    }

    /// Display name for the role.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Student => "Student",
        }
    }

    /// Fixed welcome message shown on the dashboard.
    #[must_use]
    pub fn welcome_message(self) -> &'static str {
        match self {
            Role::Admin => "You have full access to manage quizzes, users, and settings.",
            Role::Student => "Welcome! Ready to take your daily quiz?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_substring_resolves_to_admin_in_any_case() {
        for identifier in ["admin@x.com", "ADMIN@x.com", "SuperAdmin@corp.org", "aDmInIstRator@q"] {
            assert_eq!(Role::resolve(identifier), Role::Admin, "{identifier}");
        }
    }

    #[test]
    fn everything_else_resolves_to_student() {
        for identifier in ["bob@x.com", "", "adm@in.com", "teacher@school.edu"] {
            assert_eq!(Role::resolve(identifier), Role::Student, "{identifier}");
        }
    }

    #[test]
    fn roles_carry_fixed_descriptions() {
        assert_eq!(Role::Admin.name(), "Admin");
        assert_eq!(Role::Student.name(), "Student");
        assert_ne!(Role::Admin.welcome_message(), Role::Student.welcome_message());
    }
}
