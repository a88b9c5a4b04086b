//! Authentication DTOs.

use crate::domain::Role;

/// Form the visitor submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Sign-in form.
    Login,
    /// Registration form for a role.
    Registration(Role),
}

impl AuthSource {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Login => "sign in",
            Self::Registration(Role::Student) => "student registration",
            Self::Registration(Role::Consultant) => "consultant registration",
        }
    }
}

impl std::fmt::Display for AuthSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Submitted form data.
///
/// Passwords never leave the form widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSubmission {
    /// Which form was submitted.
    pub source: AuthSource,
    /// Email field.
    pub email: String,
    /// Full name field, registration only.
    pub full_name: Option<String>,
}

impl AuthSubmission {
    /// Creates a sign-in submission.
    #[must_use]
    pub fn login(email: impl Into<String>) -> Self {
        Self {
            source: AuthSource::Login,
            email: email.into(),
            full_name: None,
        }
    }

    /// Creates a registration submission.
    #[must_use]
    pub fn registration(
        role: Role,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            source: AuthSource::Registration(role),
            email: email.into(),
            full_name: Some(full_name.into()),
        }
    }

    /// Returns whether every carried field is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.email.trim().is_empty()
            && self
                .full_name
                .as_deref()
                .is_none_or(|name| name.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_description() {
        assert_eq!(AuthSource::Login.to_string(), "sign in");
        assert_eq!(
            AuthSource::Registration(Role::Consultant).to_string(),
            "consultant registration"
        );
    }

    #[test]
    fn test_blank_submission() {
        assert!(AuthSubmission::login("  ").is_blank());
        assert!(!AuthSubmission::login("a@b.c").is_blank());
        assert!(!AuthSubmission::registration(Role::Student, "Ada", "").is_blank());
    }
}
