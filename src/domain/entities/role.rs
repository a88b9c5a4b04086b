//! Account roles.

use serde::{Deserialize, Serialize};

/// Role a visitor registers as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Looking for universities, scholarships and mentors.
    Student,
    /// Studies abroad already and mentors others.
    Consultant,
}

impl Role {
    /// Title-case name, e.g. "Student".
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Consultant => "Consultant",
        }
    }

    /// Name with indefinite article, e.g. "a Consultant".
    #[must_use]
    pub const fn with_article(self) -> &'static str {
        match self {
            Self::Student => "a Student",
            Self::Consultant => "a Consultant",
        }
    }

    /// Single letter shown in the dashboard avatar.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Student => 'S',
            Self::Consultant => 'C',
        }
    }

    /// Dashboard subtitle.
    #[must_use]
    pub const fn dashboard_tagline(self) -> &'static str {
        match self {
            Self::Student => {
                "Find mentors, scholarships, and universities to achieve your study abroad dreams"
            }
            Self::Consultant => "Help students achieve their dreams and earn by mentoring",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Student => write!(f, "student"),
            Self::Consultant => write!(f, "consultant"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Student.with_article(), "a Student");
        assert_eq!(Role::Consultant.title(), "Consultant");
        assert_eq!(Role::Consultant.initial(), 'C');
        assert_eq!(Role::Student.to_string(), "student");
    }
}
