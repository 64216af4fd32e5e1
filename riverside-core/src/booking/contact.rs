//! Contact fields shared by every booking form.
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ContactIssue {
    #[error("first name is required")]
    MissingFirstName,
    #[error("last name is required")]
    MissingLastName,
    #[error("email is required")]
    MissingEmail,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("phone number is required")]
    MissingPhone,
}

impl ContactIssue {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::MissingFirstName => "missing_first_name",
            Self::MissingLastName => "missing_last_name",
            Self::MissingEmail => "missing_email",
            Self::InvalidEmail => "invalid_email",
            Self::MissingPhone => "missing_phone",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl ContactDetails {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// Every problem with the fields, in form order.
    #[must_use]
    pub fn issues(&self) -> Vec<ContactIssue> {
        let mut issues = Vec::new();
        if self.first_name.trim().is_empty() {
            issues.push(ContactIssue::MissingFirstName);
        }
        if self.last_name.trim().is_empty() {
            issues.push(ContactIssue::MissingLastName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            issues.push(ContactIssue::MissingEmail);
        } else if !is_valid_email(email) {
            issues.push(ContactIssue::InvalidEmail);
        }
        if self.phone.trim().is_empty() {
            issues.push(ContactIssue::MissingPhone);
        }
        issues
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.issues().is_empty()
    }
}

fn email_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

fn is_valid_email(email: &str) -> bool {
    email_pattern().is_none_or(|re| re.is_match(email))
}
