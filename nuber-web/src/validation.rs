//! Validation logic for the account forms.
//!
//! The login, signup and profile forms share these rules so their messages
//! stay identical.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is a valid regex")
});

/// Validation errors that can occur during form validation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValidationError {
    /// Email field is empty
    EmailRequired,
    /// Email address does not look like an address
    InvalidEmail,
    /// Password field is empty
    PasswordRequired,
}

impl ValidationError {
    /// Message rendered under the offending field.
    pub fn message(self) -> &'static str {
        match self {
            Self::EmailRequired => "Email is required",
            Self::InvalidEmail => "Please enter a valid email",
            Self::PasswordRequired => "Password is required",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Validates an email address.
///
/// # Validation rules
/// - Email must not be empty
/// - Email must match the address pattern the backend accepts
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validates a password. Any non-empty password is accepted.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }

    Ok(())
}

/// Message to show for a field, once the user has interacted with it.
pub fn field_message(touched: bool, result: Result<(), ValidationError>) -> Option<&'static str> {
    if touched {
        result.err().map(ValidationError::message)
    } else {
        None
    }
}
