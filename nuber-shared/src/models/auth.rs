use serde::{Deserialize, Serialize};

use super::UserRole;

/// Message shown when a mutation fails without telling us why.
pub const UNKNOWN_FAILURE: &str = "Something went wrong. Please try again.";

/// Credentials for the `login` mutation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoginInput {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Result of the `login` mutation.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LoginOutput {
    /// Whether the credentials were accepted.
    pub ok: bool,
    /// Session token issued on success.
    #[serde(default)]
    pub token: Option<String>,
    /// Server-provided reason for a rejection.
    #[serde(default)]
    pub error: Option<String>,
}

impl LoginOutput {
    /// Turn the output into the issued token, or the message to show the user.
    ///
    /// An `ok` answer without a usable token counts as a failure.
    pub fn into_token(self) -> Result<String, String> {
        match (self.ok, self.token) {
            (true, Some(token)) if !token.is_empty() => Ok(token),
            _ => Err(self.error.unwrap_or_else(|| UNKNOWN_FAILURE.to_string())),
        }
    }
}

/// Fields for the `createAccount` mutation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CreateAccountInput {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Role the account is created with.
    pub role: UserRole,
}

/// Fields for the `editProfile` mutation. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct EditProfileInput {
    /// New email address. Changing it resets the verified flag server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl EditProfileInput {
    /// Build the input from the profile form; an empty password is omitted.
    pub fn from_form(email: impl Into<String>, password: impl Into<String>) -> Self {
        let email = email.into();
        let password = password.into();
        Self {
            email: (!email.is_empty()).then_some(email),
            password: (!password.is_empty()).then_some(password),
        }
    }
}

/// Fields for the `verifyEmail` mutation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VerifyEmailInput {
    /// Verification code delivered by email.
    pub code: String,
}

/// Plain `{ ok, error }` output shared by most mutations.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CoreOutput {
    /// Whether the mutation succeeded.
    pub ok: bool,
    /// Server-provided reason for a failure.
    #[serde(default)]
    pub error: Option<String>,
}

impl CoreOutput {
    /// Message to display for this output, if any.
    ///
    /// A failed output without an `error` falls back to [`UNKNOWN_FAILURE`].
    /// A successful output may still carry an `error`; it is shown as is.
    pub fn message(&self) -> Option<String> {
        match (&self.error, self.ok) {
            (Some(error), _) => Some(error.clone()),
            (None, false) => Some(UNKNOWN_FAILURE.to_string()),
            (None, true) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_output_yields_token() {
        let output: LoginOutput =
            serde_json::from_str(r#"{"ok":true,"token":"abc.def","error":null}"#).unwrap();
        assert_eq!(output.into_token(), Ok("abc.def".to_string()));
    }

    #[test]
    fn login_output_yields_server_error() {
        let output: LoginOutput =
            serde_json::from_str(r#"{"ok":false,"error":"Wrong password"}"#).unwrap();
        assert_eq!(output.into_token(), Err("Wrong password".to_string()));
    }

    #[test]
    fn login_output_without_token_is_a_failure() {
        let output = LoginOutput {
            ok: true,
            token: Some(String::new()),
            error: None,
        };
        assert_eq!(output.into_token(), Err(UNKNOWN_FAILURE.to_string()));
    }

    #[test]
    fn edit_profile_omits_empty_password() {
        let input = EditProfileInput::from_form("new@mail.com", "");
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({ "email": "new@mail.com" })
        );

        let input = EditProfileInput::from_form("new@mail.com", "secret");
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({ "email": "new@mail.com", "password": "secret" })
        );
    }

    #[test]
    fn create_account_input_carries_role_name() {
        let input = CreateAccountInput {
            email: "owner@mail.com".to_string(),
            password: "12345".to_string(),
            role: UserRole::Owner,
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({ "email": "owner@mail.com", "password": "12345", "role": "Owner" })
        );
    }

    #[test]
    fn core_output_messages() {
        let ok = CoreOutput {
            ok: true,
            error: None,
        };
        assert_eq!(ok.message(), None);

        let failed = CoreOutput {
            ok: false,
            error: None,
        };
        assert_eq!(failed.message().as_deref(), Some(UNKNOWN_FAILURE));

        let explained = CoreOutput {
            ok: true,
            error: Some("mutation-error".to_string()),
        };
        assert_eq!(explained.message().as_deref(), Some("mutation-error"));
    }
}
