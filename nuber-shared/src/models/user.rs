use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Account role assigned by the backend.
///
/// Roles are server-authoritative. A role name this client does not know
/// deserializes to [`UserRole::Unknown`] instead of failing the whole query.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UserRole {
    /// Orders food.
    #[default]
    Client,
    /// Runs restaurants.
    Owner,
    /// Delivers orders.
    Delivery,
    /// Any role name not listed above.
    #[serde(other)]
    Unknown,
}

impl UserRole {
    /// Roles a visitor may pick when creating an account.
    pub const SIGNUP_ROLES: [Self; 3] = [Self::Client, Self::Owner, Self::Delivery];

    /// Return the GraphQL enum value for this role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Owner => "Owner",
            Self::Delivery => "Delivery",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Client" => Ok(Self::Client),
            "Owner" => Ok(Self::Owner),
            "Delivery" => Ok(Self::Delivery),
            _ => Err("unknown user role"),
        }
    }
}

/// Profile of the authenticated principal, as returned by the `me` query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentUser {
    /// Backend identifier.
    pub id: i64,
    /// Login email address.
    pub email: String,
    /// Role deciding which pages the user can reach.
    pub role: UserRole,
    /// Whether the email address has been confirmed.
    pub verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_user_from_me_payload() {
        let json = r#"{"id":1,"email":"client@mail.com","role":"Client","verified":false}"#;
        let user: CurrentUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.role, UserRole::Client);
        assert!(!user.verified);
    }

    #[test]
    fn unrecognized_role_becomes_unknown() {
        let json = r#"{"id":1,"email":"","role":"","verified":true}"#;
        let user: CurrentUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::Unknown);

        let role: UserRole = serde_json::from_str(r#""Admin""#).unwrap();
        assert_eq!(role, UserRole::Unknown);
    }

    #[test]
    fn signup_roles_parse_from_their_names() {
        for role in UserRole::SIGNUP_ROLES {
            assert_eq!(role.to_string().parse::<UserRole>(), Ok(role));
        }
        assert!("Unknown".parse::<UserRole>().is_err());
    }

    #[test]
    fn role_serializes_as_graphql_enum() {
        assert_eq!(
            serde_json::to_string(&UserRole::Delivery).unwrap(),
            r#""Delivery""#
        );
    }
}
