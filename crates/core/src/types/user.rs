//! Customer identity as the storefront session sees it.

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// The signed-in (or guest) user attached to a session.
///
/// Users are replaced wholesale on sign-in, sign-out, and guest checkout.
/// There is no field-level patching: whoever produces a `User` produces all
/// of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_guest: Option<bool>,
}

impl User {
    /// Whether this user is a guest-checkout identity.
    #[must_use]
    pub fn is_guest(&self) -> bool {
        self.is_guest.unwrap_or(false)
    }
}

/// Role attached to a user identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Customer,
    Admin,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn role_uses_snake_case_wire_values() {
        assert_eq!(serde_json::to_string(&UserRole::Customer).unwrap(), "\"customer\"");
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn guest_flag_defaults_to_false() {
        let user: User = serde_json::from_str(
            r#"{"id": "u1", "name": "Asha", "email": "asha@example.com", "role": "customer"}"#,
        )
        .unwrap();

        assert!(!user.is_guest());
        assert!(user.phone.is_none());
    }

    #[test]
    fn guest_flag_round_trips_in_camel_case() {
        let user = User {
            id: UserId::new("guest-9"),
            name: "Guest".to_owned(),
            email: String::new(),
            role: UserRole::Customer,
            phone: None,
            is_guest: Some(true),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["isGuest"], true);
    }
}
