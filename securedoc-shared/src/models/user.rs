use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Role assigned to a user account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
    SuperAdmin,
    Manager,
}

impl Role {
    /// Canonical string representation used by the account service.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::Manager => "MANAGER",
        }
    }

    /// Whether this role grants access to administrative screens.
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "USER" => Ok(Self::User),
            "ADMIN" => Ok(Self::Admin),
            "SUPER_ADMIN" => Ok(Self::SuperAdmin),
            "MANAGER" => Ok(Self::Manager),
            _ => Err("unknown role"),
        }
    }
}

/// The authenticated user record as returned by `GET /profile`.
///
/// Never persisted client-side; the API client caches it for a short
/// freshness window and the UI holds only a transient read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Numeric database identifier.
    pub id: i64,

    /// Identifier of the account that created this record.
    pub created_by: i64,

    /// Identifier of the account that last updated this record.
    pub updated_by: i64,

    /// Public identifier used by verification and MFA endpoints.
    pub user_id: Uuid,

    pub first_name: String,
    pub last_name: String,
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    /// Profile photo location.
    #[serde(default)]
    pub image_url: Option<String>,

    /// Present only while an MFA enrolment QR code is available.
    #[serde(default)]
    pub qr_code_image_uri: Option<String>,

    #[serde(default)]
    pub last_login: Option<NaiveDateTime>,

    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,

    pub role: Role,

    /// Comma-separated authority list, informational only.
    pub authorities: String,

    pub account_non_expired: bool,
    pub account_non_locked: bool,
    pub credentials_non_expired: bool,
    pub enabled: bool,

    /// Whether a second factor is required at login.
    pub mfa: bool,
}

/// `data` payload wrapping a single user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserData {
    pub user: User,
}

/// `data` payload wrapping the user list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserListData {
    pub users: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResponseEnvelope;

    fn sample_user_json() -> String {
        r#"{
            "id": 7,
            "createdBy": 1,
            "updatedBy": 1,
            "userId": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "phone": "555-0100",
            "bio": "First programmer",
            "imageUrl": "https://cdn.example.com/ada.png",
            "lastLogin": "2024-05-01T10:15:30",
            "createdAt": "2024-01-01T00:00:00",
            "updatedAt": "2024-05-01T10:15:30",
            "role": "ADMIN",
            "authorities": "document:create,document:read",
            "accountNonExpired": true,
            "accountNonLocked": true,
            "credentialsNonExpired": true,
            "enabled": true,
            "mfa": false
        }"#
        .to_string()
    }

    #[test]
    fn user_deserializes_from_camel_case() {
        let user: User = serde_json::from_str(&sample_user_json()).unwrap();
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.role, Role::Admin);
        assert!(user.account_non_locked);
        assert!(!user.mfa);
        assert!(user.qr_code_image_uri.is_none());
    }

    #[test]
    fn profile_envelope_deserializes() {
        let json = format!(
            r#"{{"code":200,"status":"OK","message":"Profile retrieved","data":{{"user":{}}}}}"#,
            sample_user_json()
        );
        let envelope: ResponseEnvelope<UserData> = serde_json::from_str(&json).unwrap();
        let data = envelope.data.unwrap();
        assert_eq!(data.user.email, "ada@example.com");
    }

    #[test]
    fn role_roundtrip() {
        for (text, role) in [
            ("USER", Role::User),
            ("ADMIN", Role::Admin),
            ("SUPER_ADMIN", Role::SuperAdmin),
            ("MANAGER", Role::Manager),
        ] {
            assert_eq!(role.as_str(), text);
            assert_eq!(role.to_string(), text);
            assert_eq!(Role::from_str(text).unwrap(), role);
            let json = format!("\"{text}\"");
            let parsed: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn role_admin_set() {
        assert!(Role::Admin.is_admin());
        assert!(Role::SuperAdmin.is_admin());
        assert!(!Role::User.is_admin());
        assert!(!Role::Manager.is_admin());
    }

    #[test]
    fn role_invalid() {
        assert!(Role::from_str("GUEST").is_err());
    }
}
