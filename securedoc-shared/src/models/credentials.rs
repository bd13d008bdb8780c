use crate::models::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Credentials for `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Payload for `POST /resetpassword`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailAddress {
    pub email: String,
}

/// Payload for `PATCH /updatepassword` while logged in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePassword {
    pub password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

/// Payload for `POST /resetpassword/reset`, after link verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNewPassword {
    pub user_id: Uuid,
    pub new_password: String,
    pub confirm_new_password: String,
}

/// One-time-code submission for `POST /verify/qrcode`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeRequest {
    pub user_id: Uuid,
    pub qr_code: String,
}

/// Payload for `PATCH /updaterole`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleRequest {
    pub role: Role,
}

/// Editable profile fields for `PATCH /update`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_serializes_camel_case() {
        let request = RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"firstName\":\"Ada\""));
        assert!(json.contains("\"lastName\":\"Lovelace\""));
    }

    #[test]
    fn qr_code_request_serializes_camel_case() {
        let request = QrCodeRequest {
            user_id: Uuid::nil(),
            qr_code: "123456".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"userId\""));
        assert!(json.contains("\"qrCode\":\"123456\""));
    }

    #[test]
    fn role_request_carries_service_name() {
        let request = RoleRequest { role: Role::SuperAdmin };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"role":"SUPER_ADMIN"}"#);
    }

    #[test]
    fn update_new_password_roundtrip() {
        let request = UpdateNewPassword {
            user_id: Uuid::nil(),
            new_password: "new-secret".to_string(),
            confirm_new_password: "new-secret".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        let parsed: UpdateNewPassword = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
    }
}
