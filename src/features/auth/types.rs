//! Request and response types for auth-related API calls.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response across deployed service versions. One returns `userId`, the
/// other returns `token`; both fields stay optional and success is keyed on
/// the HTTP status alone (see DESIGN.md).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub age: u8,
    pub email: String,
    pub password: String,
    // The API requires this flag on every registration; the client always
    // sends `false`.
    pub is_boss: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecoverPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewPasswordRequest {
    pub token: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    #[serde(rename = "currentPassword")]
    pub current_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_accepts_both_service_variants() {
        let with_user: LoginResponse = serde_json::from_str(r#"{"userId":"u-1"}"#).unwrap();
        assert_eq!(with_user.user_id.as_deref(), Some("u-1"));
        assert!(with_user.token.is_none());

        let with_token: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(with_token.token.as_deref(), Some("abc"));
        assert!(with_token.user_id.is_none());
    }

    #[test]
    fn register_request_wire_format() {
        let request = RegisterRequest {
            first_name: "Ana".to_string(),
            last_name: "García".to_string(),
            age: 21,
            email: "ana@mail.com".to_string(),
            password: "Abcdef12".to_string(),
            is_boss: false,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["firstName"], "Ana");
        assert_eq!(json["lastName"], "García");
        assert_eq!(json["is_boss"], false);
        assert_eq!(json["age"], 21);
    }
}
