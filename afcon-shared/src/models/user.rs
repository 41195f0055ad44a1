use serde::{Deserialize, Serialize};

/// Profile of a user as returned by `/users/me` and `/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Backend identifier, absent from some responses.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The user's display name.
    pub username: String,

    /// The user's email address.
    pub email: String,
}

impl UserProfile {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            email: email.into(),
        }
    }
}

/// Credentials posted to `/users/login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body returned by a successful `/users/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_without_id_decodes() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"username":"a","email":"b"}"#).unwrap();
        assert_eq!(profile, UserProfile::new("a", "b"));
    }

    #[test]
    fn profile_reads_mongo_style_id_and_ignores_extra_fields() {
        let json = r#"{"_id":"665f","username":"amina","email":"amina@example.com","role":"staff"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id.as_deref(), Some("665f"));
        assert_eq!(profile.username, "amina");
    }

    #[test]
    fn profile_without_id_omits_it_on_the_wire() {
        let json = serde_json::to_string(&UserProfile::new("a", "b")).unwrap();
        assert!(!json.contains("_id"));
    }

    #[test]
    fn login_response_wraps_user() {
        let json = r#"{"user":{"username":"youssef","email":"y@example.com"}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.user.username, "youssef");
    }

    #[test]
    fn login_request_serializes_email_and_password() {
        let request = LoginRequest {
            email: "fan@example.com".to_string(),
            password: "secret".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["email"], "fan@example.com");
        assert_eq!(value["password"], "secret");
    }
}
