/// Type definitions for the campus web interface
///
/// Session snapshots, persisted session records and the backend's JSON envelopes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who is signed in, as far as the shell is concerned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque identity, usually the account email.
    pub identity: Option<String>,
    pub role: Option<String>,
}

impl Session {
    pub fn new(identity: impl Into<String>, role: Option<String>) -> Self {
        Self {
            identity: Some(identity.into()),
            role,
        }
    }
}

/// Session record kept in localStorage between page loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub session: Session,
    pub token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl StoredSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
    pub role: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<LoginResponse> for StoredSession {
    fn from(response: LoginResponse) -> Self {
        Self {
            session: Session::new(response.email, response.role),
            token: response.token,
            expires_at: response.expires_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_stored_session_expiry() {
        let now = Utc::now();
        let mut stored = StoredSession {
            session: Session::new("admin@example.edu", None),
            token: "tok_123".to_string(),
            expires_at: Some(now + Duration::hours(1)),
        };
        assert!(!stored.is_expired(now));

        stored.expires_at = Some(now - Duration::seconds(1));
        assert!(stored.is_expired(now));

        // No expiry means the backend manages lifetime
        stored.expires_at = None;
        assert!(!stored.is_expired(now));
    }

    #[test]
    fn test_login_response_envelope() {
        let body = r#"{
            "success": true,
            "data": {
                "token": "tok_abc",
                "email": "registrar@example.edu",
                "role": "teacher",
                "expires_at": null
            },
            "error": null,
            "message": null
        }"#;

        let response: ApiResponse<LoginResponse> = serde_json::from_str(body).unwrap();
        assert!(response.success);

        let stored: StoredSession = response.data.unwrap().into();
        assert_eq!(stored.token, "tok_abc");
        assert_eq!(stored.session.identity.as_deref(), Some("registrar@example.edu"));
        assert_eq!(stored.session.role.as_deref(), Some("teacher"));
    }

    #[test]
    fn test_session_without_role_deserializes() {
        let session: Session = serde_json::from_str(r#"{"identity":"a@b.edu","role":null}"#).unwrap();
        assert_eq!(session, Session::new("a@b.edu", None));
    }
}
