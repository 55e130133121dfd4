use serde::{Deserialize, Serialize};

/// Seconds before expiry at which a session is treated as stale
pub const EXPIRY_MARGIN_SECS: i64 = 10;

/// Signed-in identity as reported by the auth service
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    pub fn email_or_id(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.id)
    }
}

/// Auth service session, owned by the backend client
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Unix timestamp (seconds)
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl Session {
    /// Fill `expires_at` from `expires_in` when the service only sent the latter
    pub fn with_expiry(mut self, now: i64) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = self.expires_in.map(|secs| now + secs);
        }
        self
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at
            .map(|at| at <= now + EXPIRY_MARGIN_SECS)
            .unwrap_or(false)
    }
}

/// Subscription tier record, one row per user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub is_pro: bool,
    #[serde(default)]
    pub email: Option<String>,
}

impl Profile {
    pub fn free(id: &str, email: &str) -> Self {
        Self {
            id: id.to_string(),
            is_pro: false,
            email: Some(email.to_string()),
        }
    }
}

/// Minimal user shape kept in mock mode
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockUser {
    pub id: String,
    pub email: String,
}

impl From<MockUser> for User {
    fn from(user: MockUser) -> Self {
        User {
            id: user.id,
            email: Some(user.email),
        }
    }
}

/// Registered mock account
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockCredential {
    pub email: String,
    pub password: String,
    pub id: String,
}

/// Session lifecycle notifications delivered to auth listeners
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthChangeEvent {
    InitialSession,
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

impl AuthChangeEvent {
    /// `InitialSession` repeats what the bootstrap already loaded
    pub fn changes_session(self) -> bool {
        self != AuthChangeEvent::InitialSession
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(expires_at: Option<i64>, expires_in: Option<i64>) -> Session {
        Session {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            token_type: "bearer".to_string(),
            expires_in,
            expires_at,
            user: User { id: "u1".to_string(), email: None },
        }
    }

    #[test]
    fn test_session_expiry() {
        let now = 1_700_000_000;
        assert!(!session(Some(now + 3600), None).is_expired(now));
        assert!(session(Some(now + 5), None).is_expired(now));
        assert!(session(Some(now - 1), None).is_expired(now));
        assert!(!session(None, None).is_expired(now));
    }

    #[test]
    fn test_with_expiry_uses_expires_in() {
        let filled = session(None, Some(3600)).with_expiry(100);
        assert_eq!(filled.expires_at, Some(3700));

        let kept = session(Some(50), Some(3600)).with_expiry(100);
        assert_eq!(kept.expires_at, Some(50));
    }

    #[test]
    fn test_session_parses_token_response() {
        let json = r#"{
            "access_token": "a",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r",
            "user": {"id": "abc", "email": "reader@example.com", "aud": "authenticated"}
        }"#;
        let parsed: Session = serde_json::from_str(json).expect("token response");
        assert_eq!(parsed.user.id, "abc");
        assert_eq!(parsed.user.email_or_id(), "reader@example.com");
        assert_eq!(parsed.expires_in, Some(3600));
        assert_eq!(parsed.expires_at, None);
    }

    #[test]
    fn test_profile_email_optional() {
        let parsed: Profile = serde_json::from_str(r#"{"id":"x","is_pro":true}"#).expect("profile row");
        assert!(parsed.is_pro);
        assert_eq!(parsed.email, None);
    }

    #[test]
    fn test_initial_session_event_is_not_a_change() {
        assert!(!AuthChangeEvent::InitialSession.changes_session());
        assert!(AuthChangeEvent::SignedIn.changes_session());
        assert!(AuthChangeEvent::SignedOut.changes_session());
        assert!(AuthChangeEvent::TokenRefreshed.changes_session());
    }
}
