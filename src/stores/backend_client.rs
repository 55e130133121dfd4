//! Client for the hosted auth/database service
//!
//! Speaks the Supabase-compatible REST surface (`/auth/v1`, `/rest/v1`).
//! One instance lives for the whole page; use `get_backend_client()`.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::config::BackendConfig;
use crate::stores::storage::{default_store, get_json, set_json, KeyValueStore};
use crate::stores::types::{AuthChangeEvent, Profile, Session, User};

const SESSION_STORAGE_KEY: &str = "bookbuddy.auth.session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    Network(String),
    Api { status: u16, message: String },
    Decode(String),
    Storage(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BackendError::Network(e) => write!(f, "Network error: {}", e),
            BackendError::Api { message, .. } => write!(f, "{}", message),
            BackendError::Decode(e) => write!(f, "Unexpected response: {}", e),
            BackendError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for BackendError {}

impl BackendError {
    /// The server refused the credentials outright. Network failures and
    /// 5xx responses may succeed on retry.
    pub fn is_rejection(&self) -> bool {
        matches!(self, BackendError::Api { status, .. } if *status < 500)
    }
}

/// Result of a signup call. `session` is absent when email confirmation is pending.
#[derive(Debug, Clone, PartialEq)]
pub struct SignUpResponse {
    pub user: Option<User>,
    pub session: Option<Session>,
}

type AuthCallback = Rc<dyn Fn(AuthChangeEvent, Option<Session>)>;

struct Listener {
    id: u64,
    callback: AuthCallback,
}

/// Handle returned by `on_auth_state_change`
pub struct AuthSubscription {
    id: u64,
    listeners: Weak<RefCell<Vec<Listener>>>,
}

impl AuthSubscription {
    /// Stop receiving notifications. Calling it twice is harmless.
    pub fn unsubscribe(&self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|l| l.id != self.id);
            log::debug!("Auth listener {} unsubscribed", self.id);
        }
    }
}

pub struct BackendClient {
    config: BackendConfig,
    http: reqwest::Client,
    storage: Rc<dyn KeyValueStore>,
    session: RefCell<Option<Session>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
    next_listener_id: Cell<u64>,
}

thread_local! {
    static BACKEND_CLIENT: RefCell<Option<Rc<BackendClient>>> = const { RefCell::new(None) };
}

/// Shared client, created on first use from the build configuration
pub fn get_backend_client() -> Rc<BackendClient> {
    BACKEND_CLIENT.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(|| {
                let config = BackendConfig::from_env();
                log::info!("Creating backend client for {}", config.url);
                Rc::new(BackendClient::new(config, default_store()))
            })
            .clone()
    })
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

impl BackendClient {
    pub fn new(config: BackendConfig, storage: Rc<dyn KeyValueStore>) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            storage,
            session: RefCell::new(None),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_listener_id: Cell::new(1),
        }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    // ========================================================================
    // Auth state listeners
    // ========================================================================

    pub fn on_auth_state_change<F>(&self, callback: F) -> AuthSubscription
    where
        F: Fn(AuthChangeEvent, Option<Session>) + 'static,
    {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        self.listeners.borrow_mut().push(Listener {
            id,
            callback: Rc::new(callback),
        });
        log::debug!("Auth listener {} subscribed", id);

        AuthSubscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    fn emit(&self, event: AuthChangeEvent, session: Option<&Session>) {
        // Listeners may unsubscribe while being notified
        let callbacks: Vec<AuthCallback> = self
            .listeners
            .borrow()
            .iter()
            .map(|l| l.callback.clone())
            .collect();

        for callback in callbacks {
            callback(event, session.cloned());
        }
    }

    // ========================================================================
    // Session
    // ========================================================================

    fn store_session(&self, session: Option<Session>) {
        if self.config.persist_session {
            match &session {
                Some(s) => {
                    if let Err(e) = set_json(&*self.storage, SESSION_STORAGE_KEY, s) {
                        log::warn!("Failed to persist session: {}", e);
                    }
                }
                None => self.storage.delete(SESSION_STORAGE_KEY),
            }
        }
        *self.session.borrow_mut() = session;
    }

    /// Current session, restored from storage or the URL when needed.
    /// Expired sessions are refreshed if auto refresh is on, dropped otherwise.
    pub async fn get_session(&self) -> Result<Option<Session>, BackendError> {
        let in_memory = self.session.borrow().clone();
        let candidate = match in_memory {
            Some(session) => Some(session),
            None => self.restore_session().await?,
        };

        let Some(session) = candidate else {
            return Ok(None);
        };

        if !session.is_expired(now()) {
            return Ok(Some(session));
        }

        if self.config.auto_refresh_token {
            log::info!("Session expired, refreshing");
            return self.refresh_session(&session.refresh_token).await.map(Some);
        }

        log::info!("Session expired");
        self.store_session(None);
        Ok(None)
    }

    async fn restore_session(&self) -> Result<Option<Session>, BackendError> {
        if self.config.persist_session {
            if let Some(session) = get_json::<Session>(&*self.storage, SESSION_STORAGE_KEY) {
                log::info!("Restored persisted session for {}", session.user.id);
                *self.session.borrow_mut() = Some(session.clone());
                return Ok(Some(session));
            }
        }

        if self.config.detect_session_in_url {
            if let Some(tokens) = current_url_fragment().and_then(|f| parse_session_fragment(&f, now())) {
                let user = self.fetch_user(&tokens.access_token).await?;
                let session = tokens.into_session(user);
                log::info!("Picked up session from URL for {}", session.user.id);
                self.store_session(Some(session.clone()));
                clear_url_fragment();
                self.emit(AuthChangeEvent::SignedIn, Some(&session));
                return Ok(Some(session));
            }
        }

        Ok(None)
    }

    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Session, BackendError> {
        let request = self
            .http
            .post(self.endpoint("/auth/v1/token?grant_type=refresh_token"))
            .bearer_auth(&self.config.anon_key)
            .json(&json!({ "refresh_token": refresh_token }));

        let session = match self.send_json::<Session>(request).await {
            Ok(session) => session.with_expiry(now()),
            Err(e) if e.is_rejection() => {
                log::warn!("Refresh token rejected: {}", e);
                self.store_session(None);
                self.emit(AuthChangeEvent::SignedOut, None);
                return Err(e);
            }
            Err(e) => {
                log::warn!("Session refresh failed, keeping stored session: {}", e);
                return Err(e);
            }
        };

        self.store_session(Some(session.clone()));
        self.emit(AuthChangeEvent::TokenRefreshed, Some(&session));
        Ok(session)
    }

    async fn fetch_user(&self, access_token: &str) -> Result<User, BackendError> {
        let request = self
            .http
            .get(self.endpoint("/auth/v1/user"))
            .bearer_auth(access_token);
        self.send_json(request).await
    }

    // ========================================================================
    // Sign in / sign up / sign out
    // ========================================================================

    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, BackendError> {
        log::info!("Signing in {}", email);
        let request = self
            .http
            .post(self.endpoint("/auth/v1/token?grant_type=password"))
            .bearer_auth(&self.config.anon_key)
            .json(&json!({ "email": email, "password": password }));

        let session = self.send_json::<Session>(request).await?.with_expiry(now());
        self.store_session(Some(session.clone()));
        self.emit(AuthChangeEvent::SignedIn, Some(&session));
        Ok(session)
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpResponse, BackendError> {
        log::info!("Registering {}", email);
        let request = self
            .http
            .post(self.endpoint("/auth/v1/signup"))
            .bearer_auth(&self.config.anon_key)
            .json(&json!({ "email": email, "password": password }));

        let body: Value = self.send_json(request).await?;
        let response = parse_sign_up_response(body, now())?;

        if let Some(session) = &response.session {
            self.store_session(Some(session.clone()));
            self.emit(AuthChangeEvent::SignedIn, Some(session));
        }
        Ok(response)
    }

    /// Revoke the session server-side and forget it locally.
    /// Local state is cleared even if the revoke request fails.
    pub async fn sign_out(&self) -> Result<(), BackendError> {
        let token = self.session.borrow().as_ref().map(|s| s.access_token.clone());

        let result = match token {
            Some(token) => {
                let request = self
                    .http
                    .post(self.endpoint("/auth/v1/logout"))
                    .bearer_auth(token);
                self.send_empty(request).await
            }
            None => Ok(()),
        };

        self.store_session(None);
        self.emit(AuthChangeEvent::SignedOut, None);
        result
    }

    // ========================================================================
    // Profiles table
    // ========================================================================

    /// Zero rows is not an error
    pub async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, BackendError> {
        let url = format!(
            "{}?select=id,is_pro,email&id=eq.{}",
            self.endpoint("/rest/v1/profiles"),
            urlencoding::encode(user_id)
        );
        let request = self.http.get(url).bearer_auth(self.bearer_token());
        let rows: Vec<Profile> = self.send_json(request).await?;
        single_row(rows)
    }

    pub async fn upsert_profile(&self, profile: &Profile) -> Result<(), BackendError> {
        let request = self
            .http
            .post(self.endpoint("/rest/v1/profiles"))
            .bearer_auth(self.bearer_token())
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&[profile]);
        self.send_empty(request).await
    }

    // ========================================================================
    // HTTP plumbing
    // ========================================================================

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.url, path)
    }

    fn bearer_token(&self) -> String {
        self.session
            .borrow()
            .as_ref()
            .map(|s| s.access_token.clone())
            .unwrap_or_else(|| self.config.anon_key.clone())
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, BackendError> {
        let response = request
            .header("apikey", &self.config.anon_key)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }
        Ok(body)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, BackendError> {
        let body = self.send(request).await?;
        serde_json::from_str(&body).map_err(|e| BackendError::Decode(e.to_string()))
    }

    async fn send_empty(&self, request: reqwest::RequestBuilder) -> Result<(), BackendError> {
        self.send(request).await.map(|_| ())
    }
}

fn single_row(mut rows: Vec<Profile>) -> Result<Option<Profile>, BackendError> {
    match rows.len() {
        0 => Ok(None),
        1 => Ok(rows.pop()),
        n => Err(BackendError::Decode(format!("expected at most one profile row, got {}", n))),
    }
}

/// Pull a readable message out of an error body
fn api_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["msg", "message", "error_description", "error"] {
            if let Some(message) = value.get(key).and_then(Value::as_str) {
                if !message.is_empty() {
                    return message.to_string();
                }
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Unknown error".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Signup answers with a session when auto-confirm is on, otherwise with the bare user
fn parse_sign_up_response(body: Value, now: i64) -> Result<SignUpResponse, BackendError> {
    if body.get("access_token").is_some() {
        let session: Session =
            serde_json::from_value(body).map_err(|e| BackendError::Decode(e.to_string()))?;
        let session = session.with_expiry(now);
        return Ok(SignUpResponse {
            user: Some(session.user.clone()),
            session: Some(session),
        });
    }

    let user_value = body.get("user").cloned().unwrap_or(body);
    let user = match user_value.get("id") {
        Some(_) => Some(
            serde_json::from_value::<User>(user_value).map_err(|e| BackendError::Decode(e.to_string()))?,
        ),
        None => None,
    };
    Ok(SignUpResponse { user, session: None })
}

/// Tokens carried in an auth redirect fragment
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UrlSessionTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_at: Option<i64>,
}

impl UrlSessionTokens {
    fn into_session(self, user: User) -> Session {
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            token_type: self.token_type,
            expires_in: None,
            expires_at: self.expires_at,
            user,
        }
    }
}

/// Parse `#access_token=..&refresh_token=..&expires_in=..` from a redirect URL
pub fn parse_session_fragment(fragment: &str, now: i64) -> Option<UrlSessionTokens> {
    let fragment = fragment.trim_start_matches('#');
    let mut access_token = None;
    let mut refresh_token = None;
    let mut token_type = None;
    let mut expires_at = None;
    let mut expires_in = None;

    for (key, value) in url::form_urlencoded::parse(fragment.as_bytes()) {
        match key.as_ref() {
            "access_token" => access_token = Some(value.into_owned()),
            "refresh_token" => refresh_token = Some(value.into_owned()),
            "token_type" => token_type = Some(value.into_owned()),
            "expires_at" => expires_at = value.parse::<i64>().ok(),
            "expires_in" => expires_in = value.parse::<i64>().ok(),
            _ => {}
        }
    }

    Some(UrlSessionTokens {
        access_token: access_token.filter(|t| !t.is_empty())?,
        refresh_token: refresh_token.filter(|t| !t.is_empty())?,
        token_type: token_type.unwrap_or_else(|| "bearer".to_string()),
        expires_at: expires_at.or_else(|| expires_in.map(|secs| now + secs)),
    })
}

fn current_url_fragment() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let hash = web_sys::window()?.location().hash().ok()?;
        if hash.len() > 1 {
            return Some(hash);
        }
    }
    None
}

fn clear_url_fragment() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            let path = format!(
                "{}{}",
                location.pathname().unwrap_or_default(),
                location.search().unwrap_or_default()
            );
            if let Ok(history) = window.history() {
                if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path)) {
                    log::debug!("Failed to clear session fragment: {:?}", e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::storage::MemoryStorage;
    use futures::executor::block_on;

    fn session(expires_at: i64) -> Session {
        Session {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            token_type: "bearer".to_string(),
            expires_in: None,
            expires_at: Some(expires_at),
            user: User {
                id: "user-1".to_string(),
                email: Some("reader@example.com".to_string()),
            },
        }
    }

    fn hosted_client(storage: Rc<MemoryStorage>) -> BackendClient {
        BackendClient::new(BackendConfig::hosted("https://project.supabase.co", "anon"), storage)
    }

    #[test]
    fn test_get_session_restores_persisted_session() {
        let storage = Rc::new(MemoryStorage::default());
        let stored = session(now() + 3600);
        set_json(&*storage, SESSION_STORAGE_KEY, &stored).unwrap();

        let client = hosted_client(storage);
        let restored = block_on(client.get_session()).unwrap();
        assert_eq!(restored, Some(stored));
        assert_eq!(client.bearer_token(), "access");
    }

    #[test]
    fn test_get_session_ignores_storage_when_not_persisting() {
        let storage = Rc::new(MemoryStorage::default());
        set_json(&*storage, SESSION_STORAGE_KEY, &session(now() + 3600)).unwrap();

        let client = BackendClient::new(BackendConfig::mock(), storage);
        assert_eq!(block_on(client.get_session()).unwrap(), None);
        assert_eq!(client.bearer_token(), "mock-key");
    }

    #[test]
    fn test_expired_session_dropped_without_auto_refresh() {
        let storage = Rc::new(MemoryStorage::default());
        set_json(&*storage, SESSION_STORAGE_KEY, &session(now() - 60)).unwrap();

        let mut config = BackendConfig::hosted("https://project.supabase.co", "anon");
        config.auto_refresh_token = false;
        let client = BackendClient::new(config, storage.clone());

        assert_eq!(block_on(client.get_session()).unwrap(), None);
        assert!(storage.get_raw(SESSION_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_failed_refresh_keeps_session_when_unreachable() {
        let storage = Rc::new(MemoryStorage::default());
        let expired = session(now() - 60);
        set_json(&*storage, SESSION_STORAGE_KEY, &expired).unwrap();

        // Unparsable endpoint: the request fails before any response arrives
        let client = BackendClient::new(BackendConfig::hosted("not a url", "anon"), storage.clone());
        let events = Rc::new(RefCell::new(Vec::new()));
        let seen = events.clone();
        let _subscription = client.on_auth_state_change(move |event, _| seen.borrow_mut().push(event));

        let err = block_on(client.get_session()).unwrap_err();
        assert!(matches!(err, BackendError::Network(_)));
        assert_eq!(get_json::<Session>(&*storage, SESSION_STORAGE_KEY), Some(expired));
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_rejection_errors() {
        let rejected = BackendError::Api {
            status: 400,
            message: "Invalid Refresh Token".to_string(),
        };
        assert!(rejected.is_rejection());
        assert!(!BackendError::Api {
            status: 503,
            message: "Service Unavailable".to_string()
        }
        .is_rejection());
        assert!(!BackendError::Network("offline".to_string()).is_rejection());
        assert!(!BackendError::Decode("eof".to_string()).is_rejection());
    }

    #[test]
    fn test_sign_out_without_session_clears_and_notifies() {
        let storage = Rc::new(MemoryStorage::default());
        let client = hosted_client(storage);

        let events = Rc::new(RefCell::new(Vec::new()));
        let seen = events.clone();
        let _subscription = client.on_auth_state_change(move |event, session| {
            seen.borrow_mut().push((event, session.is_some()));
        });

        block_on(client.sign_out()).unwrap();
        assert_eq!(*events.borrow(), vec![(AuthChangeEvent::SignedOut, false)]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let client = hosted_client(Rc::new(MemoryStorage::default()));
        let count = Rc::new(Cell::new(0));

        let counter = count.clone();
        let subscription = client.on_auth_state_change(move |_, _| counter.set(counter.get() + 1));
        let other_counter = count.clone();
        let other = client.on_auth_state_change(move |_, _| other_counter.set(other_counter.get() + 10));

        client.emit(AuthChangeEvent::SignedIn, Some(&session(now() + 60)));
        assert_eq!(count.get(), 11);

        subscription.unsubscribe();
        subscription.unsubscribe();
        client.emit(AuthChangeEvent::SignedOut, None);
        assert_eq!(count.get(), 21);

        other.unsubscribe();
        client.emit(AuthChangeEvent::SignedOut, None);
        assert_eq!(count.get(), 21);
    }

    #[test]
    fn test_unsubscribe_after_client_dropped() {
        let client = hosted_client(Rc::new(MemoryStorage::default()));
        let subscription = client.on_auth_state_change(|_, _| {});
        drop(client);
        subscription.unsubscribe();
    }

    #[test]
    fn test_api_error_message() {
        assert_eq!(
            api_error_message(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
            "Invalid login credentials"
        );
        assert_eq!(api_error_message(r#"{"msg":"User already registered"}"#), "User already registered");
        assert_eq!(api_error_message(r#"{"message":"JWT expired","code":"PGRST301"}"#), "JWT expired");
        assert_eq!(api_error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(api_error_message(""), "Unknown error");
    }

    #[test]
    fn test_parse_session_fragment() {
        let tokens = parse_session_fragment(
            "#access_token=abc&expires_in=3600&refresh_token=def&token_type=bearer&type=magiclink",
            1000,
        )
        .unwrap();
        assert_eq!(tokens.access_token, "abc");
        assert_eq!(tokens.refresh_token, "def");
        assert_eq!(tokens.expires_at, Some(4600));

        let tokens = parse_session_fragment("access_token=a&refresh_token=r&expires_at=99", 1000).unwrap();
        assert_eq!(tokens.expires_at, Some(99));
        assert_eq!(tokens.token_type, "bearer");

        assert!(parse_session_fragment("#access_token=abc", 0).is_none());
        assert!(parse_session_fragment("#section-2", 0).is_none());
    }

    #[test]
    fn test_parse_sign_up_response_variants() {
        let with_session = json!({
            "access_token": "a",
            "refresh_token": "r",
            "expires_in": 60,
            "user": {"id": "u1", "email": "x@y.z"}
        });
        let parsed = parse_sign_up_response(with_session, 100).unwrap();
        assert_eq!(parsed.user.unwrap().id, "u1");
        assert_eq!(parsed.session.unwrap().expires_at, Some(160));

        let pending = json!({"id": "u2", "email": "x@y.z", "confirmation_sent_at": "2024-01-01"});
        let parsed = parse_sign_up_response(pending, 100).unwrap();
        assert_eq!(parsed.user.unwrap().id, "u2");
        assert!(parsed.session.is_none());

        let nested = json!({"user": {"id": "u3"}, "session": null});
        let parsed = parse_sign_up_response(nested, 100).unwrap();
        assert_eq!(parsed.user.unwrap().id, "u3");
    }

    #[test]
    fn test_single_row() {
        assert_eq!(single_row(vec![]).unwrap(), None);
        let row = Profile::free("u1", "a@b.c");
        assert_eq!(single_row(vec![row.clone()]).unwrap(), Some(row.clone()));
        assert!(single_row(vec![row.clone(), row]).is_err());
    }
}
