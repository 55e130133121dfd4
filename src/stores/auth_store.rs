//! Authentication flow shared by both backends
//!
//! `AuthService` decides between the mock identity store and the hosted
//! client, and produces `AuthSnapshot`s the context mirrors into signals.
//! Nothing here touches the renderer, so the flow can be driven in tests.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::is_mock_auth_enabled;
use crate::stores::backend_client::{get_backend_client, BackendClient};
use crate::stores::mock_auth;
use crate::stores::storage::MockStore;
use crate::stores::types::{Profile, Session, User};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Mock,
    Hosted,
}

impl AuthMode {
    /// Mode selected by the credentials baked into this build
    pub fn current() -> Self {
        if is_mock_auth_enabled() {
            AuthMode::Mock
        } else {
            AuthMode::Hosted
        }
    }
}

/// Point-in-time auth state
#[derive(Clone, Debug, PartialEq)]
pub struct AuthSnapshot {
    pub user: Option<User>,
    pub session: Option<Session>,
    pub profile: Option<Profile>,
    pub loading: bool,
}

impl AuthSnapshot {
    /// State before the bootstrap has finished
    pub fn initial() -> Self {
        Self {
            user: None,
            session: None,
            profile: None,
            loading: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            loading: false,
            ..Self::initial()
        }
    }

    pub fn from_mock_store(store: &MockStore) -> Self {
        Self {
            user: store.current_user().map(User::from),
            session: None,
            profile: store.current_profile(),
            loading: false,
        }
    }

    /// Resolve the profile against the state already on screen. A snapshot
    /// without a profile keeps the loaded one when the user is unchanged.
    pub fn merge_into(mut self, current_user_id: Option<&str>, current_profile: Option<Profile>) -> Self {
        let same_user = self.user.as_ref().map(|u| u.id.as_str()) == current_user_id;
        if self.profile.is_none() && same_user {
            self.profile = current_profile;
        }
        self
    }

    /// The profile is loaded separately once the user is known
    pub fn from_session(session: Option<Session>) -> Self {
        Self {
            user: session.as_ref().map(|s| s.user.clone()),
            session,
            profile: None,
            loading: false,
        }
    }
}

/// What a successful registration left behind
#[derive(Clone, Debug, PartialEq)]
pub enum SignUpOutcome {
    SignedIn(AuthSnapshot),
    /// Hosted account created, waiting for the email confirmation link
    ConfirmationPending,
}

#[derive(Clone)]
pub struct AuthService {
    mode: AuthMode,
    mock: MockStore,
    client: Rc<BackendClient>,
}

impl AuthService {
    pub fn new(mode: AuthMode, mock: MockStore, client: Rc<BackendClient>) -> Self {
        Self { mode, mock, client }
    }

    /// Service wired to browser storage and the shared backend client
    pub fn current() -> Self {
        Self::new(AuthMode::current(), MockStore::browser(), get_backend_client())
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn client(&self) -> &Rc<BackendClient> {
        &self.client
    }

    /// Resolve the starting state. A hosted failure degrades to the mock store.
    pub async fn bootstrap(&self) -> AuthSnapshot {
        match self.mode {
            AuthMode::Mock => {
                log::info!("Auth bootstrap using mock identity store");
                AuthSnapshot::from_mock_store(&self.mock)
            }
            AuthMode::Hosted => match self.client.get_session().await {
                Ok(session) => {
                    log::info!("Auth bootstrap complete (signed in: {})", session.is_some());
                    AuthSnapshot::from_session(session)
                }
                Err(e) => {
                    log::warn!("Failed to restore session, falling back to mock store: {}", e);
                    AuthSnapshot::from_mock_store(&self.mock)
                }
            },
        }
    }

    /// Bootstrap on behalf of a component; `None` when it went away meanwhile
    pub async fn bootstrap_while(&self, mounted: &Cell<bool>) -> Option<AuthSnapshot> {
        let snapshot = self.bootstrap().await;
        if !mounted.get() {
            log::debug!("Auth provider unmounted before bootstrap finished");
            return None;
        }
        Some(snapshot)
    }

    pub async fn load_profile(&self, user: Option<&User>) -> Result<Option<Profile>, String> {
        let Some(user) = user else {
            return Ok(None);
        };

        match self.mode {
            AuthMode::Mock => Ok(self.mock.current_profile()),
            AuthMode::Hosted => self
                .client
                .fetch_profile(&user.id)
                .await
                .map_err(|e| e.to_string()),
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSnapshot, String> {
        match self.mode {
            AuthMode::Mock => {
                mock_auth::sign_in(&self.mock, email, password).map_err(|e| e.to_string())?;
                Ok(AuthSnapshot::from_mock_store(&self.mock))
            }
            AuthMode::Hosted => {
                let session = self
                    .client
                    .sign_in_with_password(email, password)
                    .await
                    .map_err(|e| e.to_string())?;
                Ok(AuthSnapshot::from_session(Some(session)))
            }
        }
    }

    /// Register an account. Hosted accounts also get a free profile row.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, String> {
        match self.mode {
            AuthMode::Mock => {
                mock_auth::sign_up(&self.mock, email, password).map_err(|e| e.to_string())?;
                Ok(SignUpOutcome::SignedIn(AuthSnapshot::from_mock_store(&self.mock)))
            }
            AuthMode::Hosted => {
                let response = self
                    .client
                    .sign_up(email, password)
                    .await
                    .map_err(|e| e.to_string())?;

                if let Some(user) = &response.user {
                    let profile = Profile::free(&user.id, user.email.as_deref().unwrap_or(email));
                    if let Err(e) = self.client.upsert_profile(&profile).await {
                        log::warn!("Failed to create profile for {}: {}", user.id, e);
                    }
                }

                match response.session {
                    Some(session) => Ok(SignUpOutcome::SignedIn(AuthSnapshot::from_session(Some(session)))),
                    None => Ok(SignUpOutcome::ConfirmationPending),
                }
            }
        }
    }

    /// Always ends signed out; backend failures are only logged
    pub async fn sign_out(&self) -> AuthSnapshot {
        let result = match self.mode {
            AuthMode::Mock => mock_auth::sign_out(&self.mock).map_err(|e| e.to_string()),
            AuthMode::Hosted => self.client.sign_out().await.map_err(|e| e.to_string()),
        };

        if let Err(e) = result {
            log::warn!("Sign out failed: {}", e);
        }
        AuthSnapshot::signed_out()
    }

    /// Mock accounts are upgraded locally. Hosted upgrades need a payment
    /// processor, so only the intent is recorded and `None` returned.
    pub async fn upgrade_to_pro(&self) -> Result<Option<Profile>, String> {
        match self.mode {
            AuthMode::Mock => mock_auth::upgrade_to_pro(&self.mock).map_err(|e| e.to_string()),
            AuthMode::Hosted => {
                log::info!("Pro upgrade requested; no payment processor configured");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BackendConfig, DEMO_EMAIL, DEMO_PASSWORD, DEMO_USER_ID};
    use crate::stores::storage::{set_json, MemoryStorage};
    use futures::executor::block_on;

    fn mock_service() -> AuthService {
        let kv = Rc::new(MemoryStorage::default());
        let client = Rc::new(BackendClient::new(BackendConfig::mock(), kv.clone()));
        AuthService::new(AuthMode::Mock, MockStore::new(kv), client)
    }

    #[test]
    fn test_initial_snapshot_is_loading() {
        let snapshot = AuthSnapshot::initial();
        assert!(snapshot.loading);
        assert!(snapshot.user.is_none());
        assert!(!AuthSnapshot::signed_out().loading);
    }

    #[test]
    fn test_mock_bootstrap_without_user() {
        let snapshot = block_on(mock_service().bootstrap());
        assert_eq!(snapshot, AuthSnapshot::signed_out());
    }

    #[test]
    fn test_mock_sign_in_and_bootstrap_restores_user() {
        let service = mock_service();
        let snapshot = block_on(service.sign_in(DEMO_EMAIL, DEMO_PASSWORD)).unwrap();
        assert_eq!(snapshot.user.as_ref().unwrap().id, DEMO_USER_ID);
        assert!(snapshot.session.is_none());
        assert!(!snapshot.loading);

        let restored = block_on(service.bootstrap());
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_mock_sign_in_error_message() {
        let err = block_on(mock_service().sign_in(DEMO_EMAIL, "nope")).unwrap_err();
        assert_eq!(err, "Invalid email or password");
    }

    #[test]
    fn test_mock_sign_up_signs_in() {
        let service = mock_service();
        let outcome = block_on(service.sign_up("new@reader.test", "pw")).unwrap();
        let SignUpOutcome::SignedIn(snapshot) = outcome else {
            panic!("mock sign up should sign in");
        };
        assert_eq!(
            snapshot.user.unwrap().email.as_deref(),
            Some("new@reader.test")
        );
        assert!(!snapshot.profile.unwrap().is_pro);

        let err = block_on(service.sign_up("new@reader.test", "pw")).unwrap_err();
        assert_eq!(err, "Email already registered");
    }

    #[test]
    fn test_load_profile() {
        let service = mock_service();
        assert_eq!(block_on(service.load_profile(None)).unwrap(), None);

        let snapshot = block_on(service.sign_in(DEMO_EMAIL, DEMO_PASSWORD)).unwrap();
        let profile = block_on(service.load_profile(snapshot.user.as_ref())).unwrap();
        assert_eq!(profile.unwrap().id, DEMO_USER_ID);
    }

    #[test]
    fn test_upgrade_then_sign_out() {
        let service = mock_service();
        block_on(service.sign_in(DEMO_EMAIL, DEMO_PASSWORD)).unwrap();

        let profile = block_on(service.upgrade_to_pro()).unwrap().unwrap();
        assert!(profile.is_pro);

        let snapshot = block_on(service.sign_out());
        assert_eq!(snapshot, AuthSnapshot::signed_out());
        assert_eq!(block_on(service.bootstrap()).user, None);
    }

    #[test]
    fn test_hosted_bootstrap_uses_persisted_session() {
        let kv = Rc::new(MemoryStorage::default());
        let session = Session {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            token_type: "bearer".to_string(),
            expires_in: None,
            expires_at: None,
            user: User {
                id: "hosted-user".to_string(),
                email: Some("h@x.test".to_string()),
            },
        };
        set_json(&*kv, "bookbuddy.auth.session", &session).unwrap();

        let client = Rc::new(BackendClient::new(
            BackendConfig::hosted("https://project.supabase.co", "anon"),
            kv.clone(),
        ));
        let service = AuthService::new(AuthMode::Hosted, MockStore::new(kv), client);

        let snapshot = block_on(service.bootstrap());
        assert_eq!(snapshot.user.unwrap().id, "hosted-user");
        assert_eq!(snapshot.session, Some(session));
        assert!(snapshot.profile.is_none());
        assert!(!snapshot.loading);
    }

    #[test]
    fn test_hosted_upgrade_is_intent_only() {
        let kv = Rc::new(MemoryStorage::default());
        let client = Rc::new(BackendClient::new(
            BackendConfig::hosted("https://project.supabase.co", "anon"),
            kv.clone(),
        ));
        let service = AuthService::new(AuthMode::Hosted, MockStore::new(kv), client);
        assert_eq!(block_on(service.upgrade_to_pro()).unwrap(), None);
    }

    #[test]
    fn test_hosted_bootstrap_failure_falls_back_to_mock_store() {
        let kv = Rc::new(MemoryStorage::default());
        let expired = Session {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            token_type: "bearer".to_string(),
            expires_in: None,
            expires_at: Some(1),
            user: User {
                id: "hosted-user".to_string(),
                email: Some("h@x.test".to_string()),
            },
        };
        set_json(&*kv, "bookbuddy.auth.session", &expired).unwrap();

        let mock = MockStore::new(kv.clone());
        mock_auth::sign_in(&mock, DEMO_EMAIL, DEMO_PASSWORD).unwrap();

        // Refresh cannot be sent, so restoring the session errors out
        let client = Rc::new(BackendClient::new(BackendConfig::hosted("not a url", "anon"), kv.clone()));
        let service = AuthService::new(AuthMode::Hosted, mock.clone(), client);

        let snapshot = block_on(service.bootstrap());
        assert_eq!(snapshot, AuthSnapshot::from_mock_store(&mock));
        assert_eq!(snapshot.user.unwrap().id, DEMO_USER_ID);
        assert!(!snapshot.loading);
    }

    #[test]
    fn test_bootstrap_after_unmount_yields_nothing() {
        let service = mock_service();
        block_on(service.sign_in(DEMO_EMAIL, DEMO_PASSWORD)).unwrap();

        let mounted = Cell::new(true);
        assert!(block_on(service.bootstrap_while(&mounted)).is_some());

        mounted.set(false);
        assert_eq!(block_on(service.bootstrap_while(&mounted)), None);
    }

    #[test]
    fn test_merge_keeps_profile_for_same_user() {
        let user = User {
            id: "u1".to_string(),
            email: Some("u1@x.test".to_string()),
        };
        let loaded = Profile::free("u1", "u1@x.test");
        let refreshed = AuthSnapshot::from_session(None);
        let mut same = refreshed.clone();
        same.user = Some(user.clone());

        let merged = same.clone().merge_into(Some("u1"), Some(loaded.clone()));
        assert_eq!(merged.profile, Some(loaded.clone()));

        // A different user never inherits the old profile
        let merged = same.clone().merge_into(Some("u2"), Some(loaded.clone()));
        assert_eq!(merged.profile, None);

        // Signed out stays without profile
        let merged = refreshed.merge_into(Some("u1"), Some(loaded.clone()));
        assert_eq!(merged.profile, None);

        // A snapshot that carries a profile wins
        let mut upgraded = loaded.clone();
        upgraded.is_pro = true;
        let mut carrying = same;
        carrying.profile = Some(upgraded.clone());
        assert_eq!(carrying.merge_into(Some("u1"), Some(loaded)).profile, Some(upgraded));
    }
}
