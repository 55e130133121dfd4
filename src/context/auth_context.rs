//! Authentication context
//!
//! `AuthProvider` bootstraps the session once, mirrors it into signals and
//! keeps them current while auth events arrive. Pages read the state and
//! trigger sign in/out through `use_auth()`.

use dioxus::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::stores::auth_store::{AuthMode, AuthService, AuthSnapshot, SignUpOutcome};
use crate::stores::backend_client::AuthSubscription;
use crate::stores::types::{Profile, Session, User};

#[derive(Clone, Copy)]
pub struct AuthContext {
    user: Signal<Option<User>>,
    session: Signal<Option<Session>>,
    profile: Signal<Option<Profile>>,
    loading: Signal<bool>,
    mode: AuthMode,
}

impl AuthContext {
    pub fn user(&self) -> Option<User> {
        self.user.read().clone()
    }

    pub fn session(&self) -> Option<Session> {
        self.session.read().clone()
    }

    pub fn profile(&self) -> Option<Profile> {
        self.profile.read().clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn is_pro(&self) -> bool {
        self.profile.read().as_ref().is_some_and(|p| p.is_pro)
    }

    pub fn is_mock(&self) -> bool {
        self.mode == AuthMode::Mock
    }

    fn apply(mut self, snapshot: AuthSnapshot) {
        let current_id = self.user.peek().as_ref().map(|u| u.id.clone());
        let current_profile = self.profile.peek().clone();
        let snapshot = snapshot.merge_into(current_id.as_deref(), current_profile);

        self.profile.set(snapshot.profile);
        self.user.set(snapshot.user);
        self.session.set(snapshot.session);
        self.loading.set(snapshot.loading);
    }

    fn apply_session(mut self, session: Option<Session>) {
        self.user.set(session.as_ref().map(|s| s.user.clone()));
        self.session.set(session);
    }

    fn clear_profile(mut self) {
        self.profile.set(None);
    }

    /// Reload the tier record for the current user
    pub async fn refresh_profile(mut self) {
        let user = self.user.peek().clone();
        match AuthService::current().load_profile(user.as_ref()).await {
            Ok(profile) => self.profile.set(profile),
            Err(e) => log::warn!("Failed to refresh profile: {}", e),
        }
    }

    pub async fn sign_in(self, email: String, password: String) -> Result<(), String> {
        let snapshot = AuthService::current().sign_in(&email, &password).await?;
        self.apply(snapshot);
        Ok(())
    }

    /// Returns `false` when the account still has to be confirmed by email
    pub async fn sign_up(self, email: String, password: String) -> Result<bool, String> {
        match AuthService::current().sign_up(&email, &password).await? {
            SignUpOutcome::SignedIn(snapshot) => {
                self.apply(snapshot);
                Ok(true)
            }
            SignUpOutcome::ConfirmationPending => Ok(false),
        }
    }

    pub async fn sign_out(self) {
        let snapshot = AuthService::current().sign_out().await;
        self.apply(snapshot);
    }

    pub async fn upgrade_to_pro(mut self) -> Result<(), String> {
        if let Some(profile) = AuthService::current().upgrade_to_pro().await? {
            self.profile.set(Some(profile));
        }
        Ok(())
    }
}

#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mode = use_hook(AuthMode::current);
    let user = use_signal(|| None);
    let session = use_signal(|| None);
    let profile = use_signal(|| None);
    let loading = use_signal(|| true);

    let ctx = use_context_provider(|| AuthContext {
        user,
        session,
        profile,
        loading,
        mode,
    });

    let mounted = use_hook(|| Rc::new(Cell::new(true)));
    let subscription: Rc<RefCell<Option<AuthSubscription>>> = use_hook(|| Rc::new(RefCell::new(None)));

    // Bootstrap once on mount
    use_effect({
        let mounted = mounted.clone();
        let subscription = subscription.clone();
        move || {
            let mounted = mounted.clone();
            let subscription = subscription.clone();
            spawn(async move {
                let service = AuthService::current();
                let Some(snapshot) = service.bootstrap_while(&mounted).await else {
                    return;
                };
                ctx.apply(snapshot);

                if service.mode() == AuthMode::Hosted {
                    let listener = service.client().on_auth_state_change(move |event, session| {
                        log::debug!("Auth state change: {:?}", event);
                        if event.changes_session() {
                            ctx.apply_session(session);
                        }
                    });
                    *subscription.borrow_mut() = Some(listener);
                }
            });
        }
    });

    // Profile follows the signed-in user
    let user_id = use_memo(move || user.read().as_ref().map(|u| u.id.clone()));
    use_effect(move || match user_id() {
        None => ctx.clear_profile(),
        Some(_) => {
            spawn(async move {
                ctx.refresh_profile().await;
            });
        }
    });

    use_drop(move || {
        mounted.set(false);
        if let Some(listener) = subscription.borrow_mut().take() {
            listener.unsubscribe();
        }
    });

    rsx! {
        {children}
    }
}

/// Auth state for the current component. Must be rendered under `AuthProvider`.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
