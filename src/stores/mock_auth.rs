//! Offline identity store used when the build has no backend credentials.
//!
//! Accounts, the signed-in user and subscription tiers all live in
//! LocalStorage. The demo account is always accepted.

use std::fmt;

use crate::config::{DEMO_EMAIL, DEMO_PASSWORD, DEMO_USER_ID};
use crate::stores::storage::{MockStore, StorageError};
use crate::stores::types::{MockCredential, MockUser, Profile};
use crate::utils::generate_user_id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
    EmailTaken,
    Storage(StorageError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthError::EmailTaken => write!(f, "Email already registered"),
            AuthError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<StorageError> for AuthError {
    fn from(e: StorageError) -> Self {
        AuthError::Storage(e)
    }
}

/// Sign in with the demo account or a previously registered one
pub fn sign_in(store: &MockStore, email: &str, password: &str) -> Result<MockUser, AuthError> {
    let registered = store
        .credentials()
        .into_iter()
        .find(|c| c.email == email && c.password == password);

    let user = match registered {
        Some(credential) => MockUser {
            id: credential.id,
            email: credential.email,
        },
        None if email == DEMO_EMAIL && password == DEMO_PASSWORD => MockUser {
            id: DEMO_USER_ID.to_string(),
            email: DEMO_EMAIL.to_string(),
        },
        None => return Err(AuthError::InvalidCredentials),
    };

    let profile = store
        .profiles()
        .remove(&user.id)
        .unwrap_or_else(|| Profile::free(&user.id, &user.email));

    store.set_current_user(Some(&user))?;
    store.set_current_profile(Some(&profile))?;

    log::info!("Mock sign-in for {}", user.email);
    Ok(user)
}

/// Register a new account and sign it in
pub fn sign_up(store: &MockStore, email: &str, password: &str) -> Result<MockUser, AuthError> {
    let mut credentials = store.credentials();
    if credentials.iter().any(|c| c.email == email) {
        return Err(AuthError::EmailTaken);
    }

    let id = generate_user_id();
    credentials.push(MockCredential {
        email: email.to_string(),
        password: password.to_string(),
        id: id.clone(),
    });
    store.save_credentials(&credentials)?;

    let profile = Profile::free(&id, email);
    let mut profiles = store.profiles();
    profiles.insert(id.clone(), profile.clone());
    store.save_profiles(&profiles)?;

    let user = MockUser {
        id,
        email: email.to_string(),
    };
    store.set_current_user(Some(&user))?;
    store.set_current_profile(Some(&profile))?;

    log::info!("Registered mock account {} ({})", user.email, user.id);
    Ok(user)
}

/// Mark the signed-in account as Pro. Returns `None` when nobody is signed in.
pub fn upgrade_to_pro(store: &MockStore) -> Result<Option<Profile>, AuthError> {
    let Some(user) = store.current_user() else {
        return Ok(None);
    };

    let updated = Profile {
        id: user.id.clone(),
        is_pro: true,
        email: Some(user.email),
    };
    store.set_current_profile(Some(&updated))?;

    let mut profiles = store.profiles();
    profiles.insert(user.id, updated.clone());
    store.save_profiles(&profiles)?;

    log::info!("Mock account {} upgraded to Pro", updated.id);
    Ok(Some(updated))
}

/// Forget the signed-in account; registrations are kept
pub fn sign_out(store: &MockStore) -> Result<(), AuthError> {
    store.set_current_user(None)?;
    store.set_current_profile(None)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::storage::MemoryStorage;
    use std::rc::Rc;

    fn store() -> MockStore {
        MockStore::new(Rc::new(MemoryStorage::default()))
    }

    #[test]
    fn test_demo_sign_in() {
        let store = store();
        let user = sign_in(&store, DEMO_EMAIL, DEMO_PASSWORD).unwrap();
        assert_eq!(user.id, DEMO_USER_ID);
        assert_eq!(store.current_user(), Some(user));

        let profile = store.current_profile().unwrap();
        assert_eq!(profile.id, DEMO_USER_ID);
        assert!(!profile.is_pro);
    }

    #[test]
    fn test_wrong_password_rejected() {
        let store = store();
        let err = sign_in(&store, DEMO_EMAIL, "wrong").unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid email or password");
        assert_eq!(store.current_user(), None);
    }

    #[test]
    fn test_sign_up_then_sign_in_again() {
        let store = store();
        let created = sign_up(&store, "reader@example.com", "hunter2").unwrap();
        assert!(created.id.starts_with("user_"));
        assert_eq!(store.current_user(), Some(created.clone()));
        assert_eq!(store.credentials().len(), 1);
        assert!(!store.profiles()[&created.id].is_pro);

        sign_out(&store).unwrap();
        assert_eq!(store.current_user(), None);
        assert_eq!(store.current_profile(), None);
        assert_eq!(store.credentials().len(), 1);

        let again = sign_in(&store, "reader@example.com", "hunter2").unwrap();
        assert_eq!(again, created);
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let store = store();
        sign_up(&store, "reader@example.com", "one").unwrap();
        let err = sign_up(&store, "reader@example.com", "two").unwrap_err();
        assert_eq!(err, AuthError::EmailTaken);
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(store.credentials().len(), 1);
    }

    #[test]
    fn test_upgrade_persists_across_sessions() {
        let store = store();
        let user = sign_up(&store, "reader@example.com", "pw").unwrap();

        let upgraded = upgrade_to_pro(&store).unwrap().unwrap();
        assert!(upgraded.is_pro);
        assert!(store.current_profile().unwrap().is_pro);

        sign_out(&store).unwrap();
        sign_in(&store, "reader@example.com", "pw").unwrap();
        let profile = store.current_profile().unwrap();
        assert_eq!(profile.id, user.id);
        assert!(profile.is_pro);
    }

    #[test]
    fn test_upgrade_without_user_is_noop() {
        let store = store();
        assert_eq!(upgrade_to_pro(&store).unwrap(), None);
        assert!(store.profiles().is_empty());
    }

    #[test]
    fn test_registered_account_wins_over_demo() {
        let store = store();
        store
            .save_credentials(&[MockCredential {
                email: DEMO_EMAIL.to_string(),
                password: DEMO_PASSWORD.to_string(),
                id: "user_custom".to_string(),
            }])
            .unwrap();
        let user = sign_in(&store, DEMO_EMAIL, DEMO_PASSWORD).unwrap();
        assert_eq!(user.id, "user_custom");
    }
}
