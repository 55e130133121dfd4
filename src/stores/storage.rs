//! LocalStorage shim
//!
//! Everything the app persists in the browser goes through `KeyValueStore`,
//! so the same logic runs against `MemoryStorage` off-browser.

use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;

use crate::stores::types::{MockCredential, MockUser, Profile};

const MOCK_AUTH_KEY: &str = "mock_auth_user";
const MOCK_PROFILE_KEY: &str = "mock_auth_profile";
const MOCK_USERS_KEY: &str = "mock_users";
const MOCK_PROFILES_KEY: &str = "mock_profiles";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    Serialize(String),
    Write(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StorageError::Serialize(e) => write!(f, "Failed to serialize value: {}", e),
            StorageError::Write(e) => write!(f, "Failed to write to storage: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

/// String key-value persistence
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> Option<String>;
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn delete(&self, key: &str);
}

/// Browser LocalStorage
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_raw(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn delete(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// In-process map with the same semantics as LocalStorage
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStorage {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Storage backing this target: LocalStorage in the browser, memory elsewhere
pub fn default_store() -> Rc<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserStorage)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryStorage::default())
    }
}

/// Read a JSON value; unparseable content reads as absent
pub fn get_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get_raw(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("Ignoring malformed value under {}: {}", key, e);
            None
        }
    }
}

pub fn set_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
    store.set_raw(key, &raw)
}

/// Typed access to the mock identity records
#[derive(Clone)]
pub struct MockStore {
    kv: Rc<dyn KeyValueStore>,
}

impl MockStore {
    pub fn new(kv: Rc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    pub fn browser() -> Self {
        Self::new(default_store())
    }

    pub fn current_user(&self) -> Option<MockUser> {
        get_json(&*self.kv, MOCK_AUTH_KEY)
    }

    /// `None` signs the mock user out
    pub fn set_current_user(&self, user: Option<&MockUser>) -> Result<(), StorageError> {
        match user {
            Some(user) => set_json(&*self.kv, MOCK_AUTH_KEY, user),
            None => {
                self.kv.delete(MOCK_AUTH_KEY);
                Ok(())
            }
        }
    }

    pub fn current_profile(&self) -> Option<Profile> {
        get_json(&*self.kv, MOCK_PROFILE_KEY)
    }

    pub fn set_current_profile(&self, profile: Option<&Profile>) -> Result<(), StorageError> {
        match profile {
            Some(profile) => set_json(&*self.kv, MOCK_PROFILE_KEY, profile),
            None => {
                self.kv.delete(MOCK_PROFILE_KEY);
                Ok(())
            }
        }
    }

    pub fn credentials(&self) -> Vec<MockCredential> {
        get_json(&*self.kv, MOCK_USERS_KEY).unwrap_or_default()
    }

    pub fn save_credentials(&self, credentials: &[MockCredential]) -> Result<(), StorageError> {
        set_json(&*self.kv, MOCK_USERS_KEY, credentials)
    }

    /// Profiles of every registered mock account, keyed by user id
    pub fn profiles(&self) -> BTreeMap<String, Profile> {
        get_json(&*self.kv, MOCK_PROFILES_KEY).unwrap_or_default()
    }

    pub fn save_profiles(&self, profiles: &BTreeMap<String, Profile>) -> Result<(), StorageError> {
        set_json(&*self.kv, MOCK_PROFILES_KEY, profiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (Rc<MemoryStorage>, MockStore) {
        let kv = Rc::new(MemoryStorage::default());
        (kv.clone(), MockStore::new(kv))
    }

    #[test]
    fn test_current_user_round_trip_and_clear() {
        let (kv, store) = store();
        assert_eq!(store.current_user(), None);

        let user = MockUser { id: "u1".to_string(), email: "a@b.test".to_string() };
        store.set_current_user(Some(&user)).unwrap();
        assert_eq!(store.current_user(), Some(user));
        assert!(kv.get_raw(MOCK_AUTH_KEY).is_some());

        store.set_current_user(None).unwrap();
        assert_eq!(store.current_user(), None);
        assert!(kv.get_raw(MOCK_AUTH_KEY).is_none());
    }

    #[test]
    fn test_malformed_value_reads_as_absent() {
        let (kv, store) = store();
        kv.set_raw(MOCK_PROFILE_KEY, "{not json").unwrap();
        assert_eq!(store.current_profile(), None);

        kv.set_raw(MOCK_USERS_KEY, "42").unwrap();
        assert!(store.credentials().is_empty());
    }

    #[test]
    fn test_reads_records_written_by_browser_build() {
        let (kv, store) = store();
        kv.set_raw(
            MOCK_USERS_KEY,
            r#"[{"email":"r@x.test","password":"pw","id":"user_abc"}]"#,
        )
        .unwrap();
        kv.set_raw(
            MOCK_PROFILES_KEY,
            r#"{"user_abc":{"id":"user_abc","email":"r@x.test","is_pro":true}}"#,
        )
        .unwrap();

        let credentials = store.credentials();
        assert_eq!(credentials.len(), 1);
        assert_eq!(credentials[0].id, "user_abc");
        assert!(store.profiles()["user_abc"].is_pro);
    }
}
