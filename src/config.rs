//! Backend configuration
//!
//! Credentials for the hosted auth/database service are injected at build
//! time through `BOOKBUDDY_BACKEND_URL` and `BOOKBUDDY_BACKEND_ANON_KEY`.
//! When either one is missing the app runs in mock mode and keeps its
//! identities in LocalStorage.

/// Placeholder endpoint used when no credentials are configured
pub const MOCK_BACKEND_URL: &str = "https://mock.supabase.co";
pub const MOCK_ANON_KEY: &str = "mock-key";

/// Demo credentials accepted in mock mode
pub const DEMO_EMAIL: &str = "demo@bookbuddy.test";
pub const DEMO_PASSWORD: &str = "demo1234";
pub const DEMO_USER_ID: &str = "demo-user-id";

const ENV_URL: Option<&str> = option_env!("BOOKBUDDY_BACKEND_URL");
const ENV_ANON_KEY: Option<&str> = option_env!("BOOKBUDDY_BACKEND_ANON_KEY");

/// Connection settings for the backend client
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    pub persist_session: bool,
    pub auto_refresh_token: bool,
    pub detect_session_in_url: bool,
    pub mock: bool,
}

impl BackendConfig {
    /// Resolve the configuration baked into this build
    pub fn from_env() -> Self {
        Self::from_parts(ENV_URL, ENV_ANON_KEY)
    }

    pub fn from_parts(url: Option<&str>, anon_key: Option<&str>) -> Self {
        match credentials(url, anon_key) {
            Some((url, anon_key)) => Self::hosted(url, anon_key),
            None => {
                log::warn!("Missing BOOKBUDDY_BACKEND_URL or BOOKBUDDY_BACKEND_ANON_KEY - using mock client");
                Self::mock()
            }
        }
    }

    pub fn hosted(url: &str, anon_key: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            persist_session: true,
            auto_refresh_token: true,
            detect_session_in_url: true,
            mock: false,
        }
    }

    /// Offline configuration: nothing is persisted, refreshed or read from the URL
    pub fn mock() -> Self {
        Self {
            url: MOCK_BACKEND_URL.to_string(),
            anon_key: MOCK_ANON_KEY.to_string(),
            persist_session: false,
            auto_refresh_token: false,
            detect_session_in_url: false,
            mock: true,
        }
    }
}

fn credentials<'a>(url: Option<&'a str>, anon_key: Option<&'a str>) -> Option<(&'a str, &'a str)> {
    let url = url.map(str::trim).filter(|s| !s.is_empty())?;
    let anon_key = anon_key.map(str::trim).filter(|s| !s.is_empty())?;
    Some((url, anon_key))
}

/// True when the build carries no backend credentials
pub fn is_mock_auth_enabled() -> bool {
    credentials(ENV_URL, ENV_ANON_KEY).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_select_mock() {
        let config = BackendConfig::from_parts(None, Some("key"));
        assert!(config.mock);
        assert_eq!(config.url, MOCK_BACKEND_URL);
        assert!(!config.persist_session);
        assert!(!config.auto_refresh_token);
        assert!(!config.detect_session_in_url);

        let config = BackendConfig::from_parts(Some("https://x.supabase.co"), None);
        assert!(config.mock);
    }

    #[test]
    fn test_blank_credentials_count_as_missing() {
        let config = BackendConfig::from_parts(Some("  "), Some("key"));
        assert!(config.mock);
        let config = BackendConfig::from_parts(Some("https://x.supabase.co"), Some(""));
        assert!(config.mock);
    }

    #[test]
    fn test_hosted_config() {
        let config = BackendConfig::from_parts(Some("https://x.supabase.co/"), Some("anon"));
        assert!(!config.mock);
        assert_eq!(config.url, "https://x.supabase.co");
        assert_eq!(config.anon_key, "anon");
        assert!(config.persist_session);
        assert!(config.auto_refresh_token);
        assert!(config.detect_session_in_url);
    }
}
