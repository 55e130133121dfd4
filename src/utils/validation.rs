//! Form validation shared by the login, signup and checkout pages.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Both fields are required; the email must look like an address
pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email is required".to_string());
    }
    if !is_valid_email(email) {
        return Err("Enter a valid email address".to_string());
    }
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("demo@bookbuddy.test"));
        assert!(is_valid_email(" reader@example.com "));
        assert!(!is_valid_email("reader@"));
        assert!(!is_valid_email("reader example@x.com"));
        assert!(!is_valid_email("no-at-sign.com"));
    }

    #[test]
    fn test_validate_credentials() {
        assert!(validate_credentials("demo@bookbuddy.test", "demo1234").is_ok());
        assert_eq!(
            validate_credentials("", "x"),
            Err("Email is required".to_string())
        );
        assert_eq!(
            validate_credentials("nope", "x"),
            Err("Enter a valid email address".to_string())
        );
        assert_eq!(
            validate_credentials("a@b.co", ""),
            Err("Password is required".to_string())
        );
    }
}
