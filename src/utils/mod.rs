// Utility functions
// Helper functions for common operations

pub mod format;
pub mod form_state;
pub mod validation;

pub use form_state::FormState;
pub use format::{format_inr, format_inr_amount, pluralize};

/// Generate a random lowercase base-36 suffix (11 characters)
pub fn random_base36() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    (0..11)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

/// Identifier for a locally registered mock account
pub fn generate_user_id() -> String {
    format!("user_{}", random_base36())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_user_id_shape() {
        let id = generate_user_id();
        assert!(id.starts_with("user_"));
        let suffix = &id["user_".len()..];
        assert_eq!(suffix.len(), 11);
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert_ne!(generate_user_id(), generate_user_id());
    }
}
