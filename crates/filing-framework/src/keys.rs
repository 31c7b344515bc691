//! Key and etag generation.
//!
//! Resource keys follow one schema:
//!
//! - `resource_key(parent, name)` - `base64url(sha256("{parent}-{name}"))`, stable
//! - `random_key(parent, name)` - `base64url(sha256("{parent}-{name}-{uuid}"))`, one per list item
//!
//! Keys are fixed length (43 characters) and safe to embed in URLs.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Hash an arbitrary seed into a URL-safe key.
#[inline]
pub fn generate(seed: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha256::digest(seed.as_bytes()))
}

/// Deterministic key for a singleton resource under `parent_id`.
#[inline]
pub fn resource_key(parent_id: &str, resource_name: &str) -> String {
    generate(&format!("{}-{}", parent_id, resource_name))
}

/// Randomized key for an item of a list-type resource under `parent_id`.
pub fn random_key(parent_id: &str, resource_name: &str) -> String {
    generate(&format!("{}-{}-{}", parent_id, resource_name, Uuid::new_v4()))
}

/// A fresh etag, regenerated on every write.
pub fn generate_etag() -> String {
    hex::encode(Sha256::digest(Uuid::new_v4().as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_key_is_deterministic() {
        let first = resource_key("ca-123", "debtors");
        let second = resource_key("ca-123", "debtors");
        assert_eq!(first, second);
        assert_eq!(first, generate("ca-123-debtors"));
        assert_eq!(first.len(), 43);
    }

    #[test]
    fn test_resource_key_depends_on_parent_and_name() {
        let debtors = resource_key("ca-123", "debtors");
        assert_ne!(debtors, resource_key("ca-456", "debtors"));
        assert_ne!(debtors, resource_key("ca-123", "stocks"));
    }

    #[test]
    fn test_keys_are_url_safe() {
        let key = resource_key("ca-123", "small-full");
        assert!(key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_random_keys_differ() {
        let a = random_key("ca-123", "directors");
        let b = random_key("ca-123", "directors");
        assert_ne!(a, b);
        assert_ne!(a, resource_key("ca-123", "directors"));
    }

    #[test]
    fn test_etag_is_hex_and_fresh() {
        let etag = generate_etag();
        assert_eq!(etag.len(), 64);
        assert!(etag.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(etag, generate_etag());
    }
}
