//! Short key generation and custom alias validation.
//!
//! Generated keys are drawn from the lowercase base-36 alphabet. Custom
//! aliases accept a wider alphabet so users can pick readable names.

use crate::error::RegistryError;
use rand::Rng;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Default length of generated keys (36^6 ≈ 2.2 billion combinations).
pub const DEFAULT_KEY_LENGTH: usize = 6;

/// Maximum length of a custom alias.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Alphabet used for generated keys.
const KEY_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Compiled regex for custom alias validation.
static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("alias regex is valid"));

/// Generates a random key of `length` base-36 characters.
///
/// Uniqueness is not checked here; the registry pairs this with an atomic
/// insert and retries on collision.
///
/// # Examples
///
/// ```ignore
/// let key = generate_key(6);
/// assert_eq!(key.len(), 6);
/// assert!(key.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
/// ```
pub fn generate_key(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| KEY_ALPHABET[rng.random_range(0..KEY_ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-provided custom alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, underscore, hyphen
///
/// # Errors
///
/// Returns [`RegistryError::InvalidAlias`] if any rule is violated.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_alias("ok_alias-1").is_ok());
/// assert!(validate_alias("").is_err());
/// assert!(validate_alias("bad alias!").is_err());
/// ```
pub fn validate_alias(alias: &str) -> Result<(), RegistryError> {
    if ALIAS_REGEX.is_match(alias) {
        return Ok(());
    }

    Err(RegistryError::invalid_alias(
        "Invalid custom alias format",
        json!({
            "alias": alias,
            "provided_length": alias.chars().count(),
            "max_length": MAX_ALIAS_LENGTH,
        }),
    ))
}
