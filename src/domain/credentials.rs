//! Credential and virtual-account generation.
//!
//! Generation is random rather than deterministic: usernames get a random
//! digit suffix so repeated names don't collide, passwords are throwaway
//! alphanumerics handed to the registrant once.

use rand::distributions::{Alphanumeric, DistString};
use rand::Rng;

use crate::config::{PASSWORD_LENGTH, USERNAME_SUFFIX_DIGITS, VIRTUAL_ACCOUNT_DIGITS};

/// Derive a username from the registrant's name plus a random digit suffix.
/// Always non-empty, even for names with no usable characters.
pub fn generate_username(name: &str) -> String {
    let slug: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(12)
        .collect::<String>()
        .to_lowercase();

    let base = if slug.is_empty() { "student" } else { &slug };
    format!("{}{}", base, random_digits(USERNAME_SUFFIX_DIGITS))
}

/// Generate a random alphanumeric password
pub fn generate_password() -> String {
    Alphanumeric.sample_string(&mut rand::thread_rng(), PASSWORD_LENGTH)
}

/// Generate a numeric virtual-account identifier
pub fn generate_virtual_account() -> String {
    random_digits(VIRTUAL_ACCOUNT_DIGITS)
}

fn random_digits(count: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| char::from(b'0' + rng.gen_range(0..10))).collect()
}
