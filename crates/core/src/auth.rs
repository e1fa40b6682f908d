//! Credential table and password verification.
//!
//! Digests are unsalted single-pass SHA-256 hex, matching the tables existing
//! deployments already provision. That scheme is rainbow-table weak; it stays
//! confined to this module and must not be reused for anything else.

use std::collections::HashMap;
use std::fmt::Write as _;

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 digest of a password.
pub fn password_digest(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest.iter() {
        let _ = write!(out, "{:02x}", b);
    }
    out
}

/// Username -> password digest, built once at startup and immutable after.
/// Callers pass the table into `verify` explicitly; there is no ambient
/// process-global registry.
#[derive(Clone, Debug)]
pub struct CredentialTable {
    users: HashMap<String, String>,
}

impl CredentialTable {
    pub fn empty() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// Register a user by plaintext password; the digest is computed here.
    pub fn insert_plaintext(&mut self, username: impl Into<String>, password: &str) {
        self.users.insert(username.into(), password_digest(password));
    }

    /// Register a user by precomputed hex digest.
    pub fn insert_digest(&mut self, username: impl Into<String>, digest: impl Into<String>) {
        self.users.insert(username.into(), digest.into().to_ascii_lowercase());
    }

    /// True iff `username` is registered and `password` digests to the stored
    /// value. Unknown user, wrong password and empty inputs all return false;
    /// there is no error path.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        match self.users.get(username) {
            Some(stored) => *stored == password_digest(password),
            None => false,
        }
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for CredentialTable {
    /// Built-in users for deployments that ship no `[users]` table.
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert_plaintext("Moin", "user1");
        table.insert_plaintext("user2", "password2");
        table
    }
}
