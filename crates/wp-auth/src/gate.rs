//! Shared-password login.

use crate::error::AuthError;
use crate::token_set::TokenSet;

/// Exchanges the configured password for bearer tokens.
#[derive(Debug, Clone)]
pub struct PasswordGate {
    password: String,
    tokens: TokenSet,
}

impl PasswordGate {
    #[must_use]
    pub fn new(password: impl Into<String>, tokens: TokenSet) -> Self {
        Self {
            password: password.into(),
            tokens,
        }
    }

    /// The token set this gate issues into.
    #[must_use]
    pub const fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    /// Check `password` and issue a token on success.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidPassword` on mismatch (including when no
    /// password is configured) and `AuthError::RngUnavailable` if a token
    /// cannot be minted.
    pub fn login(&self, password: &str) -> Result<String, AuthError> {
        if self.password.is_empty() || !constant_time_eq(self.password.as_bytes(), password.as_bytes()) {
            tracing::warn!("login rejected: wrong password");
            return Err(AuthError::InvalidPassword);
        }
        self.tokens.issue()
    }

    /// Revoke a token. Always succeeds.
    pub fn logout(&self, token: &str) {
        self.tokens.revoke(token);
    }
}

/// Byte comparison whose running time depends only on the lengths.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
