//! In-memory set of active bearer tokens.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use wp_core::ids::random_hex;

use crate::error::AuthError;

/// Bytes of randomness per token (hex-encoded to twice as many characters).
const TOKEN_BYTES: usize = 32;

/// Cloneable handle to the process-wide token set.
///
/// Clones share the same underlying set, so the login handler and the auth
/// middleware see each other's changes.
#[derive(Debug, Clone, Default)]
pub struct TokenSet {
    inner: Arc<RwLock<HashSet<String>>>,
}

impl TokenSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh token and mark it active.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::RngUnavailable` if the OS random source fails.
    pub fn issue(&self) -> Result<String, AuthError> {
        let token =
            random_hex(TOKEN_BYTES).map_err(|e| AuthError::RngUnavailable(e.to_string()))?;
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.clone());
        tracing::debug!(active = self.len(), "issued bearer token");
        Ok(token)
    }

    /// Whether `token` is currently active.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(token)
    }

    /// Check a token, mapping absence to `AuthError::InvalidToken`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` if the token is not active.
    pub fn verify(&self, token: &str) -> Result<(), AuthError> {
        if self.contains(token) {
            Ok(())
        } else {
            Err(AuthError::InvalidToken)
        }
    }

    /// Deactivate a token. Revoking an unknown token is a no-op.
    ///
    /// Returns whether the token was active.
    pub fn revoke(&self, token: &str) -> bool {
        let removed = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token);
        if removed {
            tracing::debug!("revoked bearer token");
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
