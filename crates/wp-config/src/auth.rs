//! Password gate configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Shared password exchanged for a bearer token at `POST /api/login`.
    #[serde(default)]
    pub password: String,
}

impl AuthConfig {
    /// Check if a password has been set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        assert!(!AuthConfig::default().is_configured());
    }

    #[test]
    fn configured_when_password_set() {
        let config = AuthConfig {
            password: "hunter2".into(),
        };
        assert!(config.is_configured());
    }
}
