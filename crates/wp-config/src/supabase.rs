//! Supabase configuration for the seed migration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`.
    #[serde(default)]
    pub url: String,

    /// Service-role key. Bypasses row-level security; never ship it to a client.
    #[serde(default)]
    pub service_role_key: String,
}

impl SupabaseConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.service_role_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_both_fields() {
        assert!(!SupabaseConfig::default().is_configured());
        let config = SupabaseConfig {
            url: "https://xyz.supabase.co".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }
}
