//! GitHub contents-API storage configuration.

use serde::{Deserialize, Serialize};

fn default_data_path() -> String {
    "server/data.json".to_string()
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubConfig {
    /// Personal access token with contents write access.
    #[serde(default)]
    pub token: String,

    /// `owner/name` of the repository holding the document.
    #[serde(default)]
    pub repo: String,

    /// Path of the document inside the repository.
    #[serde(default = "default_data_path")]
    pub data_path: String,

    /// API root. Overridden in tests and for GitHub Enterprise.
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            repo: String::new(),
            data_path: default_data_path(),
            api_base: default_api_base(),
        }
    }
}

impl GitHubConfig {
    /// Check if token and repository are both set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty() && !self.repo.is_empty()
    }

    /// Contents-API URL of the document.
    #[must_use]
    pub fn contents_url(&self) -> String {
        format!(
            "{}/repos/{}/contents/{}",
            self.api_base.trim_end_matches('/'),
            self.repo,
            self.data_path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = GitHubConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.data_path, "server/data.json");
    }

    #[test]
    fn contents_url_joins_parts() {
        let config = GitHubConfig {
            token: "ghp_x".into(),
            repo: "someone/travel-planner".into(),
            api_base: "https://api.github.com/".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert_eq!(
            config.contents_url(),
            "https://api.github.com/repos/someone/travel-planner/contents/server/data.json"
        );
    }
}
