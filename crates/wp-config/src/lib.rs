//! # wp-config
//!
//! Layered configuration loading for Waypoint using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`WAYPOINT_*` prefix, `__` as separator)
//! 2. Deployment environment names (`PORT`, `APP_PASSWORD`, `GITHUB_TOKEN`, ...)
//! 3. Project-level `waypoint.toml` (or the file passed with `--config`)
//! 4. User-level `~/.config/waypoint/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `WAYPOINT_SERVER__PORT` -> `server.port`,
//! `WAYPOINT_GITHUB__TOKEN` -> `github.token`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use wp_config::WaypointConfig;
//!
//! let config = WaypointConfig::load_with_dotenv(None).expect("config");
//! println!("listening on {}", config.server.bind_address());
//! ```

mod auth;
mod error;
mod github;
mod server;
mod storage;
mod supabase;

pub use auth::AuthConfig;
pub use error::ConfigError;
pub use github::GitHubConfig;
pub use server::ServerConfig;
pub use storage::{StorageBackend, StorageConfig};
pub use supabase::SupabaseConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Plain environment names used by existing deployments, and the config key
/// each one fills.
const DEPLOYMENT_ENV: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("APP_PASSWORD", "auth.password"),
    ("GITHUB_TOKEN", "github.token"),
    ("GITHUB_REPO", "github.repo"),
    ("SUPABASE_URL", "supabase.url"),
    ("SUPABASE_SERVICE_ROLE_KEY", "supabase.service_role_key"),
];

const LOCAL_CONFIG_FILE: &str = "waypoint.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WaypointConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub github: GitHubConfig,
    #[serde(default)]
    pub supabase: SupabaseConfig,
}

impl WaypointConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `config_file` replaces the project-level `waypoint.toml` when given.
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source fails to parse or a value
    /// has the wrong type.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(config_file).extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(config_file)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = config_file.map_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE), Path::to_path_buf);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
            .merge(Self::deployment_env())
            .merge(Env::prefixed("WAYPOINT_").split("__"))
    }

    /// Which document store to use.
    ///
    /// An explicit `storage.backend` wins; otherwise GitHub is chosen when a
    /// GitHub token is set, and the local file otherwise.
    #[must_use]
    pub fn storage_backend(&self) -> StorageBackend {
        self.storage.backend.unwrap_or(if self.github.token.is_empty() {
            StorageBackend::File
        } else {
            StorageBackend::Github
        })
    }

    /// Check everything `wpt serve` needs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when the password is unset or the
    /// GitHub backend is selected without a token, and
    /// `ConfigError::InvalidValue` when the token is set but the repository
    /// is not.
    pub fn validate_for_server(&self) -> Result<(), ConfigError> {
        if !self.auth.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "auth".into(),
            });
        }
        if self.storage_backend() == StorageBackend::Github && !self.github.is_configured() {
            if self.github.token.is_empty() {
                return Err(ConfigError::NotConfigured {
                    section: "github".into(),
                });
            }
            return Err(ConfigError::InvalidValue {
                field: "github.repo".into(),
                reason: "must be set to owner/name (GITHUB_REPO)".into(),
            });
        }
        if self.storage_backend() == StorageBackend::File && self.storage.data_file.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.data_file".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    fn deployment_env() -> Env {
        Env::raw().filter_map(|key| {
            DEPLOYMENT_ENV
                .iter()
                .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
                .map(|(_, path)| (*path).into())
        })
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("waypoint").join("config.toml"))
    }
}
