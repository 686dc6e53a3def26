//! Document storage selection.

use serde::{Deserialize, Serialize};

/// Where the travel document lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// A JSON file on local disk.
    File,
    /// A JSON file committed to a GitHub repository.
    Github,
}

impl StorageBackend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Github => "github",
        }
    }
}

fn default_data_file() -> String {
    "data.json".to_string()
}

const fn default_create_missing() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Explicit backend. When unset, GitHub is used if it is configured.
    #[serde(default)]
    pub backend: Option<StorageBackend>,

    /// Path of the local JSON document.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Start from an empty two-city document when the file does not exist.
    #[serde(default = "default_create_missing")]
    pub create_missing: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: None,
            data_file: default_data_file(),
            create_missing: default_create_missing(),
        }
    }
}
