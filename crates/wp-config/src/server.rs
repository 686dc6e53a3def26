//! HTTP server configuration.

use serde::{Deserialize, Serialize};

const fn default_port() -> u16 {
    3001
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_client_dist() -> String {
    "client/dist".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Built web client. Served with an `index.html` fallback when it exists.
    #[serde(default = "default_client_dist")]
    pub client_dist: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            client_dist: default_client_dist(),
        }
    }
}

impl ServerConfig {
    /// `host:port` for `TcpListener::bind`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
