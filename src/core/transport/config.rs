//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path for the JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_rpc_path() -> String {
    "/mcp".to_string()
}

fn default_cors() -> bool {
    true
}

/// Default listen port, matching the conventional development setup.
const DEFAULT_PORT: u16 = 3000;

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

impl HttpConfig {
    /// Load transport config from environment variables.
    ///
    /// The port is read once here at startup; nothing re-reads it later.
    pub fn from_env() -> Self {
        let port = std::env::var("MCP_HTTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let host = std::env::var("MCP_HTTP_HOST").unwrap_or_else(|_| default_host());
        let rpc_path = std::env::var("MCP_HTTP_PATH").unwrap_or_else(|_| default_rpc_path());
        let enable_cors = std::env::var("MCP_HTTP_CORS")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true);

        Self {
            port,
            host,
            rpc_path,
            enable_cors,
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        format!("HTTP on {}:{}{}", self.host, self.port, self.rpc_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_port_and_path() {
        let config = HttpConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.rpc_path, "/mcp");
        assert!(config.enable_cors);
    }

    #[test]
    fn test_from_env_overrides() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_HTTP_PORT", "8099");
            std::env::set_var("MCP_HTTP_PATH", "/rpc");
            std::env::set_var("MCP_HTTP_CORS", "false");
        }
        let config = HttpConfig::from_env();
        assert_eq!(config.port, 8099);
        assert_eq!(config.rpc_path, "/rpc");
        assert!(!config.enable_cors);
        unsafe {
            std::env::remove_var("MCP_HTTP_PORT");
            std::env::remove_var("MCP_HTTP_PATH");
            std::env::remove_var("MCP_HTTP_CORS");
        }
    }

    #[test]
    fn test_unparseable_port_falls_back() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_HTTP_PORT", "not-a-port");
        }
        let config = HttpConfig::from_env();
        assert_eq!(config.port, 3000);
        unsafe {
            std::env::remove_var("MCP_HTTP_PORT");
        }
    }

    #[test]
    fn test_description() {
        let config = HttpConfig::default();
        assert_eq!(config.description(), "HTTP on 127.0.0.1:3000/mcp");
    }
}
