//! Configuration management for the calculator server and agent.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure.
///
/// This struct contains all configurable aspects of the server and the agent
/// client, organized by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Agent client configuration.
    pub agent: AgentConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the agent client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// URL of the calculator server's streamable HTTP endpoint.
    pub endpoint: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8000/mcp".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "calculator-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            agent: AgentConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_AGENT_ENDPOINT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(endpoint) = std::env::var("MCP_AGENT_ENDPOINT") {
            config.agent.endpoint = endpoint;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.name, "calculator-server");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.agent.endpoint, "http://127.0.0.1:8000/mcp");
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "custom-calculator");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "custom-calculator");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }

    #[test]
    fn test_agent_endpoint_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_AGENT_ENDPOINT", "http://localhost:9999/mcp");
        }
        let config = Config::from_env();
        assert_eq!(config.agent.endpoint, "http://localhost:9999/mcp");
        unsafe {
            std::env::remove_var("MCP_AGENT_ENDPOINT");
        }
    }
}
