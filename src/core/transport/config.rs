//! Transport selection and per-transport listener settings.
//!
//! Everything here can be read from the environment (`MCP_TRANSPORT` and
//! the `MCP_TCP_*` / `MCP_HTTP_*` variables) or deserialized from a tagged
//! JSON object such as `{"type": "http", "port": 9000}`.

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");

/// Which transport the server listens on, with its settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// One MCP session over stdin/stdout.
    #[cfg(feature = "stdio")]
    Stdio,

    /// One MCP session per accepted TCP connection.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// Stateless JSON-RPC over HTTP `POST`.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// Listener settings for the TCP transport.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TcpConfig {
    pub host: String,
    pub port: u16,
}

/// Listener and routing settings for the HTTP transport.
#[cfg(feature = "http")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,

    /// Route the JSON-RPC handler is mounted on.
    pub rpc_path: String,

    /// Answer cross-origin requests from any origin.
    pub enable_cors: bool,
}

#[cfg(any(feature = "tcp", feature = "http"))]
const LOOPBACK: &str = "127.0.0.1";

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            host: LOOPBACK.to_string(),
            port: 3000,
        }
    }
}

#[cfg(feature = "tcp")]
impl TcpConfig {
    /// Read `MCP_TCP_HOST` and `MCP_TCP_PORT`, keeping defaults for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or("MCP_TCP_HOST", defaults.host),
            port: env_or("MCP_TCP_PORT", defaults.port),
        }
    }

    /// `host:port` to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: LOOPBACK.to_string(),
            port: 8080,
            rpc_path: "/mcp".to_string(),
            enable_cors: true,
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// Read `MCP_HTTP_HOST`, `MCP_HTTP_PORT`, `MCP_HTTP_PATH` and
    /// `MCP_HTTP_CORS`, keeping defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or("MCP_HTTP_HOST", defaults.host),
            port: env_or("MCP_HTTP_PORT", defaults.port),
            rpc_path: env_or("MCP_HTTP_PATH", defaults.rpc_path),
            enable_cors: env_flag("MCP_HTTP_CORS", defaults.enable_cors),
        }
    }

    /// `host:port` to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse `key` from the environment, or return `fallback`.
#[cfg(any(feature = "tcp", feature = "http"))]
fn env_or<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(fallback)
}

/// Boolean switch: only `false`, `0`, `no` and `off` turn it off.
#[cfg(feature = "http")]
fn env_flag(key: &str, fallback: bool) -> bool {
    match std::env::var(key) {
        Ok(raw) => !matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "false" | "0" | "no" | "off"
        ),
        Err(_) => fallback,
    }
}

impl Default for TransportConfig {
    #[cfg(feature = "stdio")]
    fn default() -> Self {
        Self::Stdio
    }

    #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
    fn default() -> Self {
        Self::Tcp(TcpConfig::default())
    }

    #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
    fn default() -> Self {
        Self::Http(HttpConfig::default())
    }
}

impl TransportConfig {
    /// Pick the transport named by `MCP_TRANSPORT`.
    ///
    /// Unknown or disabled names select the default transport.
    pub fn from_env() -> Self {
        let kind = std::env::var("MCP_TRANSPORT").unwrap_or_default();

        match kind.trim().to_ascii_lowercase().as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig::from_env()),
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_env()),
            _ => Self::default(),
        }
    }

    /// Short transport name, as accepted by `MCP_TRANSPORT`.
    pub fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "stdio",
            #[cfg(feature = "tcp")]
            Self::Tcp(_) => "tcp",
            #[cfg(feature = "http")]
            Self::Http(_) => "http",
        }
    }
}

impl fmt::Display for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => f.write_str("stdio"),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => write!(f, "tcp://{}", cfg.address()),
            #[cfg(feature = "http")]
            Self::Http(cfg) => write!(f, "http://{}{}", cfg.address(), cfg.rpc_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "stdio")]
    #[test]
    fn test_default_is_stdio() {
        let config = TransportConfig::default();
        assert_eq!(config.kind(), "stdio");
        assert_eq!(config.to_string(), "stdio");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_config_fills_missing_fields() {
        let config: TransportConfig =
            serde_json::from_str(r#"{"type": "http", "port": 9000}"#).unwrap();
        let TransportConfig::Http(cfg) = config else {
            panic!("expected http transport");
        };
        assert_eq!(
            cfg,
            HttpConfig {
                port: 9000,
                ..HttpConfig::default()
            }
        );
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_display_includes_path() {
        let config = TransportConfig::Http(HttpConfig {
            rpc_path: "/rpc".to_string(),
            ..HttpConfig::default()
        });
        assert_eq!(config.kind(), "http");
        assert_eq!(config.to_string(), "http://127.0.0.1:8080/rpc");
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_display() {
        let config = TransportConfig::Tcp(TcpConfig::default());
        assert_eq!(config.to_string(), "tcp://127.0.0.1:3000");
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_from_env_ignores_bad_port() {
        unsafe {
            std::env::set_var("MCP_TCP_PORT", "not-a-port");
            std::env::set_var("MCP_TCP_HOST", "0.0.0.0");
        }
        let config = TcpConfig::from_env();
        unsafe {
            std::env::remove_var("MCP_TCP_PORT");
            std::env::remove_var("MCP_TCP_HOST");
        }
        assert_eq!(config.address(), "0.0.0.0:3000");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_env_flag_values() {
        for (raw, expected) in [("false", false), ("OFF", false), ("0", false), ("yes", true)] {
            unsafe {
                std::env::set_var("MCP_TEST_CORS_FLAG", raw);
            }
            assert_eq!(env_flag("MCP_TEST_CORS_FLAG", true), expected, "{raw}");
        }
        unsafe {
            std::env::remove_var("MCP_TEST_CORS_FLAG");
        }
        assert!(env_flag("MCP_TEST_CORS_FLAG", true));
    }
}
