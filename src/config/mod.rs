//! Runtime configuration, read from flags or environment

use clap::Parser;
use std::net::{IpAddr, SocketAddr};

use crate::shared::constants::{DEFAULT_BACKEND_URL, DEFAULT_MAX_BODY_BYTES};

#[derive(Debug, Clone, Parser)]
#[command(name = "session-gateway")]
#[command(about = "Forward auth and task requests to the backend API, relaying session cookies")]
pub struct GatewayConfig {
    /// Base URL of the backend API
    #[arg(long, env = "BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Address to bind
    #[arg(long, env = "GATEWAY_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Largest request body accepted (task file uploads)
    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,
}

impl GatewayConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = GatewayConfig::try_parse_from([
            "session-gateway",
            "--backend-url",
            "http://api.internal:9000",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
        ])
        .unwrap();

        assert_eq!(config.backend_url, "http://api.internal:9000");
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_host_rejected() {
        let result = GatewayConfig::try_parse_from(["session-gateway", "--host", "not-an-ip"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_matches_documented_values() {
        let config = GatewayConfig::default();
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.max_body_bytes, 10 * 1024 * 1024);
    }
}
