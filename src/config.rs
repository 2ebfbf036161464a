//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_host: IpAddr,
    /// HTTP server port
    pub server_port: u16,
    /// Run the character validator in PUT/POST handlers
    pub strict_validation: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `BIND_HOST` - Bind address (default: 0.0.0.0)
    /// - `SERVER_PORT` - HTTP server port (default: 5041)
    /// - `STRICT_VALIDATION` - Validate ids and numbers on write (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_host: env::var("BIND_HOST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.bind_host),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            strict_validation: env::var("STRICT_VALIDATION")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.strict_validation),
        }
    }

    /// Socket address built from host and port.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            server_port: 5041,
            strict_validation: false,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
