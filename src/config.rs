//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Address to bind the HTTP server on.
    #[serde(default = "default_host")]
    pub host: String,

    /// Environment label shown by `/health`. Display only.
    #[serde(default = "default_app_env")]
    pub app_env: String,

    // === Observability ===
    /// Port for the Prometheus exporter; disabled when unset.
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_app_env() -> String {
    "production".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            app_env: default_app_env(),
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.app_env.trim().is_empty() {
            return Err("APP_ENV must not be empty".to_string());
        }

        if self.host.parse::<IpAddr>().is_err() {
            return Err(format!("HOST is not a valid IP address: {}", self.host));
        }

        if self.metrics_port == Some(self.port) {
            return Err("METRICS_PORT must differ from PORT".to_string());
        }

        Ok(())
    }

    /// Socket address the HTTP server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .map_err(|e| format!("invalid HOST {}: {}", self.host, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Socket address for the Prometheus exporter, if enabled.
    pub fn metrics_addr(&self) -> Option<SocketAddr> {
        let ip = self.host.parse::<IpAddr>().ok()?;
        self.metrics_port.map(|port| SocketAddr::new(ip, port))
    }
}
