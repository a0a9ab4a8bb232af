/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables.
 * `main` calls `dotenv` first, so a `.env` file in the working directory
 * works too.
 *
 * # Variables
 *
 * | Variable               | Default                   |
 * |------------------------|---------------------------|
 * | `SERVER_HOST`          | `0.0.0.0`                 |
 * | `SERVER_PORT`          | `8080`                    |
 * | `DATABASE_URL`         | `sqlite://stickyboard.db` |
 * | `CORS_ALLOWED_ORIGINS` | any origin                |
 * | `RELAY_CAPACITY`       | `1000`                    |
 *
 * # Error Handling
 *
 * Unlike optional integrations, the database and bind address are required:
 * an unparsable value is a `ConfigError` and startup stops.
 */

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://stickyboard.db";
pub const DEFAULT_RELAY_CAPACITY: usize = 1000;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    /// Origins allowed by CORS; empty means any origin
    pub cors_origins: Vec<String>,
    /// Buffered frames per relay channel before slow subscribers lag
    pub relay_capacity: usize,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(host) = lookup("SERVER_HOST") {
            let parsed = host.parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_HOST",
                value: host.clone(),
            })?;
            builder = builder.host(parsed);
        }

        if let Some(port) = lookup("SERVER_PORT") {
            let parsed = port.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                value: port.clone(),
            })?;
            builder = builder.port(parsed);
        }

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }

        if let Some(origins) = lookup("CORS_ALLOWED_ORIGINS") {
            let origins = origins
                .split(',')
                .map(|o| o.trim())
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
            builder = builder.cors_origins(origins);
        }

        if let Some(capacity) = lookup("RELAY_CAPACITY") {
            let parsed = capacity.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                name: "RELAY_CAPACITY",
                value: capacity.clone(),
            })?;
            builder = builder.relay_capacity(parsed);
        }

        builder.build()
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if self.relay_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                name: "RELAY_CAPACITY",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            cors_origins: Vec::new(),
            relay_capacity: DEFAULT_RELAY_CAPACITY,
        }
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    host: Option<IpAddr>,
    port: Option<u16>,
    database_url: Option<String>,
    cors_origins: Option<Vec<String>>,
    relay_capacity: Option<usize>,
}

impl ServerConfigBuilder {
    pub fn host(mut self, host: IpAddr) -> Self {
        self.host = Some(host);
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    pub fn relay_capacity(mut self, capacity: usize) -> Self {
        self.relay_capacity = Some(capacity);
        self
    }

    /// Build the configuration, filling unset values with defaults
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let defaults = ServerConfig::default();
        let config = ServerConfig {
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
            database_url: self.database_url.unwrap_or(defaults.database_url),
            cors_origins: self.cors_origins.unwrap_or(defaults.cors_origins),
            relay_capacity: self.relay_capacity.unwrap_or(defaults.relay_capacity),
        };
        config.validate()?;
        Ok(config)
    }
}
