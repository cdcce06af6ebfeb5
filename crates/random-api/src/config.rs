//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use random_org_client::reqwest_transport::DEFAULT_TIMEOUT;
use random_range::domain::endpoint::DEFAULT_BASE_URL;

use crate::error::AppError;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address (`HOST`).
    pub host: String,
    /// Bind port (`PORT`).
    pub port: u16,
    /// Base URL of the integer service (`RANDOM_ORG_BASE_URL`).
    pub random_org_base_url: String,
    /// Outbound request timeout (`HTTP_TIMEOUT_SECS`).
    pub http_timeout: Duration,
}

impl ServerConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults
    /// for unset keys.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_owned());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => 3000,
        };

        let random_org_base_url =
            lookup("RANDOM_ORG_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        if !(random_org_base_url.starts_with("http://")
            || random_org_base_url.starts_with("https://"))
        {
            return Err(AppError::Config(format!(
                "RANDOM_ORG_BASE_URL must be an http(s) URL, got '{random_org_base_url}'"
            )));
        }

        let timeout_secs: u64 = match lookup("HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|e| {
                AppError::Config(format!("HTTP_TIMEOUT_SECS must be a whole number: {e}"))
            })?,
            None => DEFAULT_TIMEOUT.as_secs(),
        };
        if timeout_secs == 0 {
            return Err(AppError::Config(
                "HTTP_TIMEOUT_SECS must be greater than zero".to_owned(),
            ));
        }

        Ok(Self {
            host,
            port,
            random_org_base_url,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Socket address to bind the listener to.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` is not a valid address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}
