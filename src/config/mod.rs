// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the router status tool
//!
//! Loads router connection settings from command-line flags, falling back to
//! environment variables (and a `.env` file) for every flag.

use std::time::Duration;

use clap::Parser;

use crate::error::{AppError, Result};

#[cfg(test)]
mod tests;

/// Default configuration values
pub mod defaults {
    pub const USERNAME: &str = "admin";
    pub const TIMEOUT_SECS: u64 = 10;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const HOST: &str = "ROUTER_HOST";
    pub const USERNAME: &str = "ROUTER_USERNAME";
    pub const PASSWORD: &str = "ROUTER_PASSWORD";
    pub const HTTPS: &str = "ROUTER_HTTPS";
    pub const VERIFY_SSL: &str = "ROUTER_VERIFY_SSL";
    pub const TIMEOUT_SECONDS: &str = "ROUTER_TIMEOUT_SECONDS";
}

/// Connection settings for a single TP-Link router
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tplink-router-status",
    version,
    about = "Fetch TP-Link router status"
)]
pub struct RouterConfig {
    /// Router IP address
    #[arg(long, env = env_vars::HOST)]
    pub host: String,

    /// Router username
    #[arg(long, env = env_vars::USERNAME, default_value = defaults::USERNAME)]
    pub username: String,

    /// Router password
    #[arg(long, env = env_vars::PASSWORD, hide_env_values = true)]
    pub password: String,

    /// Use HTTPS
    #[arg(long, env = env_vars::HTTPS)]
    pub https: bool,

    /// Verify the router TLS certificate
    #[arg(long = "verify-ssl", env = env_vars::VERIFY_SSL)]
    pub verify_ssl: bool,

    /// Per-request timeout
    #[arg(
        long = "timeout",
        value_name = "SECONDS",
        env = env_vars::TIMEOUT_SECONDS,
        default_value_t = defaults::TIMEOUT_SECS
    )]
    pub timeout_secs: u64,
}

impl RouterConfig {
    /// Validates router configuration
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] for an empty host or username, or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(AppError::Config("Router host cannot be empty".to_string()));
        }

        if self.username.trim().is_empty() {
            return Err(AppError::Config(format!(
                "Username cannot be empty for router '{}'",
                self.host
            )));
        }

        if self.timeout_secs == 0 {
            return Err(AppError::Config(
                "Timeout must be at least one second".to_string(),
            ));
        }

        Ok(())
    }

    /// Base URL of the router web interface, without a trailing slash
    ///
    /// An explicit scheme in `host` wins over the `https` flag.
    #[must_use]
    pub fn base_url(&self) -> String {
        let host = self.host.trim().trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            return host.to_string();
        }
        let scheme = if self.https { "https" } else { "http" };
        format!("{scheme}://{host}")
    }

    #[must_use]
    pub fn uses_https(&self) -> bool {
        self.base_url().starts_with("https://")
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
