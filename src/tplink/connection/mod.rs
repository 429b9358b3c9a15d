// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Low-level HTTP session with the router web interface

mod auth;
mod parse;
mod protocol;

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, REFERER};

use crate::config::RouterConfig;
use crate::tplink::error::RouterError;

pub(crate) use parse::{
    firmware_acts, ipv4_status_acts, lte_status_acts, parse_firmware, parse_ipv4_status,
    parse_lte_status, parse_status, status_acts,
};
pub use protocol::{ActItem, ActResponse, ActType, encode_acts, parse_response};

/// Connection timeout (5 seconds), capped by the request timeout
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Header carrying the session token on act requests
const TOKEN_HEADER: &str = "TokenID";

/// HTTP session with one router
pub(super) struct Session {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl Session {
    /// Builds the HTTP client for the router described by `config`
    pub(super) fn new(config: &RouterConfig) -> Result<Self, RouterError> {
        let base_url = config.base_url();
        let timeout = config.timeout();

        let builder = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .connect_timeout(CONNECTION_TIMEOUT.min(timeout));
        let builder = configure_tls(builder, config)?;
        let http = builder
            .build()
            .map_err(|e| RouterError::Http(format!("Failed to build HTTP client: {e}")))?;

        tracing::debug!("Prepared session for {}", base_url);
        Ok(Self {
            http,
            base_url,
            token: None,
        })
    }

    pub(super) fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn referer(&self) -> String {
        format!("{}/", self.base_url)
    }

    /// Sends one act request and parses the response
    pub(super) async fn act(&self, acts: &[ActItem]) -> Result<ActResponse, RouterError> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| RouterError::Auth("Not authenticated".to_string()))?;
        let (path, body) = encode_acts(acts);
        tracing::trace!("Sending act request {} with {} acts", path, acts.len());

        let response = self
            .http
            .post(self.url(&path))
            .header(REFERER, self.referer())
            .header(CONTENT_TYPE, "text/plain")
            .header(TOKEN_HEADER, token)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(RouterError::Auth(format!(
                "Router rejected the session token (HTTP {status})"
            )));
        }
        let text = response.error_for_status()?.text().await?;
        parse_response(&text)
    }
}

#[cfg(feature = "https")]
fn configure_tls(
    builder: reqwest::ClientBuilder,
    config: &RouterConfig,
) -> Result<reqwest::ClientBuilder, RouterError> {
    if config.uses_https() && !config.verify_ssl {
        tracing::debug!("TLS certificate verification disabled");
        return Ok(builder.danger_accept_invalid_certs(true));
    }
    Ok(builder)
}

#[cfg(not(feature = "https"))]
fn configure_tls(
    builder: reqwest::ClientBuilder,
    config: &RouterConfig,
) -> Result<reqwest::ClientBuilder, RouterError> {
    if config.uses_https() {
        return Err(RouterError::MissingDependency(
            "HTTPS support not compiled in. Rebuild with the `https` feature".to_string(),
        ));
    }
    Ok(builder)
}
