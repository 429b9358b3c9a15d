// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Router login and logout

use std::sync::LazyLock;

use md5::compute as md5_compute;
use regex::Regex;
use reqwest::StatusCode;
use reqwest::header::REFERER;

use super::Session;
use super::protocol::{ActItem, ActType};
use crate::tplink::error::RouterError;

static LOGIN_RESULT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\.ret\s*=\s*(-?\d+)").expect("login result regex"));

static SESSION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"var\s+token\s*=\s*"([^"]+)""#).expect("session token regex"));

/// Hex MD5 digest of the password, as the login form submits it
pub(crate) fn hash_password(password: &str) -> String {
    hex::encode(md5_compute(password.as_bytes()).0)
}

/// Extracts `$.ret` from the login response; `None` when absent
pub(crate) fn login_result_code(body: &str) -> Option<i64> {
    LOGIN_RESULT
        .captures(body)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Extracts the session token embedded in the index page
pub(crate) fn extract_token(page: &str) -> Option<String> {
    SESSION_TOKEN
        .captures(page)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

impl Session {
    pub(crate) async fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<(), RouterError> {
        tracing::trace!("Attempting login for user: {}", username);
        let hashed = hash_password(password);

        let response = self
            .http
            .post(self.url("cgi/login"))
            .query(&[
                ("UserName", username),
                ("Passwd", hashed.as_str()),
                ("Action", "1"),
                ("LoginStatus", "0"),
            ])
            .header(REFERER, self.referer())
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(RouterError::Auth(format!("Login rejected (HTTP {status})")));
        }
        let body = response.error_for_status()?.text().await?;

        match login_result_code(&body) {
            Some(0) => tracing::debug!("Login accepted"),
            Some(code) => {
                tracing::trace!("Login failed with code: {}", code);
                return Err(RouterError::Auth(format!(
                    "Invalid username or password (code {code})"
                )));
            }
            None => {
                return Err(RouterError::Protocol(
                    "Unexpected login response from router".to_string(),
                ));
            }
        }

        // The act endpoints want the token rendered into the index page
        let page = self
            .http
            .get(self.url(""))
            .header(REFERER, self.referer())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let token = extract_token(&page)
            .ok_or_else(|| RouterError::Auth("No session token after login".to_string()))?;
        tracing::trace!("Session token received, length: {}", token.len());
        self.token = Some(token);
        Ok(())
    }

    pub(crate) async fn logout(&mut self) -> Result<(), RouterError> {
        if !self.is_authenticated() {
            return Ok(());
        }
        let result = self
            .act(&[ActItem::new(ActType::Cgi, "/cgi/logout", &[])])
            .await;
        self.token = None;
        result?;
        tracing::debug!("Logged out");
        Ok(())
    }
}
