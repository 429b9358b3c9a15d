// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Router client errors

use thiserror::Error;

/// Errors raised while talking to the router
#[derive(Debug, Error)]
pub enum RouterError {
    /// Login rejected or session token refused
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Router did not answer in time
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Router could not be reached
    #[error("Connection error: {0}")]
    Connection(String),

    /// Unexpected HTTP failure
    #[error("HTTP error: {0}")]
    Http(String),

    /// Malformed or failed router response
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// A capability was not compiled into this binary
    #[error("{0}")]
    MissingDependency(String),
}

impl From<reqwest::Error> for RouterError {
    fn from(error: reqwest::Error) -> Self {
        // The login URL carries the password hash in its query
        let error = error.without_url();
        let message = error_chain(&error);
        if error.is_timeout() {
            Self::Timeout(message)
        } else if error.is_connect() {
            Self::Connection(message)
        } else {
            Self::Http(message)
        }
    }
}

/// Renders an error together with its sources, `outer: inner: root`
pub(crate) fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
