// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Error types for the router status tool

use serde::Serialize;
use thiserror::Error;

use crate::tplink::RouterError;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Router API error
    #[error(transparent)]
    Router(#[from] RouterError),

    /// Output encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Error code reported to the parent process
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Router(e) => e.into(),
            other => ErrorCode::classify(&other.to_string()),
        }
    }
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;

/// Machine-readable failure category in the JSON output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    MissingDependency,
    AuthFailed,
    Timeout,
    ConnectionError,
}

impl ErrorCode {
    /// Classifies a free-form error message.
    ///
    /// Authentication keywords win over timeout keywords, and anything
    /// unrecognised is reported as a connection error.
    #[must_use]
    pub fn classify(message: &str) -> Self {
        let message = message.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|n| message.contains(n));

        if has(&["auth", "password", "unauthorized", "403"]) {
            Self::AuthFailed
        } else if has(&["timeout", "timed out"]) {
            Self::Timeout
        } else {
            Self::ConnectionError
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingDependency => "MISSING_DEPENDENCY",
            Self::AuthFailed => "AUTH_FAILED",
            Self::Timeout => "TIMEOUT",
            Self::ConnectionError => "CONNECTION_ERROR",
        }
    }
}

impl From<&RouterError> for ErrorCode {
    fn from(error: &RouterError) -> Self {
        match error {
            RouterError::MissingDependency(_) => Self::MissingDependency,
            RouterError::Auth(_) => Self::AuthFailed,
            RouterError::Timeout(_) => Self::Timeout,
            RouterError::Connection(_) => Self::ConnectionError,
            RouterError::Http(_) | RouterError::Protocol(_) => Self::classify(&error.to_string()),
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
