// SPDX-License-Identifier: Apache-2.0

//! Error types for the gfi CLI.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur during gfi operations.
#[derive(Error, Debug)]
pub enum GfiError {
    /// Required API credential is missing from the environment.
    ///
    /// This is a configuration error: it is fatal for the request that hit
    /// it and is never retried.
    #[error("{provider} token is not set - export {env_hint} before searching")]
    MissingCredential {
        /// Provider the credential belongs to (e.g. "GitHub").
        provider: &'static str,
        /// Environment variables that would satisfy the lookup.
        env_hint: &'static str,
    },

    /// GitHub API error from octocrab.
    #[error("GitHub API error: {message}")]
    GitHub {
        /// Error message.
        message: String,
    },

    /// GitLab REST API error.
    #[error("GitLab API error: {message}")]
    GitLab {
        /// HTTP status code, when the request reached the server.
        status: Option<u16>,
        /// Error message.
        message: String,
    },

    /// Network/HTTP error from reqwest.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Provider response did not match the expected schema.
    #[error("Invalid response payload from search provider")]
    InvalidResponse(#[source] serde_json::Error),

    /// Pagination cursor could not be interpreted by the provider adapter.
    #[error("Invalid pagination cursor: {value}")]
    InvalidCursor {
        /// The cursor value as received.
        value: String,
    },

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl From<octocrab::Error> for GfiError {
    fn from(err: octocrab::Error) -> Self {
        GfiError::GitHub {
            message: err.to_string(),
        }
    }
}

impl From<config::ConfigError> for GfiError {
    fn from(err: config::ConfigError) -> Self {
        GfiError::Config {
            message: err.to_string(),
        }
    }
}
