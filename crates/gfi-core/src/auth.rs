// SPDX-License-Identifier: Apache-2.0

//! Credential resolution for both providers.
//!
//! Tokens live in the process environment only; their absence is a fatal,
//! non-retryable configuration error surfaced per request rather than at
//! startup. The [`TokenProvider`] trait is the seam that lets the CLI (or
//! tests) supply credentials without touching the environment.

use secrecy::SecretString;
use tracing::debug;

/// Environment variables checked for the GitHub token, in priority order.
pub const GITHUB_TOKEN_VARS: [&str; 2] = ["GFI_GITHUB_TOKEN", "GITHUB_TOKEN"];

/// Environment variables checked for the GitLab token, in priority order.
pub const GITLAB_TOKEN_VARS: [&str; 2] = ["GFI_GITLAB_TOKEN", "GITLAB_TOKEN"];

/// Human-readable hint naming the GitHub token variables.
pub const GITHUB_TOKEN_HINT: &str = "GFI_GITHUB_TOKEN or GITHUB_TOKEN";

/// Human-readable hint naming the GitLab token variables.
pub const GITLAB_TOKEN_HINT: &str = "GFI_GITLAB_TOKEN or GITLAB_TOKEN";

/// Source of API credentials for the search client.
pub trait TokenProvider {
    /// GitHub bearer token, if available.
    fn github_token(&self) -> Option<SecretString>;

    /// GitLab private token, if available.
    fn gitlab_token(&self) -> Option<SecretString>;
}

/// Resolves tokens from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvTokenProvider;

impl TokenProvider for EnvTokenProvider {
    fn github_token(&self) -> Option<SecretString> {
        resolve_from(&GITHUB_TOKEN_VARS)
    }

    fn gitlab_token(&self) -> Option<SecretString> {
        resolve_from(&GITLAB_TOKEN_VARS)
    }
}

/// Returns the first non-empty value among the given environment
/// variables.
fn resolve_from(vars: &[&str]) -> Option<SecretString> {
    for var in vars {
        if let Ok(value) = std::env::var(var)
            && !value.is_empty()
        {
            debug!(var, "Using token from environment variable");
            return Some(SecretString::from(value));
        }
    }
    debug!(vars = ?vars, "No token found in environment");
    None
}

/// Reports which of the given environment variables currently holds a
/// token, without exposing its value.
#[must_use]
pub fn token_source(vars: &'static [&'static str]) -> Option<&'static str> {
    for &var in vars {
        if let Ok(value) = std::env::var(var)
            && !value.is_empty()
        {
            return Some(var);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear(vars: &[&str]) {
        for var in vars {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    #[serial]
    fn env_provider_returns_none_when_unset() {
        clear(&GITHUB_TOKEN_VARS);
        assert!(EnvTokenProvider.github_token().is_none());
    }

    #[test]
    #[serial]
    fn gfi_prefixed_variable_wins() {
        clear(&GITHUB_TOKEN_VARS);
        unsafe {
            std::env::set_var("GFI_GITHUB_TOKEN", "prefixed");
            std::env::set_var("GITHUB_TOKEN", "plain");
        }

        assert!(EnvTokenProvider.github_token().is_some());
        assert_eq!(token_source(&GITHUB_TOKEN_VARS), Some("GFI_GITHUB_TOKEN"));

        clear(&GITHUB_TOKEN_VARS);
    }

    #[test]
    #[serial]
    fn empty_variable_is_ignored() {
        clear(&GITLAB_TOKEN_VARS);
        unsafe {
            std::env::set_var("GFI_GITLAB_TOKEN", "");
            std::env::set_var("GITLAB_TOKEN", "fallback");
        }

        assert_eq!(token_source(&GITLAB_TOKEN_VARS), Some("GITLAB_TOKEN"));

        clear(&GITLAB_TOKEN_VARS);
    }
}
