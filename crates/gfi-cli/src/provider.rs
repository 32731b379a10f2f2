// SPDX-License-Identifier: Apache-2.0

//! CLI credential source.
//!
//! The CLI resolves tokens from the process environment only; this type
//! exists so the core's [`TokenProvider`] seam stays explicit and tests
//! can substitute their own source.

use gfi_core::{EnvTokenProvider, TokenProvider};
use secrecy::SecretString;

/// Token provider used by CLI commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliTokenProvider;

impl TokenProvider for CliTokenProvider {
    fn github_token(&self) -> Option<SecretString> {
        EnvTokenProvider.github_token()
    }

    fn gitlab_token(&self) -> Option<SecretString> {
        EnvTokenProvider.gitlab_token()
    }
}
