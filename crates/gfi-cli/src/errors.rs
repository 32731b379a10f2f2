// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! This module provides a formatting layer that downcasts `anyhow::Error`
//! to `GfiError` and adds hints for different error types. This separates
//! structured error data (library) from user-friendly presentation (CLI).

use anyhow::Error;
use gfi_core::GfiError;

/// Formats an error for CLI display with helpful hints.
///
/// Downcasts `anyhow::Error` to `GfiError` and adds per-variant hints.
/// If the error is not a `GfiError`, returns the original error message.
pub fn format_error(error: &Error) -> String {
    if let Some(gfi_err) = error.downcast_ref::<GfiError>() {
        match gfi_err {
            GfiError::MissingCredential { provider, env_hint } => {
                format!(
                    "{gfi_err}\n\nTip: create a {provider} personal access token and export it as {env_hint}."
                )
            }
            GfiError::GitHub { message: _ } => {
                format!("{gfi_err}\n\nTip: check your GitHub token with `gfi auth status`.")
            }
            GfiError::GitLab { .. } => {
                format!("{gfi_err}\n\nTip: check your GitLab token with `gfi auth status`.")
            }
            GfiError::Network(_) => {
                format!("{gfi_err}\n\nTip: Check your internet connection and try again.")
            }
            GfiError::InvalidResponse(_) => {
                format!(
                    "{gfi_err}\n\nTip: the provider may have changed its API shape. Try again, and update gfi if it keeps happening."
                )
            }
            GfiError::InvalidCursor { value: _ } => {
                format!(
                    "{gfi_err}\n\nTip: cursors are provider-specific and expire with the search. Re-run without --cursor to start from the first page."
                )
            }
            GfiError::Config { message: _ } => {
                format!(
                    "{gfi_err}\n\nTip: Check your config file at {}",
                    gfi_core::config::config_file_path().display()
                )
            }
        }
    } else {
        // Not a GfiError, return the original error chain
        error.to_string()
    }
}
