// SPDX-License-Identifier: Apache-2.0

//! Credential status command.

use gfi_core::auth::{GITHUB_TOKEN_VARS, GITLAB_TOKEN_VARS, token_source};

use super::types::AuthStatusResult;

/// Reports which credential environment variables are set, without
/// reading their values into the output.
pub fn run_status() -> AuthStatusResult {
    AuthStatusResult {
        github_token_from: token_source(&GITHUB_TOKEN_VARS),
        gitlab_token_from: token_source(&GITLAB_TOKEN_VARS),
    }
}
