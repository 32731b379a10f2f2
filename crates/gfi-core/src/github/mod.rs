// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! Direct issue search and topic-anchored repository search over the
//! GraphQL search API.

use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::GfiError;

pub mod graphql;
pub mod search;

/// Creates an authenticated GitHub client from a bearer token.
pub fn create_client(token: &SecretString) -> Result<Octocrab, GfiError> {
    let client = Octocrab::builder()
        .personal_token(token.expose_secret().to_string())
        .build()?;

    debug!("Created authenticated GitHub client");
    Ok(client)
}
