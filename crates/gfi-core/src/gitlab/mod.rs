// SPDX-License-Identifier: Apache-2.0

//! GitLab integration module.
//!
//! Issue and project listings over the REST API, with header-based page
//! numbers instead of opaque cursors.

pub mod client;
pub mod models;

pub use client::GitLabClient;
