// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Gfi Core
//!
//! Core library for the gfi CLI - good-first-issue discovery across
//! GitHub and GitLab.
//!
//! This crate provides reusable components for:
//! - Query building (GitHub search syntax, GitLab REST parameters)
//! - Provider adapters mapping native responses into canonical issues
//! - Cursor-based pagination across providers and query modes
//! - Client-side result filtering and ordering
//! - Local bookmark persistence
//! - Configuration management
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gfi_core::{EnvTokenProvider, FilterParams, SearchClient, Service, load_config};
//! use anyhow::Result;
//!
//! # async fn example() -> Result<()> {
//! // Load configuration
//! let config = load_config()?;
//!
//! // Describe the search
//! let params = FilterParams::builder()
//!     .service(Service::GitHub)
//!     .min_stars(100)
//!     .max_stars(5000)
//!     .language("Rust")
//!     .build();
//!
//! // Run one page
//! let tokens = EnvTokenProvider;
//! let client = SearchClient::new(&config, &tokens);
//! let page = client.search_page(&params).await;
//! println!("{} issues, more: {}", page.issues.len(), page.has_next_page);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`auth`] - Credential resolution
//! - [`bookmarks`] - Local bookmark persistence
//! - [`config`] - Configuration loading and paths
//! - [`cursor`] - Pagination cursor tracking
//! - [`error`] - Error types
//! - [`filter`] - Filter parameters and the result normalizer
//! - [`github`] - GitHub adapter (GraphQL search)
//! - [`gitlab`] - GitLab adapter (REST listings)
//! - [`query`] - Provider query builders
//! - [`search`] - Search orchestration

// ============================================================================
// Authentication
// ============================================================================

pub use auth::{EnvTokenProvider, TokenProvider};

// ============================================================================
// Error Handling
// ============================================================================

pub use error::GfiError;

/// Convenience Result type for gfi operations.
///
/// This is equivalent to `std::result::Result<T, GfiError>`.
pub type Result<T> = std::result::Result<T, GfiError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AppConfig, GitHubConfig, GitLabConfig, UiConfig, config_dir, config_file_path, data_dir,
    load_config,
};

// ============================================================================
// Data Model
// ============================================================================

pub use issue::{Issue, Page, PrStatus};

// ============================================================================
// Filters and Capabilities
// ============================================================================

pub use filter::{
    FilterParams, LanguageFilter, ProviderCapabilities, QueryMode, Service, apply_post_filters,
};

// ============================================================================
// Pagination
// ============================================================================

pub use cursor::Paginator;

// ============================================================================
// Bookmarks
// ============================================================================

pub use bookmarks::BookmarkSet;

// ============================================================================
// Search Orchestration
// ============================================================================

pub use search::SearchClient;

// ============================================================================
// Utilities
// ============================================================================

pub use utils::{format_relative_time, truncate, truncate_with_suffix};

// ============================================================================
// Modules
// ============================================================================

pub mod auth;
pub mod bookmarks;
pub mod config;
pub mod cursor;
pub mod error;
pub mod filter;
pub mod github;
pub mod gitlab;
pub mod issue;
pub mod query;
pub mod search;
pub mod utils;
