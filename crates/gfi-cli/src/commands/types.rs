// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers for rendering.

use std::collections::HashSet;

use gfi_core::{Issue, Page, Service};
use serde::Serialize;

/// One rendered page of search results.
#[derive(Serialize)]
pub struct SearchResult {
    /// Provider that produced the page.
    pub service: Service,
    /// Issues to display, newest first.
    pub issues: Vec<Issue>,
    /// Whether more pages exist upstream.
    pub has_next_page: bool,
    /// Resume token for the next page.
    pub end_cursor: Option<String>,
    /// Error message when the search failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Ids of currently bookmarked issues, for display markers.
    #[serde(skip)]
    pub bookmarked_ids: HashSet<String>,
}

impl SearchResult {
    /// Combines a page with the bookmark set, optionally restricting the
    /// display to bookmarked issues only.
    pub fn new(
        page: Page,
        service: Service,
        bookmarks: &gfi_core::BookmarkSet,
        bookmarked_only: bool,
    ) -> Self {
        let issues = if bookmarked_only {
            bookmarks.retain_bookmarked(page.issues)
        } else {
            page.issues
        };

        Self {
            service,
            issues,
            has_next_page: page.has_next_page,
            end_cursor: page.end_cursor,
            error: page.error,
            bookmarked_ids: bookmarks.bookmarks.iter().cloned().collect(),
        }
    }
}

/// Result of toggling a bookmark.
#[derive(Serialize)]
pub struct BookmarkToggleResult {
    /// The toggled issue id.
    pub id: String,
    /// Whether the id is bookmarked after the toggle.
    pub bookmarked: bool,
}

/// The current bookmark list.
#[derive(Serialize)]
pub struct BookmarkListResult {
    /// Bookmarked issue ids, oldest first.
    pub bookmarks: Vec<String>,
}

/// Result of clearing all bookmarks.
#[derive(Serialize)]
pub struct BookmarkClearResult {
    /// How many bookmarks were removed.
    pub removed: usize,
}

/// Credential status per provider.
#[derive(Serialize)]
pub struct AuthStatusResult {
    /// Environment variable holding the GitHub token, when set.
    pub github_token_from: Option<&'static str>,
    /// Environment variable holding the GitLab token, when set.
    pub gitlab_token_from: Option<&'static str>,
}
