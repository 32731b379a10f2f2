// SPDX-License-Identifier: Apache-2.0

//! Canonical, provider-agnostic issue and page types.
//!
//! Every provider adapter maps its native response shape into [`Issue`]
//! records; everything downstream of the adapters (filtering, sorting,
//! rendering, bookmarking) works on this one shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State of the pull request cross-referencing an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrStatus {
    /// The linked pull request is open.
    Open,
    /// The linked pull request is an open draft.
    Draft,
    /// The linked pull request is closed or merged.
    Closed,
}

impl std::fmt::Display for PrStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrStatus::Open => write!(f, "open"),
            PrStatus::Draft => write!(f, "draft"),
            PrStatus::Closed => write!(f, "closed"),
        }
    }
}

/// A beginner-friendly issue, normalized across providers.
///
/// `stars_count` and `fork_count` reflect the parent repository at fetch
/// time; issue records are never persisted beyond the current page
/// (bookmarks store only the `id`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Provider-unique identifier, stable across fetches.
    ///
    /// GitHub uses the issue URL; GitLab uses the stringified numeric id.
    pub id: String,
    /// Issue title.
    pub title: String,
    /// Link to the issue.
    pub html_url: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Link to the parent repository.
    pub repository_url: String,
    /// Repository name, in the provider's display form.
    pub repository_name: String,
    /// Star count of the parent repository.
    pub stars_count: u64,
    /// Fork count of the parent repository.
    pub fork_count: u64,
    /// Primary language of the repository, when the provider reports one.
    pub language: Option<String>,
    /// True iff the issue has at least one assignee.
    pub is_assigned: bool,
    /// Label names in provider order.
    pub labels: Vec<String>,
    /// Comment count.
    pub comments_count: u64,
    /// True when a pull request cross-references this issue (GitHub only).
    pub has_pull_requests: bool,
    /// State of the cross-referencing pull request, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pr_status: Option<PrStatus>,
    /// SPDX id of the repository license, when the repository is licensed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

/// One page of search results.
///
/// Constructed fresh on every search invocation and never mutated after
/// construction. The `end_cursor` of one page is the required input for
/// fetching the next.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Page {
    /// Issues that survived post-filtering, newest first.
    pub issues: Vec<Issue>,
    /// Whether the provider reports more pages. Sole authority for
    /// offering "load more".
    pub has_next_page: bool,
    /// Opaque resume token for the next page, provider-defined.
    pub end_cursor: Option<String>,
    /// Error message when the search failed; the page then carries no
    /// issues and `has_next_page` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Page {
    /// An error page in the uniform result shape: no issues, no next page.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Page {
            issues: Vec::new(),
            has_next_page: false,
            end_cursor: None,
            error: Some(message.into()),
        }
    }
}
