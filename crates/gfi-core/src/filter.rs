// SPDX-License-Identifier: Apache-2.0

//! Search filters and the client-side result normalizer.
//!
//! [`FilterParams`] is the immutable request shape built by the caller;
//! [`QueryMode`] is derived from it and selects the adapter entry point;
//! [`apply_post_filters`] applies the predicates the provider query could
//! not fully express and fixes the result order.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::issue::Issue;

/// Search provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    /// GitHub, via the GraphQL search API.
    GitHub,
    /// GitLab, via the REST issues/projects API.
    GitLab,
}

impl Service {
    /// The capability contract for this provider.
    ///
    /// Providers intentionally support different filter semantics; this
    /// record makes the differences part of the adapter contract so that
    /// callers and tests can assert per-provider behavior instead of
    /// relying on implicit gaps.
    #[must_use]
    pub fn capabilities(self) -> ProviderCapabilities {
        match self {
            Service::GitHub => ProviderCapabilities {
                language_filter: LanguageFilter::QualifierAnd,
                skips_empty_pages: true,
                isolates_nested_failures: false,
                requires_license: true,
                tracks_pull_requests: true,
            },
            Service::GitLab => ProviderCapabilities {
                language_filter: LanguageFilter::SubstringSearch,
                skips_empty_pages: false,
                isolates_nested_failures: true,
                requires_license: false,
                tracks_pull_requests: false,
            },
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Service::GitHub => write!(f, "github"),
            Service::GitLab => write!(f, "gitlab"),
        }
    }
}

impl std::str::FromStr for Service {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "github" => Ok(Service::GitHub),
            "gitlab" => Ok(Service::GitLab),
            other => Err(format!("unknown service '{other}' (expected github or gitlab)")),
        }
    }
}

/// How a provider interprets the language filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageFilter {
    /// One `language:` qualifier per token; repeated qualifiers are AND-ed,
    /// so multiple tokens require ALL listed languages simultaneously.
    QualifierAnd,
    /// Free-text substring match over issue content, not an exact
    /// language filter.
    SubstringSearch,
}

/// Per-provider filter semantics.
///
/// See [`Service::capabilities`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderCapabilities {
    /// Semantics of the language filter.
    pub language_filter: LanguageFilter,
    /// Whether repository-mode fetches transparently advance past pages
    /// that post-filter to empty.
    pub skips_empty_pages: bool,
    /// Whether a failed nested fan-out request is isolated (logged,
    /// counted as zero issues) instead of failing the whole page.
    pub isolates_nested_failures: bool,
    /// Whether results are restricted to licensed repositories.
    pub requires_license: bool,
    /// Whether pull-request linkage is derived and filterable.
    pub tracks_pull_requests: bool,
}

/// Which adapter entry point a filter set selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// Direct issue search.
    DirectIssues,
    /// Repository search anchored on a category topic, fanning out to
    /// each repository's issues.
    Category,
    /// Repository search anchored on a free-text framework topic.
    Framework,
}

impl QueryMode {
    /// Derives the query mode from a filter set.
    ///
    /// A framework wins over a category; a category of "all" means no
    /// category filter and falls through to direct issue search.
    #[must_use]
    pub fn for_params(params: &FilterParams) -> Self {
        if !params.framework.is_empty() {
            QueryMode::Framework
        } else if !params.category.is_empty() && params.category != "all" {
            QueryMode::Category
        } else {
            QueryMode::DirectIssues
        }
    }
}

/// A structured filter set, immutable per search invocation.
///
/// `min_stars <= max_stars` is expected but not enforced; an inverted
/// range admits no issues.
#[derive(Debug, Clone, Builder)]
pub struct FilterParams {
    /// Provider to search.
    pub service: Service,
    /// Minimum repository stars (inclusive).
    #[builder(default = 0)]
    pub min_stars: u64,
    /// Maximum repository stars (inclusive).
    #[builder(default = 1_000_000)]
    pub max_stars: u64,
    /// Minimum repository forks (inclusive).
    #[builder(default = 0)]
    pub min_forks: u64,
    /// Language filter, possibly several whitespace-separated tokens.
    #[builder(default, into)]
    pub language: String,
    /// True to search assigned issues, false for unassigned ones.
    #[builder(default)]
    pub is_assigned: bool,
    /// Category name; "all" (the default) applies no category filter.
    #[builder(default = String::from("all"), into)]
    pub category: String,
    /// Free-text framework/topic name; empty applies no framework filter.
    #[builder(default, into)]
    pub framework: String,
    /// True to search issues with a linked pull request, false for
    /// issues without one.
    #[builder(default)]
    pub has_pull_requests: bool,
    /// Opaque resume token from a previous page, or `None` for the
    /// first page.
    #[builder(into)]
    pub cursor: Option<String>,
}

impl FilterParams {
    /// Whitespace-separated language tokens.
    pub fn language_tokens(&self) -> impl Iterator<Item = &str> {
        self.language.split_whitespace()
    }
}

/// Applies the client-side post-filters and fixes the result order.
///
/// Pure and provider-agnostic once fed canonical [`Issue`] records:
/// numeric bounds (stars, forks), assignment policy, license presence
/// (where the provider requires it), pull-request linkage policy (direct
/// issue mode on providers that track it), then a sort by creation date
/// descending.
#[must_use]
pub fn apply_post_filters(
    mut issues: Vec<Issue>,
    params: &FilterParams,
    mode: QueryMode,
) -> Vec<Issue> {
    let caps = params.service.capabilities();

    issues.retain(|issue| {
        if issue.stars_count < params.min_stars || issue.stars_count > params.max_stars {
            return false;
        }
        if issue.fork_count < params.min_forks {
            return false;
        }
        if issue.is_assigned != params.is_assigned {
            return false;
        }
        if caps.requires_license && issue.license.is_none() {
            return false;
        }
        // The nested repository selections carry no timeline data, so the
        // linkage policy only applies to direct issue search.
        if caps.tracks_pull_requests
            && mode == QueryMode::DirectIssues
            && issue.has_pull_requests != params.has_pull_requests
        {
            return false;
        }
        true
    });

    issues.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    issues
}
