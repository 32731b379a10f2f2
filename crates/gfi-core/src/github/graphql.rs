// SPDX-License-Identifier: Apache-2.0

//! GraphQL documents and response types for the GitHub search API.
//!
//! Two search shapes exist: a direct issue search, and a repository
//! search whose nodes carry a nested selection of each repository's
//! "good first issue" tickets. Responses are parsed into typed nodes at
//! this boundary; a payload that does not match the schema fails with a
//! typed error instead of propagating missing fields downstream.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::GfiError;
use crate::issue::{Issue, PrStatus};
use crate::query::{ISSUES_PER_PAGE, ISSUES_PER_REPO, REPOS_PER_PAGE};

/// Cursor metadata of a search connection.
#[derive(Debug, Clone, Deserialize)]
pub struct PageInfo {
    /// Whether another page exists after this one.
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
    /// Opaque resume token for the next page.
    #[serde(rename = "endCursor")]
    pub end_cursor: Option<String>,
}

/// A connection exposing only a total count.
#[derive(Debug, Clone, Deserialize)]
pub struct CountedConnection {
    /// Number of connected nodes.
    #[serde(rename = "totalCount")]
    pub total_count: u64,
}

/// Labels container from the GraphQL response.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelConnection {
    /// List of label nodes.
    pub nodes: Vec<LabelNode>,
}

/// A single label.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelNode {
    /// Label name.
    pub name: String,
}

/// Primary language of a repository.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageNode {
    /// Language name.
    pub name: String,
}

/// License metadata of a repository.
#[derive(Debug, Clone, Deserialize)]
pub struct LicenseNode {
    /// SPDX id, absent for non-standard licenses.
    #[serde(rename = "spdxId")]
    pub spdx_id: Option<String>,
}

/// Repository fields shared by both search shapes.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryInfo {
    /// Repository name with owner (e.g. "rust-lang/rust").
    #[serde(rename = "nameWithOwner")]
    pub name_with_owner: String,
    /// Repository URL.
    pub url: String,
    /// Star count.
    #[serde(rename = "stargazerCount")]
    pub stargazer_count: u64,
    /// Fork count.
    #[serde(rename = "forkCount")]
    pub fork_count: u64,
    /// Detected primary language.
    #[serde(rename = "primaryLanguage")]
    pub primary_language: Option<LanguageNode>,
    /// License, when the repository declares one.
    #[serde(rename = "licenseInfo")]
    pub license_info: Option<LicenseNode>,
}

impl RepositoryInfo {
    fn license(&self) -> Option<String> {
        self.license_info.as_ref().map(|info| {
            info.spdx_id
                .clone()
                .unwrap_or_else(|| "NOASSERTION".to_string())
        })
    }
}

/// Timeline connection restricted to cross-referenced events.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineConnection {
    /// Cross-referencing events, newest-first as returned by GitHub.
    pub nodes: Vec<TimelineEventNode>,
}

/// A single cross-referenced timeline event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimelineEventNode {
    /// Referencing object; populated only when it is a pull request.
    #[serde(default)]
    pub source: Option<PullRequestRef>,
}

/// Pull request fields of a cross-referenced event source.
///
/// A source that is not a pull request deserializes as an empty object,
/// leaving `state` unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestRef {
    /// Pull request state: OPEN, CLOSED, or MERGED.
    #[serde(default)]
    pub state: Option<String>,
    /// Whether the pull request is a draft.
    #[serde(rename = "isDraft", default)]
    pub is_draft: bool,
}

/// An issue node from direct issue search.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueNode {
    /// Issue title.
    pub title: String,
    /// Issue URL; doubles as the stable id.
    pub url: String,
    /// Creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Parent repository.
    pub repository: RepositoryInfo,
    /// Assignee count (first: 1 suffices for the boolean).
    pub assignees: CountedConnection,
    /// Issue labels.
    pub labels: LabelConnection,
    /// Comment count.
    pub comments: CountedConnection,
    /// First cross-referenced event, for pull-request linkage.
    #[serde(rename = "timelineItems", default)]
    pub timeline_items: Option<TimelineConnection>,
}

impl IssueNode {
    /// Maps the node into the canonical record.
    #[must_use]
    pub fn into_issue(self) -> Issue {
        let (has_pull_requests, pr_status) = pr_linkage(self.timeline_items);
        let license = self.repository.license();
        Issue {
            id: self.url.clone(),
            title: self.title,
            html_url: self.url,
            created_at: self.created_at,
            repository_url: self.repository.url,
            repository_name: self.repository.name_with_owner,
            stars_count: self.repository.stargazer_count,
            fork_count: self.repository.fork_count,
            language: self.repository.primary_language.map(|l| l.name),
            is_assigned: self.assignees.total_count > 0,
            labels: self.labels.nodes.into_iter().map(|l| l.name).collect(),
            comments_count: self.comments.total_count,
            has_pull_requests,
            pr_status,
            license,
        }
    }
}

/// Derives pull-request linkage from the first cross-referenced event.
///
/// No event means no linked pull request. An event whose source is not a
/// pull request still counts as linked, with an unknown status.
fn pr_linkage(timeline: Option<TimelineConnection>) -> (bool, Option<PrStatus>) {
    let Some(event) = timeline.and_then(|t| t.nodes.into_iter().next()) else {
        return (false, None);
    };

    let status = event.source.and_then(|pr| {
        let state = pr.state?;
        Some(if pr.is_draft {
            PrStatus::Draft
        } else {
            match state.as_str() {
                "OPEN" => PrStatus::Open,
                _ => PrStatus::Closed,
            }
        })
    });

    (true, status)
}

/// An issue node from the nested repository selection.
///
/// Carries no repository or timeline data of its own; both come from the
/// enclosing [`RepoNode`].
#[derive(Debug, Clone, Deserialize)]
pub struct RepoIssueNode {
    /// Issue title.
    pub title: String,
    /// Issue URL; doubles as the stable id.
    pub url: String,
    /// Creation timestamp.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Assignee count.
    pub assignees: CountedConnection,
    /// Issue labels.
    pub labels: LabelConnection,
    /// Comment count.
    pub comments: CountedConnection,
}

/// Nested issue selection of a repository node.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoIssuesConnection {
    /// Up to [`ISSUES_PER_REPO`] open "good first issue" tickets.
    pub nodes: Vec<RepoIssueNode>,
}

/// A repository node from topic-anchored repository search.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoNode {
    /// Repository fields.
    #[serde(flatten)]
    pub repository: RepositoryInfo,
    /// Nested issue selection.
    pub issues: RepoIssuesConnection,
}

impl RepoNode {
    /// Flattens the nested selection into canonical records.
    #[must_use]
    pub fn into_issues(self) -> Vec<Issue> {
        let repository = self.repository;
        let license = repository.license();
        self.issues
            .nodes
            .into_iter()
            .map(|issue| Issue {
                id: issue.url.clone(),
                title: issue.title,
                html_url: issue.url,
                created_at: issue.created_at,
                repository_url: repository.url.clone(),
                repository_name: repository.name_with_owner.clone(),
                stars_count: repository.stargazer_count,
                fork_count: repository.fork_count,
                language: repository.primary_language.as_ref().map(|l| l.name.clone()),
                is_assigned: issue.assignees.total_count > 0,
                labels: issue.labels.nodes.into_iter().map(|l| l.name).collect(),
                comments_count: issue.comments.total_count,
                has_pull_requests: false,
                pr_status: None,
                license: license.clone(),
            })
            .collect()
    }
}

/// One page of direct issue search results.
#[derive(Debug, Deserialize)]
pub struct IssueSearchPage {
    /// Cursor metadata.
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    /// Issue nodes.
    pub nodes: Vec<IssueNode>,
}

/// One page of repository search results.
#[derive(Debug, Deserialize)]
pub struct RepoSearchPage {
    /// Cursor metadata, over the repository search.
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
    /// Repository nodes with nested issues.
    pub nodes: Vec<RepoNode>,
}

fn issue_search_document() -> String {
    format!(
        r#"query($queryString: String!, $cursor: String) {{
            search(query: $queryString, type: ISSUE, first: {ISSUES_PER_PAGE}, after: $cursor) {{
                pageInfo {{ hasNextPage endCursor }}
                nodes {{
                    ... on Issue {{
                        title
                        url
                        createdAt
                        repository {{
                            nameWithOwner
                            url
                            stargazerCount
                            forkCount
                            primaryLanguage {{ name }}
                            licenseInfo {{ spdxId }}
                        }}
                        assignees(first: 1) {{ totalCount }}
                        labels(first: 10) {{ nodes {{ name }} }}
                        comments {{ totalCount }}
                        timelineItems(itemTypes: [CROSS_REFERENCED_EVENT], first: 1) {{
                            nodes {{
                                ... on CrossReferencedEvent {{
                                    source {{ ... on PullRequest {{ state isDraft }} }}
                                }}
                            }}
                        }}
                    }}
                }}
            }}
        }}"#
    )
}

fn repository_search_document() -> String {
    format!(
        r#"query($queryString: String!, $cursor: String) {{
            search(query: $queryString, type: REPOSITORY, first: {REPOS_PER_PAGE}, after: $cursor) {{
                pageInfo {{ hasNextPage endCursor }}
                nodes {{
                    ... on Repository {{
                        nameWithOwner
                        url
                        stargazerCount
                        forkCount
                        primaryLanguage {{ name }}
                        licenseInfo {{ spdxId }}
                        issues(labels: ["good first issue"], states: OPEN, first: {ISSUES_PER_REPO}, orderBy: {{field: CREATED_AT, direction: DESC}}) {{
                            nodes {{
                                title
                                url
                                createdAt
                                assignees(first: 1) {{ totalCount }}
                                labels(first: 10) {{ nodes {{ name }} }}
                                comments {{ totalCount }}
                            }}
                        }}
                    }}
                }}
            }}
        }}"#
    )
}

/// Builds the GraphQL request payload for direct issue search.
#[must_use]
pub fn issue_search_payload(query_string: &str, cursor: Option<&str>) -> Value {
    debug!(query = %query_string, "Built issue search payload");
    json!({
        "query": issue_search_document(),
        "variables": { "queryString": query_string, "cursor": cursor },
    })
}

/// Builds the GraphQL request payload for repository search.
#[must_use]
pub fn repository_search_payload(query_string: &str, cursor: Option<&str>) -> Value {
    debug!(query = %query_string, "Built repository search payload");
    json!({
        "query": repository_search_document(),
        "variables": { "queryString": query_string, "cursor": cursor },
    })
}

/// Extracts the `data` object, failing on GraphQL-level errors.
fn graphql_data(response: &Value) -> Result<&Value, GfiError> {
    if let Some(errors) = response.get("errors") {
        let message = serde_json::to_string_pretty(errors).unwrap_or_default();
        return Err(GfiError::GitHub {
            message: format!("GraphQL error: {message}"),
        });
    }

    response.get("data").ok_or_else(|| GfiError::GitHub {
        message: "Missing 'data' field in GraphQL response".to_string(),
    })
}

fn search_connection(response: &Value) -> Result<&Value, GfiError> {
    graphql_data(response)?
        .get("search")
        .ok_or_else(|| GfiError::GitHub {
            message: "Missing 'search' field in GraphQL response".to_string(),
        })
}

/// Parses a direct issue search response.
pub fn parse_issue_search(response: &Value) -> Result<IssueSearchPage, GfiError> {
    let search = search_connection(response)?;
    serde_json::from_value(search.clone()).map_err(GfiError::InvalidResponse)
}

/// Parses a repository search response.
pub fn parse_repository_search(response: &Value) -> Result<RepoSearchPage, GfiError> {
    let search = search_connection(response)?;
    serde_json::from_value(search.clone()).map_err(GfiError::InvalidResponse)
}
