// SPDX-License-Identifier: Apache-2.0

//! Typed GitLab REST response shapes.
//!
//! Only the fields gfi consumes are declared; anything else in the
//! payload is ignored. Parsing is strict about the declared fields, so a
//! shape change upstream fails with a typed error at the boundary.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::issue::Issue;

/// An issue from `/issues` or `/projects/{id}/issues`.
#[derive(Debug, Clone, Deserialize)]
pub struct GitLabIssue {
    /// Numeric id, globally unique on the instance.
    pub id: u64,
    /// Issue title.
    pub title: String,
    /// Link to the issue.
    pub web_url: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Id of the owning project.
    pub project_id: u64,
    /// Assigned users.
    #[serde(default)]
    pub assignees: Vec<GitLabAssignee>,
    /// Label names.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Comment count.
    #[serde(default)]
    pub user_notes_count: u64,
}

/// An assignee reference on an issue.
#[derive(Debug, Clone, Deserialize)]
pub struct GitLabAssignee {
    /// User id.
    pub id: u64,
}

/// A project from `/projects` or `/projects/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GitLabProject {
    /// Numeric project id.
    pub id: u64,
    /// Link to the project.
    pub web_url: String,
    /// Display name including the namespace.
    pub name_with_namespace: String,
    /// Star count.
    #[serde(default)]
    pub star_count: u64,
    /// Fork count.
    #[serde(default)]
    pub forks_count: u64,
    /// Repository language, when the instance reports one.
    #[serde(default)]
    pub repository_language: Option<String>,
}

/// Combines an issue with its project's metadata into the canonical
/// record.
///
/// GitLab issues carry no pull-request linkage or license information,
/// so those fields stay at their absent values.
#[must_use]
pub fn merge(issue: GitLabIssue, project: &GitLabProject) -> Issue {
    Issue {
        id: issue.id.to_string(),
        title: issue.title,
        html_url: issue.web_url,
        created_at: issue.created_at,
        repository_url: project.web_url.clone(),
        repository_name: project.name_with_namespace.clone(),
        stars_count: project.star_count,
        fork_count: project.forks_count,
        language: project.repository_language.clone(),
        is_assigned: !issue.assignees.is_empty(),
        labels: issue.labels,
        comments_count: issue.user_notes_count,
        has_pull_requests: false,
        pr_status: None,
        license: None,
    }
}

/// Pagination window read from the `X-Page`/`X-Total-Pages` response
/// headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based current page.
    pub current: u32,
    /// Total page count reported by the server.
    pub total: u32,
}

impl PageWindow {
    /// Whether pages remain after the current one.
    #[must_use]
    pub fn has_next_page(self) -> bool {
        self.current < self.total
    }

    /// The next page number as an opaque cursor, when one exists.
    #[must_use]
    pub fn end_cursor(self) -> Option<String> {
        self.has_next_page().then(|| (self.current + 1).to_string())
    }
}
