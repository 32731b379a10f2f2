// SPDX-License-Identifier: Apache-2.0

//! GitLab REST client.
//!
//! Every mode is a two-step fetch: a listing call, then one nested
//! request per listed item, run as a concurrent batch. Nested failures
//! are captured per item - a failed lookup is logged and contributes
//! zero issues rather than failing the page.

use std::time::Duration;

use futures::future::join_all;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::models::{self, GitLabIssue, GitLabProject, PageWindow};
use crate::config::GitLabConfig;
use crate::error::GfiError;
use crate::filter::{FilterParams, QueryMode, apply_post_filters};
use crate::issue::{Issue, Page};
use crate::query;

/// Authenticated client for one GitLab instance.
pub struct GitLabClient {
    http: reqwest::Client,
    base_url: String,
    token: SecretString,
}

impl GitLabClient {
    /// Builds a client against the configured instance.
    pub fn new(config: &GitLabConfig, token: SecretString) -> Result<Self, GfiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Direct issue listing: one `/issues` call, then one project lookup
    /// per issue to resolve star and fork counts.
    #[instrument(skip(self, params), fields(cursor = ?params.cursor))]
    pub async fn fetch_issues(&self, params: &FilterParams) -> Result<Page, GfiError> {
        validate_cursor(params)?;

        let query = query::gitlab_issue_query(params);
        debug!(query = %query, "GitLab issue listing");
        let (raw_issues, window) = self.get_listing::<GitLabIssue>("/issues", &query).await?;

        let lookups = raw_issues
            .iter()
            .map(|issue| self.fetch_project(issue.project_id));
        let projects = join_all(lookups).await;

        let mut issues = Vec::with_capacity(raw_issues.len());
        for (issue, project) in raw_issues.into_iter().zip(projects) {
            match project {
                Ok(project) => issues.push(models::merge(issue, &project)),
                Err(error) => warn!(
                    project_id = issue.project_id,
                    error = %error,
                    "skipping issue, project lookup failed"
                ),
            }
        }

        let issues = apply_post_filters(issues, params, QueryMode::DirectIssues);
        Ok(page_from(issues, window))
    }

    /// Project listing anchored on the category topic, fanning out into
    /// each project's "good first issue" tickets.
    #[instrument(skip(self, params), fields(category = %params.category))]
    pub async fn fetch_issues_by_category(&self, params: &FilterParams) -> Result<Page, GfiError> {
        self.fetch_project_issues(params, QueryMode::Category).await
    }

    /// Project listing anchored on the free-text framework topic.
    #[instrument(skip(self, params), fields(framework = %params.framework))]
    pub async fn fetch_issues_by_framework(&self, params: &FilterParams) -> Result<Page, GfiError> {
        self.fetch_project_issues(params, QueryMode::Framework).await
    }

    async fn fetch_project_issues(
        &self,
        params: &FilterParams,
        mode: QueryMode,
    ) -> Result<Page, GfiError> {
        validate_cursor(params)?;

        let query = query::gitlab_project_query(params, mode);
        debug!(query = %query, "GitLab project listing");
        let (projects, window) = self.get_listing::<GitLabProject>("/projects", &query).await?;

        let batches = projects
            .iter()
            .map(|project| self.fetch_issues_for_project(project));
        let results = join_all(batches).await;
        let issues = collect_fanout(&projects, results);

        let issues = apply_post_filters(issues, params, mode);
        Ok(page_from(issues, window))
    }

    async fn fetch_issues_for_project(
        &self,
        project: &GitLabProject,
    ) -> Result<Vec<Issue>, GfiError> {
        let path = format!("/projects/{}/issues", project.id);
        let (raw_issues, _) = self
            .get_listing::<GitLabIssue>(&path, &query::gitlab_project_issues_query())
            .await?;

        Ok(raw_issues
            .into_iter()
            .map(|issue| models::merge(issue, project))
            .collect())
    }

    async fn fetch_project(&self, id: u64) -> Result<GitLabProject, GfiError> {
        let response = self.get(&format!("/projects/{id}"), "").await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(GfiError::InvalidResponse)
    }

    /// Issues a GET and parses the array body plus pagination headers.
    async fn get_listing<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
    ) -> Result<(Vec<T>, PageWindow), GfiError> {
        let response = self.get(path, query).await?;
        let window = page_window(&response);
        let body = response.text().await?;
        let items = serde_json::from_str(&body).map_err(GfiError::InvalidResponse)?;
        Ok((items, window))
    }

    async fn get(&self, path: &str, query: &str) -> Result<reqwest::Response, GfiError> {
        let url = if query.is_empty() {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}{path}?{query}", self.base_url)
        };

        let response = self
            .http
            .get(&url)
            .header("PRIVATE-TOKEN", self.token.expose_secret())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GfiError::GitLab {
                status: Some(status.as_u16()),
                message: format!("request to {path} failed: {status}"),
            });
        }
        Ok(response)
    }
}

/// Reads the pagination window from the response headers, defaulting to
/// a single page when the headers are absent or malformed.
fn page_window(response: &reqwest::Response) -> PageWindow {
    let header = |name: &str| {
        response
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or(1)
    };
    PageWindow {
        current: header("X-Page"),
        total: header("X-Total-Pages"),
    }
}

/// GitLab cursors are 1-based page numbers in string form.
fn validate_cursor(params: &FilterParams) -> Result<(), GfiError> {
    if let Some(cursor) = &params.cursor
        && cursor.parse::<u32>().is_err()
    {
        return Err(GfiError::InvalidCursor {
            value: cursor.clone(),
        });
    }
    Ok(())
}

/// Flattens per-project fan-out results, logging failures as zero
/// contributions instead of failing the page.
fn collect_fanout(
    projects: &[GitLabProject],
    results: Vec<Result<Vec<Issue>, GfiError>>,
) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (project, result) in projects.iter().zip(results) {
        match result {
            Ok(batch) => issues.extend(batch),
            Err(error) => warn!(
                project_id = project.id,
                error = %error,
                "skipping project, issue fetch failed"
            ),
        }
    }
    issues
}

fn page_from(issues: Vec<Issue>, window: PageWindow) -> Page {
    Page {
        issues,
        has_next_page: window.has_next_page(),
        end_cursor: window.end_cursor(),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Service;
    use chrono::{TimeZone, Utc};

    fn project(id: u64) -> GitLabProject {
        GitLabProject {
            id,
            web_url: format!("https://gitlab.com/acme/p{id}"),
            name_with_namespace: format!("Acme / p{id}"),
            star_count: 100,
            forks_count: 5,
            repository_language: None,
        }
    }

    fn issue_for(project: &GitLabProject, id: u64) -> Issue {
        models::merge(
            GitLabIssue {
                id,
                title: format!("issue {id}"),
                web_url: format!("{}/-/issues/{id}", project.web_url),
                created_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
                project_id: project.id,
                assignees: vec![],
                labels: vec![],
                user_notes_count: 0,
            },
            project,
        )
    }

    #[test]
    fn fanout_failure_contributes_zero_issues() {
        let projects = vec![project(1), project(2), project(3)];
        let results = vec![
            Ok(vec![issue_for(&projects[0], 10)]),
            Err(GfiError::GitLab {
                status: Some(500),
                message: "request to /projects/2/issues failed: 500".to_string(),
            }),
            Ok(vec![issue_for(&projects[2], 30), issue_for(&projects[2], 31)]),
        ];

        let issues = collect_fanout(&projects, results);
        let ids: Vec<_> = issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["10", "30", "31"]);
    }

    #[test]
    fn non_numeric_cursor_is_rejected() {
        let params = FilterParams::builder()
            .service(Service::GitLab)
            .cursor("Y3Vyc29y")
            .build();
        let err = validate_cursor(&params).unwrap_err();
        assert!(matches!(err, GfiError::InvalidCursor { value } if value == "Y3Vyc29y"));

        let numeric = FilterParams::builder()
            .service(Service::GitLab)
            .cursor("2")
            .build();
        assert!(validate_cursor(&numeric).is_ok());
    }

    #[test]
    fn page_from_window_carries_next_page_number() {
        let page = page_from(Vec::new(), PageWindow { current: 2, total: 5 });
        assert!(page.has_next_page);
        assert_eq!(page.end_cursor.as_deref(), Some("3"));

        let last = page_from(Vec::new(), PageWindow { current: 5, total: 5 });
        assert!(!last.has_next_page);
        assert!(last.end_cursor.is_none());
    }

    #[tokio::test]
    async fn client_builds_against_custom_base_url() {
        let config = GitLabConfig {
            base_url: "https://gitlab.example.com/api/v4/".to_string(),
            api_timeout_seconds: 5,
        };
        let client = GitLabClient::new(&config, SecretString::from("token")).unwrap();
        assert_eq!(client.base_url, "https://gitlab.example.com/api/v4");
    }
}
