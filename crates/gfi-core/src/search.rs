// SPDX-License-Identifier: Apache-2.0

//! Search orchestration.
//!
//! [`SearchClient`] is the context object the consumer constructs once
//! and passes around: it owns nothing global, resolves credentials per
//! request through its [`TokenProvider`], and dispatches to the adapter
//! entry point selected by the filter shape.

use tracing::{error, instrument};

use crate::auth::{GITHUB_TOKEN_HINT, GITLAB_TOKEN_HINT, TokenProvider};
use crate::config::AppConfig;
use crate::error::GfiError;
use crate::filter::{FilterParams, QueryMode, Service};
use crate::github;
use crate::gitlab::GitLabClient;
use crate::issue::Page;

/// Orchestrates provider selection, credential resolution, and paging.
pub struct SearchClient<'a> {
    config: &'a AppConfig,
    tokens: &'a dyn TokenProvider,
}

impl<'a> SearchClient<'a> {
    /// Builds a search client over the given configuration and
    /// credential source.
    #[must_use]
    pub fn new(config: &'a AppConfig, tokens: &'a dyn TokenProvider) -> Self {
        Self { config, tokens }
    }

    /// Runs one page of the search selected by the filter shape.
    ///
    /// # Errors
    ///
    /// Fails fast with [`GfiError::MissingCredential`] when the selected
    /// provider's token is absent; upstream failures propagate without
    /// retry.
    #[instrument(skip(self, params), fields(service = %params.service, mode = ?QueryMode::for_params(params)))]
    pub async fn search(&self, params: &FilterParams) -> Result<Page, GfiError> {
        let mode = QueryMode::for_params(params);

        match params.service {
            Service::GitHub => {
                let token =
                    self.tokens
                        .github_token()
                        .ok_or(GfiError::MissingCredential {
                            provider: "GitHub",
                            env_hint: GITHUB_TOKEN_HINT,
                        })?;
                let client = github::create_client(&token)?;

                match mode {
                    QueryMode::DirectIssues => github::search::fetch_issues(&client, params).await,
                    QueryMode::Category => {
                        github::search::fetch_issues_by_category(&client, params).await
                    }
                    QueryMode::Framework => {
                        github::search::fetch_issues_by_framework(&client, params).await
                    }
                }
            }
            Service::GitLab => {
                let token =
                    self.tokens
                        .gitlab_token()
                        .ok_or(GfiError::MissingCredential {
                            provider: "GitLab",
                            env_hint: GITLAB_TOKEN_HINT,
                        })?;
                let client = GitLabClient::new(&self.config.gitlab, token)?;

                match mode {
                    QueryMode::DirectIssues => client.fetch_issues(params).await,
                    QueryMode::Category => client.fetch_issues_by_category(params).await,
                    QueryMode::Framework => client.fetch_issues_by_framework(params).await,
                }
            }
        }
    }

    /// Like [`search`](Self::search), but absorbs the failure into the
    /// uniform page shape: the error is logged and returned as
    /// `Page { issues: [], has_next_page: false, error: Some(..) }`.
    pub async fn search_page(&self, params: &FilterParams) -> Page {
        match self.search(params).await {
            Ok(page) => page,
            Err(err) => {
                error!(error = %err, "search failed");
                Page::failed(err.to_string())
            }
        }
    }
}
