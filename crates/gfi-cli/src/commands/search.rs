// SPDX-License-Identifier: Apache-2.0

//! Search command handler.
//!
//! Translates the CLI flags into a filter set and runs one page through
//! the orchestrator. Upstream and configuration failures come back
//! inside the page's `error` field, never as a panic or process abort.

use gfi_core::{AppConfig, FilterParams, Page, SearchClient};
use tracing::instrument;

use crate::cli::SearchArgs;
use crate::provider::CliTokenProvider;

impl SearchArgs {
    /// Builds the immutable filter set for one invocation.
    pub fn to_params(&self, cursor: Option<String>) -> FilterParams {
        FilterParams::builder()
            .service(self.service)
            .min_stars(self.min_stars)
            .max_stars(self.max_stars)
            .min_forks(self.min_forks)
            .language(self.language.clone())
            .is_assigned(self.assigned)
            .category(self.category.clone())
            .framework(self.framework.clone())
            .has_pull_requests(self.linked_pr)
            .maybe_cursor(cursor)
            .build()
    }
}

/// Fetches one page of results in the uniform page shape.
#[instrument(skip_all, fields(service = %args.service))]
pub async fn run(args: &SearchArgs, config: &AppConfig, cursor: Option<String>) -> Page {
    let params = args.to_params(cursor);

    let tokens = CliTokenProvider;
    let client = SearchClient::new(config, &tokens);
    client.search_page(&params).await
}
