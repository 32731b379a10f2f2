// SPDX-License-Identifier: Apache-2.0

//! GitHub search entry points.
//!
//! Three modes: direct issue search, and category/framework repository
//! search fanning out into each repository's nested issue list. The
//! repository modes advance past pages that post-filter to empty, in a
//! bounded loop rather than open-ended recursion.

use octocrab::Octocrab;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::graphql::{self, IssueNode, RepoNode};
use crate::error::GfiError;
use crate::filter::{FilterParams, QueryMode, apply_post_filters};
use crate::issue::Page;
use crate::query;

/// Most empty pages skipped transparently within one logical request.
///
/// The initial fetch does not count; at most `MAX_EMPTY_PAGE_SCANS`
/// additional pages are pulled before the (empty) page is handed back to
/// the caller with its cursor intact.
pub const MAX_EMPTY_PAGE_SCANS: u32 = 5;

/// Direct issue search: a single page per call.
#[instrument(skip(client, params), fields(cursor = ?params.cursor))]
pub async fn fetch_issues(client: &Octocrab, params: &FilterParams) -> Result<Page, GfiError> {
    let query_string = query::github_issue_query(params);
    debug!(query = %query_string, "GitHub issue search");

    let payload = graphql::issue_search_payload(&query_string, params.cursor.as_deref());
    let response: Value = client.graphql(&payload).await?;

    shape_issue_page(&response, params)
}

/// Repository search anchored on the category topic table.
#[instrument(skip(client, params), fields(category = %params.category))]
pub async fn fetch_issues_by_category(
    client: &Octocrab,
    params: &FilterParams,
) -> Result<Page, GfiError> {
    fetch_repository_issues(client, params, QueryMode::Category).await
}

/// Repository search anchored on the free-text framework topic.
#[instrument(skip(client, params), fields(framework = %params.framework))]
pub async fn fetch_issues_by_framework(
    client: &Octocrab,
    params: &FilterParams,
) -> Result<Page, GfiError> {
    fetch_repository_issues(client, params, QueryMode::Framework).await
}

async fn fetch_repository_issues(
    client: &Octocrab,
    params: &FilterParams,
    mode: QueryMode,
) -> Result<Page, GfiError> {
    let query_string = query::github_repository_query(params, mode);
    debug!(query = %query_string, "GitHub repository search");

    let mut cursor = params.cursor.clone();
    for _ in 0..=MAX_EMPTY_PAGE_SCANS {
        let payload = graphql::repository_search_payload(&query_string, cursor.as_deref());
        let response: Value = client.graphql(&payload).await?;
        let page = shape_repository_page(&response, params, mode)?;

        match next_scan_step(page) {
            ScanStep::Done(page) => return Ok(page),
            ScanStep::Advance(next_cursor) => {
                debug!(cursor = ?next_cursor, "page empty after filtering, advancing cursor");
                cursor = next_cursor;
            }
        }
    }

    warn!(
        scans = MAX_EMPTY_PAGE_SCANS,
        "empty-page scan cap reached, returning empty page"
    );
    Ok(Page {
        issues: Vec::new(),
        has_next_page: true,
        end_cursor: cursor,
        error: None,
    })
}

/// Outcome of examining one fetched repository page.
enum ScanStep {
    /// Hand this page to the caller.
    Done(Page),
    /// Nothing survived filtering and more pages exist; refetch from the
    /// contained cursor.
    Advance(Option<String>),
}

fn next_scan_step(page: Page) -> ScanStep {
    if page.issues.is_empty() && page.has_next_page {
        ScanStep::Advance(page.end_cursor)
    } else {
        ScanStep::Done(page)
    }
}

/// Parses and post-filters one direct issue search response.
fn shape_issue_page(response: &Value, params: &FilterParams) -> Result<Page, GfiError> {
    let search = graphql::parse_issue_search(response)?;
    let issues = search.nodes.into_iter().map(IssueNode::into_issue).collect();
    let issues = apply_post_filters(issues, params, QueryMode::DirectIssues);

    Ok(Page {
        issues,
        has_next_page: search.page_info.has_next_page,
        end_cursor: search.page_info.end_cursor,
        error: None,
    })
}

/// Parses, flattens, and post-filters one repository search response.
fn shape_repository_page(
    response: &Value,
    params: &FilterParams,
    mode: QueryMode,
) -> Result<Page, GfiError> {
    let search = graphql::parse_repository_search(response)?;
    let issues = search
        .nodes
        .into_iter()
        .flat_map(RepoNode::into_issues)
        .collect();
    let issues = apply_post_filters(issues, params, mode);

    Ok(Page {
        issues,
        has_next_page: search.page_info.has_next_page,
        end_cursor: search.page_info.end_cursor,
        error: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Service;
    use serde_json::json;

    fn issue_node(url: &str, stars: u64, created_at: &str) -> Value {
        json!({
            "title": format!("Issue at {url}"),
            "url": url,
            "createdAt": created_at,
            "repository": {
                "nameWithOwner": "acme/widget",
                "url": "https://github.com/acme/widget",
                "stargazerCount": stars,
                "forkCount": 15,
                "primaryLanguage": { "name": "Go" },
                "licenseInfo": { "spdxId": "MIT" }
            },
            "assignees": { "totalCount": 0 },
            "labels": { "nodes": [{ "name": "good first issue" }] },
            "comments": { "totalCount": 0 },
            "timelineItems": { "nodes": [] }
        })
    }

    fn issue_response(nodes: Vec<Value>, has_next: bool, cursor: Option<&str>) -> Value {
        json!({
            "data": {
                "search": {
                    "pageInfo": { "hasNextPage": has_next, "endCursor": cursor },
                    "nodes": nodes
                }
            }
        })
    }

    // The full filter pipeline over a fixture response: three issues with
    // stars 50/200/4000 under bounds [100, 5000] keep exactly the two in
    // range, newest first.
    #[test]
    fn issue_page_applies_star_bounds_and_sorts_newest_first() {
        let response = issue_response(
            vec![
                issue_node("https://github.com/acme/widget/issues/1", 50, "2024-06-01T12:00:00Z"),
                issue_node("https://github.com/acme/widget/issues/2", 200, "2024-06-02T12:00:00Z"),
                issue_node("https://github.com/acme/widget/issues/3", 4000, "2024-06-03T12:00:00Z"),
            ],
            true,
            Some("Y3Vyc29y"),
        );

        let params = FilterParams::builder()
            .service(Service::GitHub)
            .min_stars(100)
            .max_stars(5000)
            .language("Go")
            .build();

        let page = shape_issue_page(&response, &params).unwrap();
        assert_eq!(page.issues.len(), 2);
        assert_eq!(page.issues[0].id, "https://github.com/acme/widget/issues/3");
        assert_eq!(page.issues[1].id, "https://github.com/acme/widget/issues/2");
        assert!(page.has_next_page);
        assert_eq!(page.end_cursor.as_deref(), Some("Y3Vyc29y"));
    }

    #[test]
    fn issue_page_shaping_is_deterministic() {
        let response = issue_response(
            vec![
                issue_node("https://github.com/acme/widget/issues/2", 200, "2024-06-02T12:00:00Z"),
                issue_node("https://github.com/acme/widget/issues/3", 4000, "2024-06-03T12:00:00Z"),
            ],
            false,
            None,
        );
        let params = FilterParams::builder()
            .service(Service::GitHub)
            .min_stars(100)
            .max_stars(5000)
            .build();

        let first = shape_issue_page(&response, &params).unwrap();
        let second = shape_issue_page(&response, &params).unwrap();
        let first_ids: Vec<_> = first.issues.iter().map(|i| i.id.as_str()).collect();
        let second_ids: Vec<_> = second.issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn scan_advances_only_on_empty_page_with_more_available() {
        // Empty page with more upstream: advance to its cursor
        let empty_with_more = Page {
            issues: vec![],
            has_next_page: true,
            end_cursor: Some("next".to_string()),
            error: None,
        };
        assert!(matches!(
            next_scan_step(empty_with_more),
            ScanStep::Advance(Some(cursor)) if cursor == "next"
        ));

        // Empty but exhausted: done, not advance
        let exhausted = Page {
            issues: vec![],
            has_next_page: false,
            end_cursor: None,
            error: None,
        };
        assert!(matches!(next_scan_step(exhausted), ScanStep::Done(_)));
    }

    #[test]
    fn scan_stops_on_page_with_results() {
        let response = json!({
            "data": {
                "search": {
                    "pageInfo": { "hasNextPage": true, "endCursor": "after" },
                    "nodes": [{
                        "nameWithOwner": "acme/widget",
                        "url": "https://github.com/acme/widget",
                        "stargazerCount": 900,
                        "forkCount": 40,
                        "primaryLanguage": { "name": "Rust" },
                        "licenseInfo": { "spdxId": "MIT" },
                        "issues": { "nodes": [{
                            "title": "First",
                            "url": "https://github.com/acme/widget/issues/1",
                            "createdAt": "2024-06-02T12:00:00Z",
                            "assignees": { "totalCount": 0 },
                            "labels": { "nodes": [] },
                            "comments": { "totalCount": 0 }
                        }] }
                    }]
                }
            }
        });

        let params = FilterParams::builder()
            .service(Service::GitHub)
            .category("devops")
            .build();
        let page = shape_repository_page(&response, &params, QueryMode::Category).unwrap();
        assert_eq!(page.issues.len(), 1);
        assert!(matches!(next_scan_step(page), ScanStep::Done(_)));
    }
}
