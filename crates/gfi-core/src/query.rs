// SPDX-License-Identifier: Apache-2.0

//! Query builders for both providers.
//!
//! GitHub searches are expressed in its search query language; GitLab's
//! REST API takes plain query parameters instead, so the GitLab builders
//! produce pre-encoded parameter strings.

use std::fmt::Write;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::filter::{FilterParams, QueryMode};

/// Issues fetched per page in direct issue search.
pub const ISSUES_PER_PAGE: u32 = 30;

/// Repositories fetched per page in topic-anchored repository search.
pub const REPOS_PER_PAGE: u32 = 10;

/// Issues pulled from each repository in topic-anchored search.
pub const ISSUES_PER_REPO: u32 = 5;

/// Maps a category to its GitHub topic qualifier.
///
/// Returns `None` for "all" and for unrecognized categories, both of
/// which emit no topic clause.
#[must_use]
pub fn category_topic(category: &str) -> Option<&'static str> {
    match category {
        "web-dev" => Some("web"),
        "mobile-dev" => Some("mobile"),
        "data-science" => Some("data-science"),
        "machine-learning" => Some("machine-learning"),
        "devops" => Some("devops"),
        "cybersecurity" => Some("security"),
        "documentation" => Some("documentation"),
        _ => None,
    }
}

/// Builds the GitHub search string for direct issue search.
///
/// Each whitespace-separated language token becomes its own `language:`
/// qualifier. GitHub ANDs repeated qualifiers, so listing several
/// languages requires repositories matching ALL of them.
#[must_use]
pub fn github_issue_query(params: &FilterParams) -> String {
    let mut query = String::from(r#"is:open is:issue label:"good first issue" archived:false"#);

    for token in params.language_tokens() {
        let _ = write!(query, " language:{token}");
    }

    if params.is_assigned {
        query.push_str(" assigned:*");
    } else {
        query.push_str(" no:assignee");
    }

    if params.has_pull_requests {
        query.push_str(" linked:pr");
    } else {
        query.push_str(" -linked:pr");
    }

    query.push_str(" sort:created-desc");
    query
}

/// Builds the GitHub search string for topic-anchored repository search.
///
/// The topic comes from the category lookup table in [`QueryMode::Category`]
/// mode and from the free-text framework name in [`QueryMode::Framework`]
/// mode; an unrecognized category emits no topic clause.
#[must_use]
pub fn github_repository_query(params: &FilterParams, mode: QueryMode) -> String {
    let topic = match mode {
        QueryMode::Framework => Some(params.framework.as_str()),
        QueryMode::Category => category_topic(&params.category),
        QueryMode::DirectIssues => None,
    };

    let mut query = String::new();
    if let Some(topic) = topic {
        let _ = write!(query, "topic:{topic} ");
    }
    query.push_str("is:public archived:false");

    for token in params.language_tokens() {
        let _ = write!(query, " language:{token}");
    }

    let _ = write!(query, " stars:{}..{}", params.min_stars, params.max_stars);
    let _ = write!(query, " forks:>={}", params.min_forks);
    query
}

/// Characters escaped in GitLab query parameter values.
const VALUE_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'&')
    .add(b'=')
    .add(b'#')
    .add(b'?')
    .add(b'+')
    .add(b'%');

fn push_param(query: &mut String, key: &str, value: &str) {
    if !query.is_empty() {
        query.push('&');
    }
    let _ = write!(query, "{key}={}", utf8_percent_encode(value, VALUE_ESCAPE));
}

/// Builds the GitLab query string for direct issue listing.
///
/// The language filter rides the free-text `search` parameter; GitLab's
/// issue API has no qualifier syntax, so this is a substring match, not
/// an exact language filter.
#[must_use]
pub fn gitlab_issue_query(params: &FilterParams) -> String {
    let mut query = String::new();
    push_param(&mut query, "labels", "good first issue,newcomer");
    push_param(&mut query, "state", "opened");
    push_param(&mut query, "scope", "all");
    push_param(&mut query, "order_by", "created_at");
    push_param(&mut query, "sort", "desc");
    push_param(&mut query, "per_page", &ISSUES_PER_PAGE.to_string());

    if !params.language.is_empty() {
        push_param(&mut query, "search", &params.language);
    }
    if let Some(cursor) = &params.cursor {
        push_param(&mut query, "page", cursor);
    }
    query
}

/// Builds the GitLab query string for the project listing step of
/// topic-anchored search.
#[must_use]
pub fn gitlab_project_query(params: &FilterParams, mode: QueryMode) -> String {
    let mut query = String::new();
    push_param(&mut query, "min_access_level", "10");
    push_param(&mut query, "archived", "false");
    push_param(&mut query, "order_by", "last_activity_at");
    push_param(&mut query, "sort", "desc");
    push_param(&mut query, "per_page", &REPOS_PER_PAGE.to_string());

    if !params.language.is_empty() {
        push_param(&mut query, "with_programming_language", &params.language);
    }

    let topic = match mode {
        QueryMode::Framework => Some(params.framework.as_str()),
        QueryMode::Category if params.category != "all" => Some(params.category.as_str()),
        QueryMode::Category | QueryMode::DirectIssues => None,
    };
    if let Some(topic) = topic {
        push_param(&mut query, "topic", topic);
    }

    if let Some(cursor) = &params.cursor {
        push_param(&mut query, "page", cursor);
    }
    query
}

/// Builds the GitLab query string for the per-project issue fetch.
#[must_use]
pub fn gitlab_project_issues_query() -> String {
    let mut query = String::new();
    push_param(&mut query, "labels", "good first issue");
    push_param(&mut query, "state", "opened");
    push_param(&mut query, "per_page", &ISSUES_PER_REPO.to_string());
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Service;

    fn params() -> FilterParams {
        FilterParams::builder().service(Service::GitHub).build()
    }

    #[test]
    fn issue_query_anchors() {
        let query = github_issue_query(&params());
        assert!(query.starts_with(r#"is:open is:issue label:"good first issue" archived:false"#));
        assert!(query.ends_with("sort:created-desc"));
    }

    #[test]
    fn issue_query_one_language_clause_per_token() {
        let multi = FilterParams::builder()
            .service(Service::GitHub)
            .language("Rust Go")
            .build();
        let query = github_issue_query(&multi);
        assert!(query.contains("language:Rust"));
        assert!(query.contains("language:Go"));
    }

    #[test]
    fn issue_query_assignment_clauses() {
        assert!(github_issue_query(&params()).contains("no:assignee"));

        let assigned = FilterParams::builder()
            .service(Service::GitHub)
            .is_assigned(true)
            .build();
        let query = github_issue_query(&assigned);
        assert!(query.contains("assigned:*"));
        assert!(!query.contains("no:assignee"));
    }

    #[test]
    fn issue_query_pr_linkage_clauses() {
        assert!(github_issue_query(&params()).contains("-linked:pr"));

        let linked = FilterParams::builder()
            .service(Service::GitHub)
            .has_pull_requests(true)
            .build();
        let query = github_issue_query(&linked);
        assert!(query.contains(" linked:pr"));
        assert!(!query.contains("-linked:pr"));
    }

    #[test]
    fn repository_query_star_and_fork_ranges() {
        let bounded = FilterParams::builder()
            .service(Service::GitHub)
            .min_stars(100)
            .max_stars(5000)
            .min_forks(25)
            .category("devops")
            .build();
        let query = github_repository_query(&bounded, QueryMode::Category);
        assert!(query.contains("stars:100..5000"));
        assert!(query.contains("forks:>=25"));
        assert!(query.contains("is:public archived:false"));
    }

    #[test]
    fn every_documented_category_maps_to_its_topic() {
        let expected = [
            ("web-dev", "web"),
            ("mobile-dev", "mobile"),
            ("data-science", "data-science"),
            ("machine-learning", "machine-learning"),
            ("devops", "devops"),
            ("cybersecurity", "security"),
            ("documentation", "documentation"),
        ];
        for (category, topic) in expected {
            assert_eq!(category_topic(category), Some(topic), "category {category}");

            let params = FilterParams::builder()
                .service(Service::GitHub)
                .category(category)
                .build();
            let query = github_repository_query(&params, QueryMode::Category);
            assert!(
                query.contains(&format!("topic:{topic}")),
                "query for {category}: {query}"
            );
        }
    }

    #[test]
    fn category_all_emits_no_topic_clause() {
        let query = github_repository_query(&params(), QueryMode::Category);
        assert!(!query.contains("topic:"));
    }

    #[test]
    fn unknown_category_is_silently_ignored() {
        let params = FilterParams::builder()
            .service(Service::GitHub)
            .category("unknown-value")
            .build();
        let query = github_repository_query(&params, QueryMode::Category);
        assert!(!query.contains("topic:"));
    }

    #[test]
    fn framework_topic_is_taken_verbatim() {
        let params = FilterParams::builder()
            .service(Service::GitHub)
            .framework("react")
            .build();
        let query = github_repository_query(&params, QueryMode::Framework);
        assert!(query.contains("topic:react"));
    }

    #[test]
    fn gitlab_issue_query_fixed_parameters() {
        let gitlab = FilterParams::builder().service(Service::GitLab).build();
        let query = gitlab_issue_query(&gitlab);
        assert!(query.contains("labels=good%20first%20issue,newcomer"));
        assert!(query.contains("state=opened"));
        assert!(query.contains("scope=all"));
        assert!(query.contains("order_by=created_at"));
        assert!(query.contains("sort=desc"));
        assert!(query.contains("per_page=30"));
        assert!(!query.contains("search="));
        assert!(!query.contains("page="));
    }

    #[test]
    fn gitlab_issue_query_language_rides_search_param() {
        let gitlab = FilterParams::builder()
            .service(Service::GitLab)
            .language("Rust")
            .cursor("3")
            .build();
        let query = gitlab_issue_query(&gitlab);
        assert!(query.contains("search=Rust"));
        assert!(query.contains("page=3"));
    }

    #[test]
    fn gitlab_project_query_topic_and_language() {
        let gitlab = FilterParams::builder()
            .service(Service::GitLab)
            .category("devops")
            .language("Go")
            .build();
        let query = gitlab_project_query(&gitlab, QueryMode::Category);
        assert!(query.contains("min_access_level=10"));
        assert!(query.contains("archived=false"));
        assert!(query.contains("order_by=last_activity_at"));
        assert!(query.contains("per_page=10"));
        assert!(query.contains("topic=devops"));
        assert!(query.contains("with_programming_language=Go"));
    }

    #[test]
    fn gitlab_values_are_percent_encoded() {
        let gitlab = FilterParams::builder()
            .service(Service::GitLab)
            .framework("machine learning")
            .build();
        let query = gitlab_project_query(&gitlab, QueryMode::Framework);
        assert!(query.contains("topic=machine%20learning"));
    }

    #[test]
    fn gitlab_project_issues_query_is_fixed() {
        let query = gitlab_project_issues_query();
        assert_eq!(
            query,
            "labels=good%20first%20issue&state=opened&per_page=5"
        );
    }
}
