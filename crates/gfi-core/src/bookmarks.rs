// SPDX-License-Identifier: Apache-2.0

//! Local bookmark persistence.
//!
//! Stores bookmarked issue ids in `~/.local/share/gfi/bookmarks.json`.
//! Only the ids are kept, never full issue records; the set survives
//! across sessions and is written back on every toggle.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::data_dir;
use crate::issue::Issue;

/// The set of bookmarked issue ids.
///
/// Insertion order is preserved for display purposes; membership is what
/// carries meaning.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BookmarkSet {
    /// Bookmarked issue ids, oldest first.
    pub bookmarks: Vec<String>,
}

impl BookmarkSet {
    /// Whether the id is bookmarked.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.bookmarks.iter().any(|b| b == id)
    }

    /// Toggles the id and reports whether it is bookmarked afterwards.
    ///
    /// Toggling twice returns the set to its original state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(position) = self.bookmarks.iter().position(|b| b == id) {
            self.bookmarks.remove(position);
            false
        } else {
            self.bookmarks.push(id.to_string());
            true
        }
    }

    /// Number of bookmarked ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    /// Whether no ids are bookmarked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    /// Keeps exactly the issues whose ids are bookmarked.
    #[must_use]
    pub fn retain_bookmarked(&self, issues: Vec<Issue>) -> Vec<Issue> {
        issues
            .into_iter()
            .filter(|issue| self.contains(&issue.id))
            .collect()
    }
}

/// Returns the path to the bookmark file.
#[must_use]
pub fn bookmarks_file_path() -> PathBuf {
    data_dir().join("bookmarks.json")
}

/// Load the bookmark set from the default location.
///
/// Returns an empty set if the file doesn't exist.
pub fn load() -> Result<BookmarkSet> {
    load_from(&bookmarks_file_path())
}

/// Load the bookmark set from a specific file.
pub fn load_from(path: &Path) -> Result<BookmarkSet> {
    if !path.exists() {
        return Ok(BookmarkSet::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read bookmark file: {}", path.display()))?;

    let set: BookmarkSet = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse bookmark file: {}", path.display()))?;

    Ok(set)
}

/// Save the bookmark set to the default location.
///
/// Creates parent directories if they don't exist.
pub fn save(set: &BookmarkSet) -> Result<()> {
    save_to(&bookmarks_file_path(), set)
}

/// Save the bookmark set to a specific file.
pub fn save_to(path: &Path, set: &BookmarkSet) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let contents = serde_json::to_string_pretty(set).context("Failed to serialize bookmarks")?;

    fs::write(path, contents)
        .with_context(|| format!("Failed to write bookmark file: {}", path.display()))?;

    Ok(())
}

/// Toggle a bookmark in the persistent set.
///
/// Loads the set, toggles the id, and writes the set back. Returns
/// whether the id is bookmarked afterwards.
pub fn toggle_bookmark(id: &str) -> Result<bool> {
    let mut set = load()?;
    let bookmarked = set.toggle(id);
    save(&set)?;
    Ok(bookmarked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn issue(id: &str) -> Issue {
        Issue {
            id: id.to_string(),
            title: format!("issue {id}"),
            html_url: format!("https://github.com/acme/widget/issues/{id}"),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            repository_url: "https://github.com/acme/widget".to_string(),
            repository_name: "acme/widget".to_string(),
            stars_count: 100,
            fork_count: 10,
            language: None,
            is_assigned: false,
            labels: vec![],
            comments_count: 0,
            has_pull_requests: false,
            pr_status: None,
            license: None,
        }
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut set = BookmarkSet::default();

        assert!(set.toggle("X"));
        assert!(set.contains("X"));

        assert!(!set.toggle("X"));
        assert!(!set.contains("X"));
        assert!(set.is_empty());
    }

    #[test]
    fn toggle_preserves_other_entries() {
        let mut set = BookmarkSet::default();
        set.toggle("a");
        set.toggle("b");
        set.toggle("c");

        set.toggle("b");
        assert_eq!(set.bookmarks, vec!["a", "c"]);
    }

    #[test]
    fn retain_bookmarked_is_the_exact_intersection() {
        let mut set = BookmarkSet::default();
        set.toggle("1");
        set.toggle("3");
        set.toggle("missing-from-results");

        let displayed = vec![issue("1"), issue("2"), issue("3"), issue("4")];
        let kept = set.retain_bookmarked(displayed);
        let ids: Vec<_> = kept.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn load_missing_file_yields_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let set = load_from(&dir.path().join("bookmarks.json")).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn bookmarks_survive_a_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");

        let mut set = BookmarkSet::default();
        set.toggle("https://github.com/acme/widget/issues/1");
        set.toggle("42");
        save_to(&path, &set).unwrap();

        let reloaded = load_from(&path).unwrap();
        assert_eq!(reloaded.bookmarks, set.bookmarks);
    }

    #[test]
    fn corrupt_file_is_an_error_not_a_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");
        fs::write(&path, "not json").unwrap();

        assert!(load_from(&path).is_err());
    }
}
