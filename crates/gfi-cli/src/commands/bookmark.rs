// SPDX-License-Identifier: Apache-2.0

//! Bookmark command handlers.

use anyhow::Result;
use gfi_core::bookmarks;
use tracing::{debug, instrument};

use super::types::{BookmarkClearResult, BookmarkListResult, BookmarkToggleResult};

/// Toggle a bookmark on an issue id.
#[instrument]
pub fn run_toggle(id: &str) -> Result<BookmarkToggleResult> {
    let bookmarked = bookmarks::toggle_bookmark(id)?;
    debug!(id, bookmarked, "Bookmark toggled");
    Ok(BookmarkToggleResult {
        id: id.to_string(),
        bookmarked,
    })
}

/// List the bookmarked issue ids.
pub fn run_list() -> Result<BookmarkListResult> {
    let set = bookmarks::load()?;
    Ok(BookmarkListResult {
        bookmarks: set.bookmarks,
    })
}

/// Remove all bookmarks.
#[instrument]
pub fn run_clear() -> Result<BookmarkClearResult> {
    let set = bookmarks::load()?;
    let removed = set.len();
    bookmarks::save(&gfi_core::BookmarkSet::default())?;
    debug!(removed, "Bookmarks cleared");
    Ok(BookmarkClearResult { removed })
}
