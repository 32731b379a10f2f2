// SPDX-License-Identifier: Apache-2.0

//! Pagination cursor tracking across pages of one logical search.
//!
//! Cursors are opaque and provider-defined: GitHub issue search hands
//! back a GraphQL `endCursor`, the repository modes hand back a cursor
//! over the *repository* search, and GitLab uses a stringified 1-based
//! page number. None of these are interchangeable, so the held token is
//! tagged with the provider and query mode that minted it and is
//! discarded on any switch.

use crate::filter::{QueryMode, Service};
use crate::issue::Page;

/// Tracks the resume token between pages of one logical search.
#[derive(Debug, Default)]
pub struct Paginator {
    state: Option<CursorState>,
}

#[derive(Debug)]
struct CursorState {
    service: Service,
    mode: QueryMode,
    token: Option<String>,
    has_next_page: bool,
}

impl Paginator {
    /// A paginator with no recorded page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The resume token for the next page, only when the last recorded
    /// page was produced by the same provider and query mode.
    ///
    /// Switching provider or mode mid-session restarts from the first
    /// page; cursor formats are never compatible across the boundary.
    #[must_use]
    pub fn cursor_for(&self, service: Service, mode: QueryMode) -> Option<&str> {
        let state = self.state.as_ref()?;
        if state.service == service && state.mode == mode {
            state.token.as_deref()
        } else {
            None
        }
    }

    /// Whether the last recorded page reported more pages. Sole authority
    /// for offering "load more".
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.has_next_page)
    }

    /// Records the page that a `(service, mode)` fetch produced.
    pub fn record(&mut self, service: Service, mode: QueryMode, page: &Page) {
        self.state = Some(CursorState {
            service,
            mode,
            token: page.end_cursor.clone(),
            has_next_page: page.has_next_page,
        });
    }

    /// Forgets any held cursor.
    pub fn reset(&mut self) {
        self.state = None;
    }
}
