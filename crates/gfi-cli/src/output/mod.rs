// SPDX-License-Identifier: Apache-2.0

//! Output rendering for CLI commands.
//!
//! Centralizes all output formatting logic, supporting text, JSON, YAML,
//! and markdown formats. Command handlers return data; this module
//! handles presentation.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};

use crate::cli::{OutputContext, OutputFormat};
use crate::commands::types::{
    AuthStatusResult, BookmarkClearResult, BookmarkListResult, BookmarkToggleResult, SearchResult,
};

/// Trait for types that can be rendered in multiple output formats.
pub trait Renderable: Serialize {
    /// Render as human-readable text to the given writer.
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()>;

    /// Render as markdown. Defaults to text rendering.
    fn render_markdown(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        self.render_text(w, ctx)
    }
}

/// Generic render function - handles JSON/YAML via serde, delegates
/// text/markdown to the trait.
pub fn render<T: Renderable>(result: &T, ctx: &OutputContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(result).context("Failed to serialize to JSON")?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_saphyr::to_string(result).context("Failed to serialize to YAML")?;
            println!("{yaml}");
        }
        OutputFormat::Markdown => {
            result
                .render_markdown(&mut io::stdout(), ctx)
                .context("Failed to render markdown")?;
        }
        OutputFormat::Text => {
            result
                .render_text(&mut io::stdout(), ctx)
                .context("Failed to render text")?;
        }
    }
    Ok(())
}

/// Renders a search result page.
pub fn render_search(result: &SearchResult, ctx: &OutputContext) -> Result<()> {
    render(result, ctx)
}

/// Renders the outcome of a bookmark toggle.
pub fn render_bookmark_toggle(result: &BookmarkToggleResult, ctx: &OutputContext) -> Result<()> {
    render(result, ctx)
}

/// Renders the bookmark list.
pub fn render_bookmark_list(result: &BookmarkListResult, ctx: &OutputContext) -> Result<()> {
    render(result, ctx)
}

/// Renders the outcome of clearing bookmarks.
pub fn render_bookmark_clear(result: &BookmarkClearResult, ctx: &OutputContext) -> Result<()> {
    render(result, ctx)
}

/// Renders credential status.
pub fn render_auth_status(result: &AuthStatusResult, ctx: &OutputContext) -> Result<()> {
    render(result, ctx)
}

mod auth;
mod bookmarks;
mod issues;
