// SPDX-License-Identifier: Apache-2.0

use console::style;
use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::types::{BookmarkClearResult, BookmarkListResult, BookmarkToggleResult};

use super::Renderable;

impl Renderable for BookmarkToggleResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        if self.bookmarked {
            writeln!(w, "{} {}", style("Bookmarked").green(), self.id)?;
        } else {
            writeln!(w, "{} {}", style("Removed bookmark").yellow(), self.id)?;
        }
        Ok(())
    }
}

impl Renderable for BookmarkListResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        if self.bookmarks.is_empty() {
            writeln!(w, "{}", style("No bookmarks yet.").yellow())?;
            return Ok(());
        }

        writeln!(
            w,
            "{}",
            style(format!("{} bookmarked issues:", self.bookmarks.len())).bold()
        )?;
        for id in &self.bookmarks {
            writeln!(w, "  {id}")?;
        }
        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        if self.bookmarks.is_empty() {
            writeln!(w, "No bookmarks yet.")?;
            return Ok(());
        }

        writeln!(w, "## Bookmarks ({})\n", self.bookmarks.len())?;
        for id in &self.bookmarks {
            writeln!(w, "- {id}")?;
        }
        Ok(())
    }
}

impl Renderable for BookmarkClearResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(
            w,
            "{}",
            style(format!("Removed {} bookmarks.", self.removed)).yellow()
        )?;
        Ok(())
    }
}
