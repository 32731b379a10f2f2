// SPDX-License-Identifier: Apache-2.0

use console::style;
use gfi_core::{format_relative_time, truncate};
use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::types::SearchResult;

use super::Renderable;

impl Renderable for SearchResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        // A failed page and an empty page are different states; keep them
        // visually distinct.
        if let Some(error) = &self.error {
            writeln!(w, "{}", style(format!("Search failed: {error}")).red())?;
            return Ok(());
        }

        if self.issues.is_empty() {
            writeln!(
                w,
                "{}",
                style("No matching issues found. Try loosening the filters.").yellow()
            )?;
            return Ok(());
        }

        writeln!(w)?;
        writeln!(
            w,
            "{}",
            style(format!("Found {} issues on {}:", self.issues.len(), self.service)).bold()
        )?;
        writeln!(w)?;

        for issue in &self.issues {
            let marker = if self.bookmarked_ids.contains(&issue.id) {
                style("*").yellow().to_string()
            } else {
                " ".to_string()
            };

            let age = format_relative_time(&issue.created_at);
            let language = issue.language.as_deref().unwrap_or("-");

            writeln!(
                w,
                "{marker} {} {}",
                style(truncate(&issue.title, 60)).bold(),
                style(age).dim()
            )?;
            writeln!(
                w,
                "    {}  {}  {} stars  {} forks  {} comments",
                style(&issue.repository_name).cyan(),
                language,
                issue.stars_count,
                issue.fork_count,
                issue.comments_count
            )?;
            if issue.has_pull_requests {
                let status = issue
                    .pr_status
                    .map_or_else(|| "unknown".to_string(), |s| s.to_string());
                writeln!(w, "    {}", style(format!("linked PR: {status}")).dim())?;
            }
            writeln!(w, "    {}", style(&issue.html_url).underlined())?;
        }

        if self.has_next_page
            && let Some(cursor) = &self.end_cursor
        {
            writeln!(w)?;
            writeln!(
                w,
                "{}",
                style(format!("More results available. Resume with --cursor {cursor}")).dim()
            )?;
        }
        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        if let Some(error) = &self.error {
            writeln!(w, "**Search failed:** {error}")?;
            return Ok(());
        }

        if self.issues.is_empty() {
            writeln!(w, "No matching issues found.")?;
            return Ok(());
        }

        writeln!(w, "## Issues ({} on {})\n", self.issues.len(), self.service)?;

        for issue in &self.issues {
            writeln!(
                w,
                "- [{}]({}) - {} ({} stars)",
                issue.title, issue.html_url, issue.repository_name, issue.stars_count
            )?;
        }

        if self.has_next_page
            && let Some(cursor) = &self.end_cursor
        {
            writeln!(w, "\nNext cursor: `{cursor}`")?;
        }
        Ok(())
    }
}
