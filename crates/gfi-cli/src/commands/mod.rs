// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the gfi CLI.

pub mod auth;
pub mod bookmark;
pub mod completion;
pub mod search;
pub mod types;

use std::time::Duration;

use anyhow::{Context, Result};
use dialoguer::Confirm;
use gfi_core::{AppConfig, Paginator, QueryMode, bookmarks};
use indicatif::{ProgressBar, ProgressStyle};

use self::types::SearchResult;
use crate::cli::{AuthCommand, BookmarkCommand, Commands, OutputContext};
use crate::output;

/// Creates a styled spinner (only if interactive).
fn maybe_spinner(ctx: &OutputContext, message: &str) -> Option<ProgressBar> {
    if ctx.is_interactive() {
        let s = ProgressBar::new_spinner();
        s.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("Invalid spinner template"),
        );
        s.set_message(message.to_string());
        s.enable_steady_tick(Duration::from_millis(100));
        Some(s)
    } else {
        None
    }
}

/// Dispatch to the appropriate command handler.
pub async fn run(command: Commands, ctx: OutputContext, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Search(args) => {
            let mode = QueryMode::for_params(&args.to_params(None));
            let bookmark_set = bookmarks::load()?;
            let mut paginator = Paginator::new();
            let mut cursor = args.cursor.clone();

            loop {
                let spinner = maybe_spinner(&ctx, "Searching issues...");
                let page = search::run(&args, config, cursor).await;
                if let Some(s) = spinner {
                    s.finish_and_clear();
                }

                paginator.record(args.service, mode, &page);
                let failed = page.error.is_some();
                let result = SearchResult::new(page, args.service, &bookmark_set, args.bookmarked);
                output::render_search(&result, &ctx)?;

                // "Load more" paging only makes sense interactively; in
                // structured output the caller chains --cursor itself.
                if failed || !ctx.is_interactive() || !paginator.has_next_page() {
                    break;
                }

                println!();
                let load_more = Confirm::new()
                    .with_prompt("Load more?")
                    .default(true)
                    .interact()
                    .context("Failed to read load-more choice")?;
                if !load_more {
                    break;
                }

                cursor = paginator
                    .cursor_for(args.service, mode)
                    .map(ToString::to_string);
            }
            Ok(())
        }

        Commands::Bookmark(bookmark_cmd) => match bookmark_cmd {
            BookmarkCommand::Toggle { id } => {
                let result = bookmark::run_toggle(&id)?;
                output::render_bookmark_toggle(&result, &ctx)
            }
            BookmarkCommand::List => {
                let result = bookmark::run_list()?;
                output::render_bookmark_list(&result, &ctx)
            }
            BookmarkCommand::Clear => {
                let result = bookmark::run_clear()?;
                output::render_bookmark_clear(&result, &ctx)
            }
        },

        Commands::Auth(auth_cmd) => match auth_cmd {
            AuthCommand::Status => {
                let result = auth::run_status();
                output::render_auth_status(&result, &ctx)
            }
        },

        Commands::Completion { shell } => completion::run_generate(shell),
    }
}
