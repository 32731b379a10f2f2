// SPDX-License-Identifier: Apache-2.0

//! gfi - find good first issues on GitHub and GitLab.
//!
//! A CLI tool that helps newcomers discover beginner-friendly issues,
//! filterable by stars, forks, language, category, framework, assignment
//! status, and pull-request linkage, with local bookmarks.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;
mod provider;

pub use provider::CliTokenProvider;

use anyhow::{Context, Result};
use clap::Parser;
use gfi_core::config;
use tracing::debug;

use crate::cli::{Cli, OutputContext};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.output, cli.verbose);

    let output_ctx = OutputContext::from_cli(cli.output, cli.quiet);

    let config = config::load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    if !config.ui.color {
        console::set_colors_enabled(false);
    }

    match commands::run(cli.command, output_ctx, &config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            Err(e)
        }
    }
}
