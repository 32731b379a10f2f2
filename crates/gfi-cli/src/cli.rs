// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for gfi.
//!
//! Uses clap's derive API for declarative CLI parsing with hierarchical
//! noun-verb subcommands.

use std::io::IsTerminal;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use gfi_core::Service;

/// Output format for CLI results.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// YAML output for programmatic consumption
    Yaml,
    /// Markdown output
    Markdown,
}

/// Global output configuration passed to commands.
#[derive(Clone)]
pub struct OutputContext {
    /// Output format (text, json, yaml, markdown)
    pub format: OutputFormat,
    /// Suppress non-essential output (spinners, prompts)
    pub quiet: bool,
    /// Whether stdout is a terminal (TTY)
    pub is_tty: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, quiet: bool) -> Self {
        Self {
            format,
            quiet,
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Returns true if interactive elements (spinners, prompts) should be
    /// shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.quiet && matches!(self.format, OutputFormat::Text)
    }
}

/// gfi - find good first issues on GitHub and GitLab.
///
/// Searches "good first issue"-labeled tickets with star, fork,
/// language, category, framework, assignment, and pull-request filters,
/// and keeps a local bookmark list.
#[derive(Parser)]
#[command(name = "gfi")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format (text, json, yaml, markdown)
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Suppress non-essential output (spinners, prompts)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Search for good first issues
    Search(SearchArgs),

    /// Manage bookmarked issues
    #[command(subcommand)]
    Bookmark(BookmarkCommand),

    /// Show credential status
    #[command(subcommand)]
    Auth(AuthCommand),

    /// Generate a shell completion script
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Search filter flags, mirroring the filter form field for field.
#[derive(Args)]
pub struct SearchArgs {
    /// Provider to search (github or gitlab)
    #[arg(long, default_value = "github")]
    pub service: Service,

    /// Language filter; several space-separated values require ALL of
    /// them on GitHub and become a substring search on GitLab
    #[arg(long, default_value = "")]
    pub language: String,

    /// Minimum repository stars
    #[arg(long, default_value_t = 0)]
    pub min_stars: u64,

    /// Maximum repository stars
    #[arg(long, default_value_t = 1_000_000)]
    pub max_stars: u64,

    /// Minimum repository forks
    #[arg(long, default_value_t = 0)]
    pub min_forks: u64,

    /// Search assigned issues instead of unassigned ones
    #[arg(long)]
    pub assigned: bool,

    /// Category filter ("all" for none): web-dev, mobile-dev,
    /// data-science, machine-learning, devops, cybersecurity,
    /// documentation
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Framework/topic filter (free text, overrides --category)
    #[arg(long, default_value = "")]
    pub framework: String,

    /// Search issues with a linked pull request instead of ones without
    #[arg(long)]
    pub linked_pr: bool,

    /// Resume token from a previous page (provider-specific)
    #[arg(long)]
    pub cursor: Option<String>,

    /// Show only bookmarked issues from the results
    #[arg(long)]
    pub bookmarked: bool,
}

/// Bookmark subcommands
#[derive(Subcommand)]
pub enum BookmarkCommand {
    /// Toggle a bookmark on an issue id
    Toggle {
        /// Issue id (GitHub: issue URL; GitLab: numeric id)
        id: String,
    },

    /// List bookmarked issue ids
    List,

    /// Remove all bookmarks
    Clear,
}

/// Credential subcommands
#[derive(Subcommand)]
pub enum AuthCommand {
    /// Show which credential environment variables are set
    Status,
}
