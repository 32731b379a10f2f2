// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the gfi CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only
//! gfi search
//!
//! # Debug output for troubleshooting, including built query strings
//! RUST_LOG=gfi=debug gfi search --category devops
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::OutputFormat;

/// Initialize the logging subsystem.
///
/// `-v` raises gfi's own logging to debug level; structured output
/// formats imply quiet logging. The `RUST_LOG` environment variable
/// overrides the defaults either way.
pub fn init_logging(format: OutputFormat, verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    // Derive quiet mode from format (structured formats are quiet)
    let quiet = matches!(
        format,
        OutputFormat::Json | OutputFormat::Yaml | OutputFormat::Markdown
    );

    let default_filter = if verbose {
        "gfi=debug,octocrab=error,reqwest=error"
    } else if quiet {
        "gfi=error,octocrab=error,reqwest=error"
    } else {
        "gfi=warn,octocrab=error,reqwest=error"
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
