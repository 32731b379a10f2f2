// SPDX-License-Identifier: Apache-2.0

use console::style;
use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::types::AuthStatusResult;

use super::Renderable;

impl Renderable for AuthStatusResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        match self.github_token_from {
            Some(var) => writeln!(w, "{} GitHub token found in {var}", style("ok").green())?,
            None => writeln!(
                w,
                "{} GitHub token not set (GFI_GITHUB_TOKEN or GITHUB_TOKEN)",
                style("missing").red()
            )?,
        }
        match self.gitlab_token_from {
            Some(var) => writeln!(w, "{} GitLab token found in {var}", style("ok").green())?,
            None => writeln!(
                w,
                "{} GitLab token not set (GFI_GITLAB_TOKEN or GITLAB_TOKEN)",
                style("missing").red()
            )?,
        }
        Ok(())
    }
}
