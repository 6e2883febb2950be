//! whoami: resolved project key, prompt mode and access token.

use std::io::{Read, Write};

use anyhow::Result;
use plugkit_core::flags::{get_project_key, get_quiet_value};
use plugkit_core::secret::resolve_secret;
use plugkit_core::{EnvLookup, FlagContext};

use crate::cli::registry::{ACCESS_TOKEN_FLAG, ACCESS_TOKEN_STDIN_FLAG};

/// The token itself is never printed, only its length.
pub fn run_whoami(
    ctx: &dyn FlagContext,
    env: &dyn EnvLookup,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<()> {
    let token = resolve_secret(ctx, ACCESS_TOKEN_FLAG, ACCESS_TOKEN_STDIN_FLAG, stdin)?;
    let project = get_project_key(ctx, env);

    if project.is_empty() {
        writeln!(out, "project: <none>")?;
    } else {
        writeln!(out, "project: {}", project)?;
    }
    writeln!(out, "quiet: {}", get_quiet_value(ctx, env))?;
    match token.chars().count() {
        0 => writeln!(out, "access token: <none>")?,
        n => writeln!(out, "access token: {} characters", n)?,
    }
    Ok(())
}
