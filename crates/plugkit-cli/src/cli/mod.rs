//! CLI for plugkit. Subcommands and their flags come from [`Registry`].

mod commands;
mod context;
mod registry;

use std::io::{self, Read, Write};

use anyhow::{bail, Result};
use clap::{ArgMatches, Command};
use plugkit_core::config::PlugkitConfig;
use plugkit_core::help::run_with_deprecation_warning;
use plugkit_core::ProcessEnv;

use commands::{run_download_config, run_exec, run_flags, run_whoami};
use registry::{Registry, DL_CONFIG, DOWNLOAD_CONFIG, EXEC, FLAGS, WHOAMI};

pub fn run_from_args(cfg: &PlugkitConfig) -> Result<()> {
    let registry = Registry::builtin();
    let root = registry.command();
    let matches = root.clone().get_matches();
    let stdout = io::stdout();
    dispatch(&registry, &root, cfg, matches, &mut io::stdin(), &mut stdout.lock())
}

fn dispatch(
    registry: &Registry,
    root: &Command,
    cfg: &PlugkitConfig,
    matches: ArgMatches,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<()> {
    let Some((name, sub)) = matches.subcommand() else {
        bail!("no command given");
    };
    let ctx = registry.context(root, name, sub.clone())?;
    tracing::debug!(command = name, "dispatching");

    match name {
        DOWNLOAD_CONFIG => run_download_config(&ctx, &cfg.download, out),
        DL_CONFIG => run_with_deprecation_warning(DOWNLOAD_CONFIG, DL_CONFIG, &ctx, |c| {
            run_download_config(c, &cfg.download, out)
        }),
        FLAGS => run_flags(&ctx, registry, out),
        WHOAMI => run_whoami(&ctx, &ProcessEnv, stdin, out),
        EXEC => run_exec(&ctx, out),
        other => bail!("unknown command '{}'", other),
    }
}

#[cfg(test)]
mod tests;
