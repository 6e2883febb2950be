//! CLI tests: context parsing and end-to-end command runs.

use super::context::ClapContext;
use super::registry::Registry;
use super::dispatch;
use anyhow::Result;
use plugkit_core::config::PlugkitConfig;
use std::io::Cursor;

pub(super) fn context(args: &[&str]) -> ClapContext {
    let registry = Registry::builtin();
    let root = registry.command();
    let matches = root.clone().try_get_matches_from(args).unwrap();
    let (name, sub) = matches.subcommand().unwrap();
    registry.context(&root, name, sub.clone()).unwrap()
}

/// Run a command line with the given stdin; returns what it wrote.
pub(super) fn run(args: &[&str], stdin: &str) -> Result<String> {
    run_with(args, stdin, &PlugkitConfig::default())
}

pub(super) fn run_with(args: &[&str], stdin: &str, cfg: &PlugkitConfig) -> Result<String> {
    let registry = Registry::builtin();
    let root = registry.command();
    let matches = root.clone().try_get_matches_from(args)?;
    let mut out = Vec::new();
    let mut stdin = Cursor::new(stdin.to_string());
    dispatch(&registry, &root, cfg, matches, &mut stdin, &mut out)?;
    Ok(String::from_utf8(out)?)
}

mod run_commands;
