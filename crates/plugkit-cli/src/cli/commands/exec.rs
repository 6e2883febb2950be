//! exec: raw-argument command; arguments are echoed one per line.

use std::io::Write;

use anyhow::Result;
use plugkit_core::flags::extract_positional_arguments;
use plugkit_core::help::show_help_if_requested;
use plugkit_core::FlagContext;

pub fn run_exec(ctx: &dyn FlagContext, out: &mut dyn Write) -> Result<()> {
    let args = extract_positional_arguments(ctx);
    if show_help_if_requested(ctx, &args)? {
        return Ok(());
    }
    for arg in &args {
        writeln!(out, "{}", arg)?;
    }
    Ok(())
}
