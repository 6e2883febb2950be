//! flags: list the flags a command accepts, sorted by name.

use std::io::Write;

use anyhow::Result;
use plugkit_core::flags::extract_positional_arguments;
use plugkit_core::help::wrong_number_of_arguments;
use plugkit_core::{FlagContext, FlagKind};

use crate::cli::registry::Registry;

pub fn run_flags(ctx: &dyn FlagContext, registry: &Registry, out: &mut dyn Write) -> Result<()> {
    let args = extract_positional_arguments(ctx);
    let [command] = args.as_slice() else {
        return Err(wrong_number_of_arguments(ctx).into());
    };

    let flags = registry.flags_for(command);
    if flags.is_empty() {
        writeln!(out, "no flags registered for '{}'", command)?;
        return Ok(());
    }
    for flag in flags {
        let kind = match flag.kind {
            FlagKind::Bool { .. } => "bool",
            FlagKind::String { .. } => "string",
        };
        writeln!(out, "--{:<20} {:<7} {}", flag.name, kind, flag.description)?;
    }
    Ok(())
}
