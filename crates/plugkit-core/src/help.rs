//! Help and usage handling for commands that parse their own arguments.

use crate::context::FlagContext;
use crate::error::{documentation_message, FlagError};

/// Print the command help if `args` is a bare `--help` / `-h`.
///
/// Returns whether help was shown. Only meaningful for commands that skip
/// the framework's flag parsing and receive their arguments raw.
pub fn show_help_if_requested(ctx: &dyn FlagContext, args: &[String]) -> Result<bool, FlagError> {
    match args {
        [only] if only == "--help" || only == "-h" => {
            ctx.print_command_help().map_err(FlagError::Help)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Log `msg`, print the command help, and return `msg` as a usage error.
///
/// If help cannot be printed, that failure is returned instead.
pub fn print_help_and_return_error(msg: &str, ctx: &dyn FlagContext) -> FlagError {
    tracing::error!("{} {}", msg, documentation_message());
    if let Err(e) = ctx.print_command_help() {
        return FlagError::Help(e);
    }
    FlagError::Usage(msg.to_string())
}

/// Usage error for a command that received the wrong number of positional arguments.
pub fn wrong_number_of_arguments(ctx: &dyn FlagContext) -> FlagError {
    let msg = format!("Wrong number of arguments ({}).", ctx.arguments().len());
    print_help_and_return_error(&msg, ctx)
}

/// Run `cmd` after warning that `old_subcommand` is a deprecated spelling of `cmd_name`.
pub fn run_with_deprecation_warning<C, T, E>(
    cmd_name: &str,
    old_subcommand: &str,
    ctx: &C,
    cmd: impl FnOnce(&C) -> Result<T, E>,
) -> Result<T, E>
where
    C: FlagContext + ?Sized,
{
    tracing::warn!(
        "'{}' is a deprecated syntax of the command; use '{}' instead",
        old_subcommand,
        cmd_name
    );
    cmd(ctx)
}
