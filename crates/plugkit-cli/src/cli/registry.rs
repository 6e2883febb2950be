//! Flags known to the CLI and which commands accept them.

use std::collections::HashMap;

use anyhow::{Context, Result};
use clap::{crate_version, Arg, ArgAction, ArgMatches, Command};
use plugkit_core::download::{MIN_SPLIT_FLAG, SKIP_CHECKSUM_FLAG, SPLIT_COUNT_FLAG};
use plugkit_core::env::parse_bool;
use plugkit_core::flags::{PROJECT_FLAG, QUIET_FLAG};
use plugkit_core::threads::THREADS_FLAG;
use plugkit_core::{get_command_flags, FlagDescriptor, FlagKind};

use super::context::{ClapContext, ARGS_ID};

pub const DOWNLOAD_CONFIG: &str = "download-config";
pub const DL_CONFIG: &str = "dl-config";
pub const FLAGS: &str = "flags";
pub const WHOAMI: &str = "whoami";
pub const EXEC: &str = "exec";

pub const TARGET_FLAG: &str = "target";
pub const EXCLUSIONS_FLAG: &str = "exclusions";
pub const PROPS_FLAG: &str = "props";
pub const LIMIT_FLAG: &str = "limit";
pub const ACCESS_TOKEN_FLAG: &str = "access-token";
pub const ACCESS_TOKEN_STDIN_FLAG: &str = "access-token-stdin";

const COMMANDS: &[(&str, &str)] = &[
    (DOWNLOAD_CONFIG, "Print the download configuration built from the given flags."),
    (DL_CONFIG, "Deprecated spelling of download-config."),
    (FLAGS, "List the flags a command accepts."),
    (WHOAMI, "Show the resolved project key, prompt mode and access token."),
    (EXEC, "Echo raw arguments without flag parsing."),
];

const DOWNLOAD_FLAGS: &[&str] = &[
    TARGET_FLAG,
    MIN_SPLIT_FLAG,
    SPLIT_COUNT_FLAG,
    THREADS_FLAG,
    SKIP_CHECKSUM_FLAG,
    EXCLUSIONS_FLAG,
    PROPS_FLAG,
    LIMIT_FLAG,
];

/// Flag descriptors plus the command-to-flag-name table.
pub struct Registry {
    descriptors: HashMap<String, FlagDescriptor>,
    commands: HashMap<&'static str, Vec<&'static str>>,
}

impl Registry {
    pub fn builtin() -> Self {
        let descriptors = [
            FlagDescriptor::string(TARGET_FLAG, "[Default: .] Local path to download into."),
            FlagDescriptor::string(
                MIN_SPLIT_FLAG,
                "[Default: 5120] Minimum file size in KB to split into ranges when downloading.",
            ),
            FlagDescriptor::string(
                SPLIT_COUNT_FLAG,
                "[Default: 3] Number of ranges a split download uses. Maximum 15.",
            ),
            FlagDescriptor::string(THREADS_FLAG, "[Default: 3] Number of working threads."),
            FlagDescriptor::bool(SKIP_CHECKSUM_FLAG, "Skip checksum verification after download."),
            FlagDescriptor::string(EXCLUSIONS_FLAG, "Semicolon-separated list of exclusion patterns."),
            FlagDescriptor::string(PROPS_FLAG, "Semicolon-separated list of key=value properties."),
            FlagDescriptor::string(LIMIT_FLAG, "[Optional] Maximum number of files to download."),
            FlagDescriptor::bool(QUIET_FLAG, "[Default: $CI] Skip the confirmation prompt."),
            FlagDescriptor::string(
                PROJECT_FLAG,
                "[Optional] Project key. Falls back to JFROG_CLI_BUILD_PROJECT.",
            ),
            FlagDescriptor::string(ACCESS_TOKEN_FLAG, "[Optional] Access token."),
            FlagDescriptor::bool(ACCESS_TOKEN_STDIN_FLAG, "Read the access token from stdin."),
        ]
        .into_iter()
        .map(|d| (d.name.clone(), d))
        .collect();

        let commands = HashMap::from([
            (DOWNLOAD_CONFIG, DOWNLOAD_FLAGS.to_vec()),
            (DL_CONFIG, DOWNLOAD_FLAGS.to_vec()),
            (FLAGS, Vec::new()),
            (
                WHOAMI,
                vec![PROJECT_FLAG, QUIET_FLAG, ACCESS_TOKEN_FLAG, ACCESS_TOKEN_STDIN_FLAG],
            ),
            (EXEC, Vec::new()),
        ]);

        Self {
            descriptors,
            commands,
        }
    }

    /// Sorted descriptors of `cmd`; empty (and logged) for unknown commands.
    pub fn flags_for(&self, cmd: &str) -> Vec<FlagDescriptor> {
        get_command_flags(cmd, &self.commands, &self.descriptors)
    }

    /// Full clap command tree.
    pub fn command(&self) -> Command {
        let mut root = Command::new("plugkit")
            .version(crate_version!())
            .about("plugkit: flag extraction helpers for CLI plugins")
            .subcommand_required(true)
            .arg_required_else_help(true);

        for (name, about) in COMMANDS {
            let mut sub = Command::new(*name)
                .about(*about)
                .bin_name(format!("plugkit {}", name));
            for desc in self.flags_for(name) {
                sub = sub.arg(to_arg(&desc));
            }
            sub = match *name {
                FLAGS => sub.arg(
                    Arg::new(ARGS_ID)
                        .value_name("COMMAND")
                        .num_args(0..)
                        .action(ArgAction::Append),
                ),
                // Arguments reach the handler untouched, including --help.
                EXEC => sub.disable_help_flag(true).arg(
                    Arg::new(ARGS_ID)
                        .value_name("ARGS")
                        .num_args(0..)
                        .trailing_var_arg(true)
                        .allow_hyphen_values(true)
                        .action(ArgAction::Append),
                ),
                _ => sub,
            };
            root = root.subcommand(sub);
        }
        root
    }

    /// Context for the subcommand `name` of `root` parsed into `matches`.
    pub fn context(
        &self,
        root: &Command,
        name: &str,
        matches: ArgMatches,
    ) -> Result<ClapContext> {
        let command = root
            .find_subcommand(name)
            .cloned()
            .with_context(|| format!("unknown command '{}'", name))?;
        Ok(ClapContext::new(command, matches, self.flags_for(name)))
    }
}

fn to_arg(desc: &FlagDescriptor) -> Arg {
    let arg = Arg::new(desc.name.clone())
        .long(desc.name.clone())
        .help(desc.description.clone());
    match &desc.kind {
        // `--flag` alone means true; `--flag=false` is an explicit false.
        FlagKind::Bool { default } => arg
            .action(ArgAction::Set)
            .value_parser(|raw: &str| {
                parse_bool(raw).ok_or_else(|| format!("'{}' is not a boolean", raw))
            })
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
            .default_value(if *default { "true" } else { "false" }),
        FlagKind::String { default, mandatory } => {
            // Values such as `-1` reach the validators instead of parsing as flags.
            let arg = arg
                .action(ArgAction::Set)
                .value_name("VALUE")
                .allow_hyphen_values(true)
                .required(*mandatory);
            match default {
                Some(value) => arg.default_value(value.clone()),
                None => arg,
            }
        }
    }
}
