//! [`FlagContext`] over clap's parse result.

use std::collections::HashMap;
use std::io;

use clap::parser::ValueSource;
use clap::{ArgMatches, Command};
use plugkit_core::{FlagContext, FlagDescriptor};

/// Id of the positional argument list on commands that take one.
pub const ARGS_ID: &str = "args";

pub struct ClapContext {
    command: Command,
    matches: ArgMatches,
    flags: HashMap<String, FlagDescriptor>,
    arguments: Vec<String>,
}

impl ClapContext {
    pub fn new(command: Command, matches: ArgMatches, flags: Vec<FlagDescriptor>) -> Self {
        let takes_args = command.get_arguments().any(|a| a.get_id() == ARGS_ID);
        let arguments = if takes_args {
            matches
                .get_many::<String>(ARGS_ID)
                .map(|values| values.cloned().collect())
                .unwrap_or_default()
        } else {
            Vec::new()
        };
        Self {
            command,
            matches,
            flags: flags.into_iter().map(|d| (d.name.clone(), d)).collect(),
            arguments,
        }
    }

    // Only ids registered on this command are queried; clap panics on others.
    fn descriptor(&self, name: &str) -> Option<&FlagDescriptor> {
        self.flags.get(name)
    }
}

impl FlagContext for ClapContext {
    fn command_name(&self) -> &str {
        self.command.get_name()
    }

    fn is_flag_set(&self, name: &str) -> bool {
        self.descriptor(name).is_some()
            && self.matches.value_source(name) == Some(ValueSource::CommandLine)
    }

    fn string_flag_value(&self, name: &str) -> String {
        match self.descriptor(name) {
            Some(d) if !d.is_bool() => self
                .matches
                .get_one::<String>(name)
                .cloned()
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn bool_flag_value(&self, name: &str) -> bool {
        match self.descriptor(name) {
            Some(d) if d.is_bool() => self.matches.get_one::<bool>(name).copied().unwrap_or(false),
            _ => false,
        }
    }

    fn arguments(&self) -> &[String] {
        &self.arguments
    }

    fn print_command_help(&self) -> io::Result<()> {
        self.command.clone().print_help()
    }
}
