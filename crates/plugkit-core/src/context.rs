//! Per-invocation view of the flags and positional arguments a command received.
//!
//! The framework that actually parses the command line implements
//! [`FlagContext`]; the helpers in this crate only read through it.
//! [`StaticContext`] is an in-memory implementation for embedding and tests.

use std::cell::Cell;
use std::collections::HashMap;
use std::io::{self, Write};

/// Read-only access to one command invocation.
pub trait FlagContext {
    /// Name of the command being run (used when printing help).
    fn command_name(&self) -> &str;

    /// Whether `name` was explicitly supplied on the command line.
    fn is_flag_set(&self, name: &str) -> bool;

    /// Raw string value of `name`; empty when the flag has no value.
    fn string_flag_value(&self, name: &str) -> String;

    /// Boolean value of `name`; false when the flag has no value.
    fn bool_flag_value(&self, name: &str) -> bool;

    /// Positional (non-flag) arguments, in order.
    fn arguments(&self) -> &[String];

    /// Print the help text of the current command.
    fn print_command_help(&self) -> io::Result<()>;
}

/// Context backed by plain maps.
#[derive(Debug, Default)]
pub struct StaticContext {
    command_name: String,
    strings: HashMap<String, String>,
    bools: HashMap<String, bool>,
    arguments: Vec<String>,
    help_text: String,
    fail_help: bool,
    help_printed: Cell<usize>,
}

impl StaticContext {
    pub fn new(command_name: impl Into<String>) -> Self {
        Self {
            command_name: command_name.into(),
            ..Self::default()
        }
    }

    /// Mark `name` as set with a string value.
    pub fn with_string(mut self, name: &str, value: &str) -> Self {
        self.strings.insert(name.to_string(), value.to_string());
        self
    }

    /// Mark `name` as set with a boolean value.
    pub fn with_bool(mut self, name: &str, value: bool) -> Self {
        self.bools.insert(name.to_string(), value);
        self
    }

    pub fn with_arguments<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_help_text(mut self, text: &str) -> Self {
        self.help_text = text.to_string();
        self
    }

    /// Make `print_command_help` fail, for exercising error paths.
    pub fn with_failing_help(mut self) -> Self {
        self.fail_help = true;
        self
    }

    /// How many times help was printed through this context.
    pub fn help_printed(&self) -> usize {
        self.help_printed.get()
    }
}

impl FlagContext for StaticContext {
    fn command_name(&self) -> &str {
        &self.command_name
    }

    fn is_flag_set(&self, name: &str) -> bool {
        self.strings.contains_key(name) || self.bools.contains_key(name)
    }

    fn string_flag_value(&self, name: &str) -> String {
        self.strings.get(name).cloned().unwrap_or_default()
    }

    fn bool_flag_value(&self, name: &str) -> bool {
        self.bools.get(name).copied().unwrap_or(false)
    }

    fn arguments(&self) -> &[String] {
        &self.arguments
    }

    fn print_command_help(&self) -> io::Result<()> {
        if self.fail_help {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "help output closed"));
        }
        self.help_printed.set(self.help_printed.get() + 1);
        let mut out = io::stdout().lock();
        writeln!(out, "{}", self.help_text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_flags_read_as_empty() {
        let ctx = StaticContext::new("upload");
        assert!(!ctx.is_flag_set("threads"));
        assert_eq!(ctx.string_flag_value("threads"), "");
        assert!(!ctx.bool_flag_value("quiet"));
        assert!(ctx.arguments().is_empty());
    }

    #[test]
    fn set_flags_are_visible() {
        let ctx = StaticContext::new("upload")
            .with_string("threads", "8")
            .with_bool("quiet", false)
            .with_arguments(["a", "b"]);
        assert!(ctx.is_flag_set("threads"));
        assert!(ctx.is_flag_set("quiet"));
        assert_eq!(ctx.string_flag_value("threads"), "8");
        assert!(!ctx.bool_flag_value("quiet"));
        assert_eq!(ctx.arguments(), ["a", "b"]);
        assert_eq!(ctx.command_name(), "upload");
    }

    #[test]
    fn help_printing_is_counted() {
        let ctx = StaticContext::new("upload").with_help_text("usage: upload");
        ctx.print_command_help().unwrap();
        assert_eq!(ctx.help_printed(), 1);
        assert!(StaticContext::new("x")
            .with_failing_help()
            .print_command_help()
            .is_err());
    }
}
