//! Flag descriptors and per-command flag lookup.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::env::parse_bool;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagKind {
    String {
        default: Option<String>,
        mandatory: bool,
    },
    Bool {
        default: bool,
    },
}

/// A named flag a command accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDescriptor {
    pub name: String,
    pub description: String,
    pub kind: FlagKind,
}

impl FlagDescriptor {
    pub fn string(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind: FlagKind::String {
                default: None,
                mandatory: false,
            },
        }
    }

    pub fn bool(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind: FlagKind::Bool { default: false },
        }
    }

    /// Default shown in help and used when the flag is absent.
    pub fn with_default(mut self, value: &str) -> Self {
        match &mut self.kind {
            FlagKind::String { default, .. } => *default = Some(value.to_string()),
            FlagKind::Bool { default } => *default = parse_bool(value).unwrap_or(false),
        }
        self
    }

    pub fn mandatory(mut self) -> Self {
        if let FlagKind::String { mandatory, .. } = &mut self.kind {
            *mandatory = true;
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_bool(&self) -> bool {
        matches!(self.kind, FlagKind::Bool { .. })
    }
}

/// Descriptors for the flags registered under `cmd_key`, sorted by name.
///
/// An unknown command is logged and yields an empty list. Names without a
/// descriptor are skipped.
pub fn get_command_flags<K, N, F>(
    cmd_key: &str,
    command_to_flags: &HashMap<K, Vec<N>>,
    flags_by_name: &HashMap<F, FlagDescriptor>,
) -> Vec<FlagDescriptor>
where
    K: Borrow<str> + Hash + Eq,
    N: AsRef<str>,
    F: Borrow<str> + Hash + Eq,
{
    let Some(names) = command_to_flags.get(cmd_key) else {
        tracing::error!("The command \"{}\" is not found in commands flags map.", cmd_key);
        return Vec::new();
    };

    let mut flags: Vec<FlagDescriptor> = names
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            let found = flags_by_name.get(name).cloned();
            if found.is_none() {
                tracing::warn!(command = cmd_key, flag = name, "flag has no descriptor");
            }
            found
        })
        .collect();
    flags.sort_by(|a, b| a.name.cmp(&b.name));
    flags
}
