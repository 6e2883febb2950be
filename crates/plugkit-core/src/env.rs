//! Environment variable lookup.
//!
//! Reads go through [`EnvLookup`] so callers (and tests) can substitute a fixed
//! set of variables instead of touching the process environment.

use std::collections::HashMap;

/// Set to a true value when running under automation; suppresses prompts.
pub const CI_ENV: &str = "CI";
/// Fallback for the `--project` flag.
pub const PROJECT_ENV: &str = "JFROG_CLI_BUILD_PROJECT";

/// Read-only named variable lookup.
pub trait EnvLookup {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed set of variables.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvLookup for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Parse the boolean spellings accepted on the command line and in the
/// environment: `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Boolean value of `key`, `default` when unset, `None` when it does not parse.
pub fn bool_var(env: &dyn EnvLookup, key: &str, default: bool) -> Option<bool> {
    match env.var(key) {
        None => Some(default),
        Some(raw) => parse_bool(&raw),
    }
}

/// Whether the CI variable is set to a true value. Unparsable values count as false.
pub fn ci_enabled(env: &dyn EnvLookup) -> bool {
    match bool_var(env, CI_ENV, false) {
        Some(ci) => ci,
        None => {
            tracing::debug!("ignoring non-boolean {} value", CI_ENV);
            false
        }
    }
}

/// `arg` when non-empty, else the value of `key`, else empty.
pub fn or_env(arg: String, env: &dyn EnvLookup, key: &str) -> String {
    if !arg.is_empty() {
        return arg;
    }
    env.var(key).unwrap_or_default()
}
