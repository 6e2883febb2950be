//! Typed reads of individual flags.
//!
//! The `override_*_if_set` helpers only write to the target when the flag was
//! explicitly supplied, so caller defaults survive otherwise.

use crate::context::FlagContext;
use crate::env::{self, EnvLookup};

/// Separator for list-valued flags (`--exclusions "a;b;c"`).
pub const ARRAY_SEPARATOR: char = ';';

pub const QUIET_FLAG: &str = "quiet";
pub const PROJECT_FLAG: &str = "project";

/// Values of a `;`-separated flag; empty when the flag is not set.
pub fn get_string_array_flag(ctx: &dyn FlagContext, name: &str) -> Vec<String> {
    if !ctx.is_flag_set(name) {
        return Vec::new();
    }
    split_array(&ctx.string_flag_value(name))
}

pub fn override_array_if_set(target: &mut Vec<String>, ctx: &dyn FlagContext, name: &str) {
    if ctx.is_flag_set(name) {
        *target = split_array(&ctx.string_flag_value(name));
    }
}

/// Overwrite `target` with the integer value of `name` if set.
///
/// Accepts `0x`, `0o`, `0b` and leading-zero octal literals. A value that
/// does not parse leaves `target` unchanged.
pub fn override_int_if_set(target: &mut i64, ctx: &dyn FlagContext, name: &str) {
    if !ctx.is_flag_set(name) {
        return;
    }
    let raw = ctx.string_flag_value(name);
    match parse_int_auto(&raw) {
        Some(value) => *target = value,
        None => tracing::debug!(flag = name, value = %raw, "ignoring non-integer flag value"),
    }
}

pub fn override_string_if_set(target: &mut String, ctx: &dyn FlagContext, name: &str) {
    if ctx.is_flag_set(name) {
        *target = ctx.string_flag_value(name);
    }
}

/// Whether to skip confirmation prompts.
///
/// An explicit `--quiet` wins; otherwise a true `CI` variable implies quiet.
pub fn get_quiet_value(ctx: &dyn FlagContext, env: &dyn EnvLookup) -> bool {
    if ctx.is_flag_set(QUIET_FLAG) {
        return ctx.bool_flag_value(QUIET_FLAG);
    }
    env::ci_enabled(env)
}

/// Project key from `--project`, falling back to the project variable.
pub fn get_project_key(ctx: &dyn FlagContext, env: &dyn EnvLookup) -> String {
    env::or_env(ctx.string_flag_value(PROJECT_FLAG), env, env::PROJECT_ENV)
}

/// Owned copy of the positional arguments.
pub fn extract_positional_arguments(ctx: &dyn FlagContext) -> Vec<String> {
    ctx.arguments().to_vec()
}

fn split_array(raw: &str) -> Vec<String> {
    raw.split(ARRAY_SEPARATOR).map(str::to_string).collect()
}

/// Parse a signed integer literal, detecting the base from its prefix.
///
/// `0x`/`0o`/`0b` select hex/octal/binary, a bare leading `0` selects octal,
/// anything else is decimal. `_` may separate digits.
pub fn parse_int_auto(raw: &str) -> Option<i64> {
    let (negative, body) = match raw.as_bytes().first()? {
        b'+' => (false, &raw[1..]),
        b'-' => (true, &raw[1..]),
        _ => (false, raw),
    };
    if body.is_empty() {
        return None;
    }

    let lower = body.to_ascii_lowercase();
    let (radix, digits) = if lower.starts_with('0') {
        match lower.as_bytes().get(1) {
            Some(b'x') if lower.len() >= 3 => (16, &lower[2..]),
            Some(b'o') if lower.len() >= 3 => (8, &lower[2..]),
            Some(b'b') if lower.len() >= 3 => (2, &lower[2..]),
            _ => (8, &lower[1..]),
        }
    } else {
        (10, lower.as_str())
    };

    if digits.contains('_') && !underscores_ok(&lower) {
        return None;
    }
    let digits: String = digits.chars().filter(|c| *c != '_').collect();
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let magnitude = if digits.is_empty() {
        0
    } else {
        u64::from_str_radix(&digits, radix).ok()?
    };

    if negative {
        const MIN_MAGNITUDE: u64 = 1 << 63;
        match magnitude {
            MIN_MAGNITUDE => Some(i64::MIN),
            m if m < MIN_MAGNITUDE => Some(-(m as i64)),
            _ => None,
        }
    } else {
        i64::try_from(magnitude).ok()
    }
}

/// `_` must sit between two digits; a base prefix counts as a digit.
fn underscores_ok(body: &str) -> bool {
    #[derive(PartialEq)]
    enum Seen {
        Start,
        Digit,
        Underscore,
        Other,
    }

    let bytes = body.as_bytes();
    let mut seen = Seen::Start;
    let mut i = 0;
    let mut hex = false;
    if bytes.len() >= 2 && bytes[0] == b'0' && matches!(bytes[1], b'b' | b'o' | b'x') {
        i = 2;
        seen = Seen::Digit;
        hex = bytes[1] == b'x';
    }
    for &c in &bytes[i..] {
        if c.is_ascii_digit() || (hex && (b'a'..=b'f').contains(&c)) {
            seen = Seen::Digit;
        } else if c == b'_' {
            if seen != Seen::Digit {
                return false;
            }
            seen = Seen::Underscore;
        } else {
            if seen == Seen::Underscore {
                return false;
            }
            seen = Seen::Other;
        }
    }
    seen != Seen::Underscore
}
