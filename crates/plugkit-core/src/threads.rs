//! `--threads` parsing.

use thiserror::Error;

use crate::context::FlagContext;

pub const THREADS_FLAG: &str = "threads";
/// Worker threads used when `--threads` is not given.
pub const DEFAULT_THREADS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the '--threads' option should have a numeric positive value")]
pub struct ThreadsError {
    pub value: String,
}

/// Thread count from `--threads`, or [`DEFAULT_THREADS`].
pub fn get_thread_count(ctx: &dyn FlagContext) -> Result<usize, ThreadsError> {
    parse_threads(&ctx.string_flag_value(THREADS_FLAG), DEFAULT_THREADS)
}

/// Parse a thread count; empty input yields `default`.
pub fn parse_threads(raw: &str, default: usize) -> Result<usize, ThreadsError> {
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse::<i64>()
        .ok()
        .filter(|n| *n >= 1)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| ThreadsError {
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StaticContext;

    #[test]
    fn threads_default_when_unset() {
        assert_eq!(get_thread_count(&StaticContext::new("dl")).unwrap(), DEFAULT_THREADS);
    }

    #[test]
    fn threads_parsed_when_set() {
        let ctx = StaticContext::new("dl").with_string(THREADS_FLAG, "12");
        assert_eq!(get_thread_count(&ctx).unwrap(), 12);
        assert_eq!(parse_threads("+4", 1).unwrap(), 4);
    }

    #[test]
    fn threads_rejects_zero_negative_and_text() {
        for raw in ["0", "-2", "four", "1.5"] {
            let err = parse_threads(raw, DEFAULT_THREADS).unwrap_err();
            assert_eq!(err.value, raw);
            assert_eq!(
                err.to_string(),
                "the '--threads' option should have a numeric positive value"
            );
        }
    }
}
