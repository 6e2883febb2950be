//! Download configuration assembled from command flags.

use std::num::IntErrorKind;

use serde::Serialize;

use crate::config::DownloadDefaults;
use crate::context::FlagContext;
use crate::error::{documentation_message, FlagError};
use crate::threads::{parse_threads, THREADS_FLAG};

pub const MIN_SPLIT_FLAG: &str = "min-split";
pub const SPLIT_COUNT_FLAG: &str = "split-count";
pub const SKIP_CHECKSUM_FLAG: &str = "skip-checksum";

/// Minimum file size (KB) before a download is split into ranges.
pub const DOWNLOAD_MIN_SPLIT_KB: i64 = 5120;
/// Number of parallel ranges per split download.
pub const DOWNLOAD_SPLIT_COUNT: i64 = 3;
pub const DOWNLOAD_MAX_SPLIT_COUNT: i64 = 15;

/// Settings handed to the transfer layer for one download command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadConfiguration {
    /// Minimum file size in KB for a split (ranged) download.
    pub min_split_size: i64,
    /// Number of ranges per split download, `0..=max`.
    pub split_count: i64,
    pub threads: usize,
    pub skip_checksum: bool,
    /// Symlinks are always preserved.
    pub symlink: bool,
}

/// Build the configuration with the built-in defaults.
pub fn build_download_configuration(
    ctx: &dyn FlagContext,
) -> Result<DownloadConfiguration, FlagError> {
    build_download_configuration_with(ctx, &DownloadDefaults::default())
}

/// Build the configuration, using `defaults` for flags that were not given.
///
/// Stops at the first invalid value among `--min-split`, `--split-count` and
/// `--threads`, in that order.
pub fn build_download_configuration_with(
    ctx: &dyn FlagContext,
    defaults: &DownloadDefaults,
) -> Result<DownloadConfiguration, FlagError> {
    let min_split_size = min_split(ctx, defaults.min_split_kb)?;
    let split_count = split_count(ctx, defaults.split_count, defaults.max_split_count)?;
    let threads = parse_threads(&ctx.string_flag_value(THREADS_FLAG), defaults.threads)?;

    let cfg = DownloadConfiguration {
        min_split_size,
        split_count,
        threads,
        skip_checksum: ctx.bool_flag_value(SKIP_CHECKSUM_FLAG),
        symlink: true,
    };
    tracing::debug!(command = ctx.command_name(), ?cfg, "built download configuration");
    Ok(cfg)
}

fn min_split(ctx: &dyn FlagContext, default: i64) -> Result<i64, FlagError> {
    let raw = ctx.string_flag_value(MIN_SPLIT_FLAG);
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse::<i64>().map_err(|_| {
        FlagError::Validation(format!(
            "The '--min-split' option should have a numeric value. {}",
            documentation_message()
        ))
    })
}

// Every check below runs; the last failing one decides the message.
fn split_count(ctx: &dyn FlagContext, default: i64, max: i64) -> Result<i64, FlagError> {
    let raw = ctx.string_flag_value(SPLIT_COUNT_FLAG);
    if raw.is_empty() {
        return Ok(default);
    }

    let mut failure = None;
    let value = match raw.parse::<i64>() {
        Ok(v) => v,
        Err(e) => {
            failure = Some(format!(
                "The '--split-count' option should have a numeric value. {}",
                documentation_message()
            ));
            // Out-of-range literals saturate so the range checks still apply.
            match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => 0,
            }
        }
    };
    if value > max {
        failure = Some(format!(
            "The '--split-count' option value is limited to a maximum of {}.",
            max
        ));
    }
    if value < 0 {
        failure = Some("the '--split-count' option cannot have a negative value".to_string());
    }

    match failure {
        Some(msg) => Err(FlagError::Validation(msg)),
        None => Ok(value),
    }
}
