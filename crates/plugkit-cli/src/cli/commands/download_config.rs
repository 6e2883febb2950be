//! download-config: print what a download command would run with.

use std::io::Write;

use anyhow::Result;
use plugkit_core::config::DownloadDefaults;
use plugkit_core::flags::{
    get_string_array_flag, override_array_if_set, override_int_if_set, override_string_if_set,
};
use plugkit_core::{build_download_configuration_with, FlagContext};

use crate::cli::registry::{EXCLUSIONS_FLAG, LIMIT_FLAG, PROPS_FLAG, TARGET_FLAG};

/// Build the download configuration and print it with the other download flags as JSON.
pub fn run_download_config(
    ctx: &dyn FlagContext,
    defaults: &DownloadDefaults,
    out: &mut dyn Write,
) -> Result<()> {
    let download = build_download_configuration_with(ctx, defaults)?;

    let mut target = ".".to_string();
    override_string_if_set(&mut target, ctx, TARGET_FLAG);
    let mut exclusions = Vec::new();
    override_array_if_set(&mut exclusions, ctx, EXCLUSIONS_FLAG);
    // 0 means no limit.
    let mut limit = 0;
    override_int_if_set(&mut limit, ctx, LIMIT_FLAG);

    let report = serde_json::json!({
        "target": target,
        "exclusions": exclusions,
        "props": get_string_array_flag(ctx, PROPS_FLAG),
        "limit": limit,
        "download": download,
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(())
}
