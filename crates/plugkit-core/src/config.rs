use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::download::{DOWNLOAD_MAX_SPLIT_COUNT, DOWNLOAD_MIN_SPLIT_KB, DOWNLOAD_SPLIT_COUNT};
use crate::threads::DEFAULT_THREADS;

/// Fallback values for download flags (`[download]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadDefaults {
    /// Minimum file size in KB before splitting, used when `--min-split` is empty.
    pub min_split_kb: i64,
    /// Ranges per split download, used when `--split-count` is empty.
    pub split_count: i64,
    /// Upper bound accepted for `--split-count`.
    pub max_split_count: i64,
    /// Worker threads, used when `--threads` is empty.
    pub threads: usize,
}

impl Default for DownloadDefaults {
    fn default() -> Self {
        Self {
            min_split_kb: DOWNLOAD_MIN_SPLIT_KB,
            split_count: DOWNLOAD_SPLIT_COUNT,
            max_split_count: DOWNLOAD_MAX_SPLIT_COUNT,
            threads: DEFAULT_THREADS,
        }
    }
}

impl DownloadDefaults {
    /// Check the same bounds the flags are held to.
    pub fn validate(&self) -> Result<()> {
        if self.threads < 1 {
            bail!("download.threads must be at least 1, got {}", self.threads);
        }
        if self.max_split_count < 0 {
            bail!(
                "download.max_split_count cannot be negative, got {}",
                self.max_split_count
            );
        }
        if self.split_count < 0 || self.split_count > self.max_split_count {
            bail!(
                "download.split_count must be between 0 and max_split_count ({}), got {}",
                self.max_split_count,
                self.split_count
            );
        }
        Ok(())
    }
}

/// Global configuration loaded from `~/.config/plugkit/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlugkitConfig {
    #[serde(default)]
    pub download: DownloadDefaults,
    /// Tracing filter used when `PLUGKIT_LOG` is not set.
    #[serde(default)]
    pub log_filter: Option<String>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("plugkit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG config dir, writing the defaults if absent.
pub fn load_or_init() -> Result<PlugkitConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<PlugkitConfig> {
    if !path.exists() {
        let cfg = PlugkitConfig::default();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(&cfg)?)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(cfg);
    }
    load_from(path)
}

pub fn load_from(path: &Path) -> Result<PlugkitConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: PlugkitConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    cfg.download
        .validate()
        .with_context(|| format!("invalid [download] section in {}", path.display()))?;
    Ok(cfg)
}
