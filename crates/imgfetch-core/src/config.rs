use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory (relative to the working directory) that receives fetched images.
pub const DEFAULT_OUTPUT_DIR: &str = "Fetched_Images";

/// Optional overrides loaded from `~/.config/imgfetch/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Where images are saved. Relative paths resolve against the working directory.
    pub output_dir: PathBuf,
    /// Total request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout_secs: 10,
        }
    }
}

impl FetcherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// A zero timeout would make curl wait forever.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be at least 1");
        }
        Ok(())
    }
}

/// Path of an existing config file, if any. Nothing is created.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgfetch")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from the XDG config dir, or defaults when no file exists.
pub fn load() -> Result<FetcherConfig> {
    match config_path()? {
        Some(path) => load_from(&path),
        None => Ok(FetcherConfig::default()),
    }
}

/// Like [`load`], but a broken config file only costs a warning.
pub fn load_or_default() -> FetcherConfig {
    or_default(load())
}

fn or_default(loaded: Result<FetcherConfig>) -> FetcherConfig {
    loaded.unwrap_or_else(|e| {
        tracing::warn!("ignoring config, using defaults: {:#}", e);
        FetcherConfig::default()
    })
}

pub fn load_from(path: &Path) -> Result<FetcherConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FetcherConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate().with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
