use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Broker-facing settings for firmware update messages (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MqttConfig {
    /// Topic firmware update requests are published to.
    pub publish_topic_firmware: String,
    /// QoS level used when publishing (0, 1 or 2).
    pub default_qos: u8,
}

impl Default for MqttConfig {
    fn default() -> Self {
        Self {
            publish_topic_firmware: "lokasync/node/firmware/update".to_string(),
            default_qos: 1,
        }
    }
}

/// Global configuration loaded from `~/.config/lokasync/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LokaSyncConfig {
    /// Rewrite Google Drive share links to direct-download links before building a payload.
    pub normalize_drive_urls: bool,
    /// Reject malformed node codenames, URLs and versions instead of sending them as-is.
    pub strict_validation: bool,
    #[serde(default)]
    pub mqtt: MqttConfig,
}

impl Default for LokaSyncConfig {
    fn default() -> Self {
        Self {
            normalize_drive_urls: true,
            strict_validation: false,
            mqtt: MqttConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("lokasync")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LokaSyncConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LokaSyncConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<LokaSyncConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: LokaSyncConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
