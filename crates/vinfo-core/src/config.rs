use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default video-info endpoint. The request URL is always
/// `<endpoint>?video_id=<id>`; only the endpoint itself is configurable.
pub const DEFAULT_ENDPOINT: &str = "https://www.youtube.com/get_video_info";

/// Global configuration loaded from `~/.config/vinfo/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VinfoConfig {
    /// Base URL of the video-info resource (e.g. a mirror or a test server).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for VinfoConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vinfo")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VinfoConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = VinfoConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: VinfoConfig = toml::from_str(&data)?;
    Ok(cfg)
}
