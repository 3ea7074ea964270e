use crate::transport::{default_user_agent, TransportOptions};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Global configuration loaded from `~/.config/cinfo/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CinfoConfig {
    /// Connect timeout in seconds (None = libcurl default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-transfer timeout in seconds (None = no limit).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Follow HTTP redirects to the final resource.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
    /// Redirect hop limit when following.
    #[serde(default = "default_max_redirections")]
    pub max_redirections: u32,
    /// User-Agent sent on verb-based transports.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_follow_redirects() -> bool {
    true
}

fn default_max_redirections() -> u32 {
    10
}

impl Default for CinfoConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: None,
            timeout_secs: None,
            follow_redirects: default_follow_redirects(),
            max_redirections: default_max_redirections(),
            user_agent: default_user_agent(),
        }
    }
}

impl CinfoConfig {
    pub fn transport_options(&self) -> TransportOptions {
        TransportOptions {
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
            follow_redirects: self.follow_redirects,
            max_redirections: self.max_redirections,
            user_agent: self.user_agent.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cinfo")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CinfoConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CinfoConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CinfoConfig = toml::from_str(&data)?;
    Ok(cfg)
}
