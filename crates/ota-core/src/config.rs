use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::names::{GOOGLE_ANALYTICS_ID, PLIST_SERVICE_NAME};
use crate::template::Mapping;

fn default_service_name() -> String {
    PLIST_SERVICE_NAME.to_string()
}

/// Global configuration loaded from `~/.config/ota/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtaConfig {
    /// Marker segment of the PLIST service in request paths.
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// Base URL of the PLIST service. If missing, the HTML service derives it
    /// from its own request URL by swapping the last segment for `service_name`.
    #[serde(default)]
    pub plist_service_url: Option<String>,
    /// Base URL of the HTML service, used for build pages.
    #[serde(default)]
    pub html_service_url: Option<String>,
    /// Alternative landing page template: a builtin name or a file path.
    #[serde(default)]
    pub html_template_path: Option<String>,
    /// Analytics account rendered into the landing pages.
    #[serde(default)]
    pub google_analytics_id: Option<String>,
    /// Extra variables for the landing page template.
    #[serde(default)]
    pub template_params: BTreeMap<String, String>,
}

impl Default for OtaConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            plist_service_url: None,
            html_service_url: None,
            html_template_path: None,
            google_analytics_id: None,
            template_params: BTreeMap::new(),
        }
    }
}

impl OtaConfig {
    /// Extra landing page variables: `template_params` plus `googleAnalyticsId` if set.
    pub fn template_mapping(&self) -> Mapping {
        let mut mapping = self.template_params.clone();
        if let Some(id) = &self.google_analytics_id {
            mapping.insert(GOOGLE_ANALYTICS_ID.to_string(), id.clone());
        }
        mapping
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ota")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<OtaConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<OtaConfig> {
    if !path.exists() {
        let default_cfg = OtaConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: OtaConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
