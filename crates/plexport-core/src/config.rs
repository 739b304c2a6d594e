use crate::descriptor::Columns;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/plexport/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlexportConfig {
    /// Directory under which playlist folders are created. When unset, the
    /// current working directory is used.
    #[serde(default)]
    pub output_root: Option<PathBuf>,
    /// Header naming the track display name column. Matched exactly.
    #[serde(default = "default_name_column")]
    pub name_column: String,
    /// Header naming the track location column. Matched exactly.
    #[serde(default = "default_location_column")]
    pub location_column: String,
}

fn default_name_column() -> String {
    "Name".to_string()
}

fn default_location_column() -> String {
    "Location".to_string()
}

impl Default for PlexportConfig {
    fn default() -> Self {
        Self {
            output_root: None,
            name_column: default_name_column(),
            location_column: default_location_column(),
        }
    }
}

impl PlexportConfig {
    /// The column lookup the parser should use.
    pub fn columns(&self) -> Columns {
        Columns {
            name: self.name_column.clone(),
            location: self.location_column.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("plexport")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PlexportConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PlexportConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PlexportConfig = toml::from_str(&data)?;
    Ok(cfg)
}
