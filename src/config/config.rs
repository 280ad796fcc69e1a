use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants::CONFIG_FILE;
use crate::error::{ErrorContext, ReportError, ReportResult};
use crate::report_error;

/// Contents of `~/.clubhouse-report-config.json`. Every field is optional;
/// defaults live in `ReportContextBuilder`.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spreadsheet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheets_access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheets_api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<usize>,
    #[serde(default)]
    pub headcounts: HashMap<String, u32>,
}

pub fn config_path() -> ReportResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ReportError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

pub fn load_config() -> ReportResult<Config> {
    load_config_from(&config_path()?)
}

/// A missing file yields the default config; an unreadable or invalid one is
/// an error rather than being silently replaced.
pub fn load_config_from(path: &Path) -> ReportResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
    serde_json::from_str(&config_str).map_err(|e| report_error!(ConfigError, "{}: {}", path.display(), e))
}

pub fn save_config(config: &Config) -> ReportResult<()> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &Config, path: &Path) -> ReportResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str).with_context(|| format!("Writing {}", path.display()))?;

    Ok(())
}
