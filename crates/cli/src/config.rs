use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs::read_to_string;
use tracing::debug;

use crate::options::FormatOptions;

pub const CONFIG_DIR: &str = ".bsl-common";
pub const CONFIG_FILE: &str = "config.json";

/// Loaded from `.bsl-common/config.json`, controls the language and the format of the output.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Language of single-language output, `ru` or `en` (default: "ru")
    #[serde(default = "default_script_variant")]
    pub script_variant: String,

    /// Output format used when `--format` is not given
    #[serde(default)]
    pub format: FormatOptions,
}

fn default_script_variant() -> String {
    "ru".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            script_variant: default_script_variant(),
            format: FormatOptions::default(),
        }
    }
}

/// Reads the configuration of `current_dir`; a missing file gives the defaults.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub async fn get_config(current_dir: &Path) -> Result<Config> {
    let config_file = current_dir.join(CONFIG_DIR).join(CONFIG_FILE);
    if !config_file.exists() {
        debug!(path = %config_file.display(), "config file not found, using defaults");
        return Ok(Config::default());
    }
    let content = read_to_string(&config_file)
        .await
        .with_context(|| format!("Failed to read {}", config_file.display()))?;
    let config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_file.display()))?;
    Ok(config)
}
