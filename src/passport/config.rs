use crate::error::{PassportError, Result};
use crate::model::DEFAULT_CATEGORIES;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for the passport, stored in `config.json` next to the data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PassportConfig {
    /// Roast levels offered when adding a coffee
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Replace a stored but empty collection with the sample coffees on open
    #[serde(default)]
    pub reseed_when_empty: bool,
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

impl Default for PassportConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            reseed_when_empty: false,
        }
    }
}

impl PassportConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PassportError::Io)?;
        let config: PassportConfig =
            serde_json::from_str(&content).map_err(PassportError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PassportError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PassportError::Serialization)?;
        fs::write(config_path, content).map_err(PassportError::Io)?;
        Ok(())
    }

    pub fn is_known_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Parse a comma separated list, dropping blanks. An empty result restores
    /// the defaults.
    pub fn set_categories(&mut self, list: &str) {
        let parsed: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        self.categories = if parsed.is_empty() {
            default_categories()
        } else {
            parsed
        };
    }
}
