use std::path::Path;

use serde::{Deserialize, Serialize};

/// Name of the optional configuration file in the records directory.
pub const CONFIG_FILE: &str = "uni.toml";

/// Settings that control how a store is opened.
///
/// The file names of the document and its backup are fixed and cannot be
/// changed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Whether a store that cannot load its document starts from the example
    /// seed document.
    ///
    /// When `false`, the store starts from an empty document instead.
    pub seed_when_missing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_when_missing: default_seed_when_missing(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Loads `uni.toml` from `root`, falling back to the defaults.
    #[must_use]
    pub fn load_or_default(root: &Path) -> Self {
        Self::load(&root.join(CONFIG_FILE)).unwrap_or_else(|e| {
            tracing::debug!("Failed to load config: {e}");
            Self::default()
        })
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }
}

const fn default_seed_when_missing() -> bool {
    true
}

/// The serialized versions of the configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_seed_when_missing")]
        seed_when_missing: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 { seed_when_missing } => Self { seed_when_missing },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            seed_when_missing: config.seed_when_missing,
        }
    }
}
