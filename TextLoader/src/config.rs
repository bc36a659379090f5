//! Loader configuration (`textloader.toml`)
//!
//! Every field is optional; an absent file means the stock layout of
//! `plugins/**/*.tr` with tab separated cells.
//!
//! ```toml
//! plugin_root = "plugins"
//! extension = "tr"
//! separator = "\t"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::formats::table::Separator;

/// Name of the configuration file looked up in the host's working directory
pub const CONFIG_FILE_NAME: &str = "textloader.toml";

fn default_plugin_root() -> PathBuf {
    PathBuf::from("plugins")
}

fn default_extension() -> String {
    "tr".to_string()
}

fn default_separator() -> String {
    "\t".to_string()
}

/// Where translation files live and how they are split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Directory scanned recursively for translation files
    #[serde(default = "default_plugin_root")]
    pub plugin_root: PathBuf,
    /// File extension without the dot, matched case-insensitively
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Cell separator, a single ASCII character
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            plugin_root: default_plugin_root(),
            extension: default_extension(),
            separator: default_separator(),
        }
    }
}

impl LoaderConfig {
    /// Parse a configuration file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or [`Error::Config`]
    /// if it is not valid TOML or names an unusable separator.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.separator().map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(config)
    }

    /// Parse a configuration file, falling back to defaults when it is
    /// missing or invalid
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// The configured separator
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSeparator`] if the field is not a single
    /// usable ASCII character.
    pub fn separator(&self) -> Result<Separator> {
        Separator::try_from(self.separator.as_str())
    }

    /// The configured extension without a leading dot
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}
