//! Optional `plugforge.toml` configuration
//!
//! Discovered in the invocation directory. Everything has a default; the
//! file only overrides defaults for CLI flags and the template-sets root.

use crate::error::{PlugforgeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file name
pub const CONFIG_FILE: &str = "plugforge.toml";

/// plugforge.toml schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub templates: TemplatesConfig,
}

/// Default values for CLI flags left unset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_instance_class")]
    pub instance_class: String,
    #[serde(default = "default_module_class")]
    pub module_class: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            instance_class: default_instance_class(),
            module_class: default_module_class(),
        }
    }
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_instance_class() -> String {
    "Instance".to_string()
}

fn default_module_class() -> String {
    "Module".to_string()
}

/// Template-set lookup configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TemplatesConfig {
    /// Root directory containing template sets (relative paths are resolved
    /// against the invocation directory)
    #[serde(default)]
    pub root: Option<PathBuf>,
}

impl Config {
    /// Read plugforge.toml from a path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| PlugforgeError::ConfigParse(e.to_string()))?;

        toml::from_str(&content).map_err(|e| PlugforgeError::ConfigInvalid(e.to_string()))
    }

    /// Load the config from `dir` if present, defaults otherwise.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}
