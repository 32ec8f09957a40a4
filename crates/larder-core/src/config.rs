//! Shopping list configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty file (or no
//! file at all) is a valid configuration:
//!
//! ```toml
//! title = "Groceries"
//! language = "es"
//! default_format = "whatsapp"
//! on_hand = ["salt", "olive oil"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::export::ExportFormat;
use crate::types::DEFAULT_LANGUAGE;

/// Settings for generating and exporting shopping lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingConfig {
    /// Title printed at the top of exports.
    #[serde(default = "default_title")]
    pub title: String,

    /// Language for recipe names in "used in" labels.
    #[serde(default = "default_language")]
    pub language: String,

    /// Export format used when none is requested.
    #[serde(default)]
    pub default_format: ExportFormat,

    /// Ingredient ids already in the pantry; left off generated lists.
    #[serde(default)]
    pub on_hand: Vec<String>,
}

fn default_title() -> String {
    "Shopping List".to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            language: default_language(),
            default_format: ExportFormat::default(),
            on_hand: Vec::new(),
        }
    }
}

impl ShoppingConfig {
    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loaded shopping config");
        Self::from_toml_str(&content)
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(Error::config("language must not be empty"));
        }
        Ok(())
    }
}
