//! Configuration module.
//!
//! Handles loading and validating `image-formats.toml`. Every key is
//! optional: a missing file, or a file with only a few keys, falls back to
//! the stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! [catalog]
//! replace = false     # true: `renditions` replaces the stock table entirely
//! remove = []         # stock identifiers to drop
//!
//! [[catalog.renditions]]
//! identifier = "hero" # same identifier as a stock entry replaces it in place
//! name = "Hero"       # empty = registered but hidden from the picker
//! width = 2560
//! height = 1440       # omit for unbounded
//! crop = true         # omit for fit-inside
//!
//! [admin]
//! screen = "options-media"
//! section_heading = "Image sizes"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::admin::{IMAGE_SIZES_HEADING, MEDIA_SETTINGS_SCREEN};
use crate::catalog::RenditionDefinition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Config file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "image-formats.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatsConfig {
    /// Customizations applied to the stock rendition table.
    pub catalog: CatalogConfig,
    /// Media settings page rewrite.
    pub admin: AdminConfig,
}

impl FormatsConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, def) in self.catalog.renditions.iter().enumerate() {
            if def.identifier.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "catalog.renditions[{i}].identifier must not be empty"
                )));
            }
            if def.width == 0 || def.height == 0 {
                return Err(ConfigError::Validation(format!(
                    "catalog.renditions[{i}] ({}) width and height must be non-zero",
                    def.identifier
                )));
            }
        }
        if self.admin.screen.is_empty() {
            return Err(ConfigError::Validation(
                "admin.screen must not be empty".into(),
            ));
        }
        if self.admin.section_heading.is_empty() {
            return Err(ConfigError::Validation(
                "admin.section_heading must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Customizations applied to the stock rendition table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Ignore the stock table; use `renditions` alone.
    pub replace: bool,
    /// Stock identifiers to drop.
    pub remove: Vec<String>,
    /// Extra or replacement renditions.
    pub renditions: Vec<RenditionDefinition>,
}

impl CatalogConfig {
    /// Apply this config to the stock table.
    ///
    /// This is the customization hook handed to
    /// [`RenditionCatalog::build`](crate::catalog::RenditionCatalog::build).
    pub fn customize(&self, defaults: Vec<RenditionDefinition>) -> Vec<RenditionDefinition> {
        if self.replace {
            return self.renditions.clone();
        }

        let mut defs: Vec<RenditionDefinition> = defaults
            .into_iter()
            .filter(|d| !self.remove.contains(&d.identifier))
            .collect();

        for custom in &self.renditions {
            match defs.iter_mut().find(|d| d.identifier == custom.identifier) {
                Some(existing) => *existing = custom.clone(),
                None => defs.push(custom.clone()),
            }
        }
        defs
    }
}

/// Media settings page rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdminConfig {
    /// Host screen id of the media settings page.
    pub screen: String,
    /// Heading text of the panel to remove, as rendered (i.e. localized).
    pub section_heading: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            screen: MEDIA_SETTINGS_SCREEN.to_string(),
            section_heading: IMAGE_SIZES_HEADING.to_string(),
        }
    }
}

/// Parse and validate config from a TOML string.
pub fn parse_config(content: &str) -> Result<FormatsConfig, ConfigError> {
    let config: FormatsConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`.
///
/// Returns the defaults if the file does not exist.
/// Returns `Err` if the file exists but is invalid.
pub fn load_config(path: &Path) -> Result<FormatsConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(FormatsConfig::default());
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Returns a fully-commented stock config file.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Image Formats Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Rendition catalog
# ---------------------------------------------------------------------------
# Stock renditions (identifier, label, width x height, crop):
#   thumbnail      Thumbnail       150 x 150    crop
#   xx_small       XX-Small        225 x 9999
#   medium         X-Small         300 x 9999
#   medium_small   Small           450 x 9999
#   medium_medium  Medium          600 x 9999
#   medium_large   Large           900 x 9999
#   large          X-Large        1200 x 9999
#   xx_large       XX-Large       1920 x 9999
#   small_banner   Small banner   1920 x 300    crop
#   medium_banner  Medium banner  1920 x 600    crop
#   large_banner   Large banner   1920 x 1200   crop
#
# A height (or width) of 9999 means unbounded: the other axis decides.
[catalog]
# Ignore the stock table and register only the renditions listed below.
replace = false

# Stock identifiers to drop, e.g. ["xx_small", "xx_large"].
remove = []

# Extra renditions. An identifier matching a stock entry replaces it in place;
# anything else is appended. An empty name registers the size but hides it
# from the editor's size picker.
#
# [[catalog.renditions]]
# identifier = "hero"
# name = "Hero"
# width = 2560
# height = 1440
# crop = true

# ---------------------------------------------------------------------------
# Media settings page
# ---------------------------------------------------------------------------
[admin]
# Screen id of the media settings page.
screen = "options-media"

# Heading of the panel removed from that page, as rendered in the admin
# language.
section_heading = "Image sizes"
"##
}
