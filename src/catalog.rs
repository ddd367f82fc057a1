//! The rendition catalog: which named image sizes exist and how they crop.
//!
//! A catalog is built once at startup from [`default_renditions`], passed
//! through a caller-supplied customization hook, then handed to the host via
//! [`RenditionCatalog::register_all`]. It is read-only afterwards.
//!
//! ## Default Table
//!
//! | Identifier | Label | Width | Height | Crop |
//! |---|---|---|---|---|
//! | `thumbnail` | Thumbnail | 150 | 150 | yes |
//! | `xx_small` | XX-Small | 225 | unbounded | no |
//! | `medium` | X-Small | 300 | unbounded | no |
//! | `medium_small` | Small | 450 | unbounded | no |
//! | `medium_medium` | Medium | 600 | unbounded | no |
//! | `medium_large` | Large | 900 | unbounded | no |
//! | `large` | X-Large | 1200 | unbounded | no |
//! | `xx_large` | XX-Large | 1920 | unbounded | no |
//! | `small_banner` | Small banner | 1920 | 300 | yes |
//! | `medium_banner` | Medium banner | 1920 | 600 | yes |
//! | `large_banner` | Large banner | 1920 | 1200 | yes |
//!
//! ## Built-in Sizes
//!
//! The host ships its own `thumbnail`, `medium`, `medium_large` and `large`
//! sizes and keeps their dimensions in settings storage. Registering one of
//! these identifiers also rewrites `{id}_size_w` / `{id}_size_h` (and
//! `thumbnail_size_crop`) so the host's settings agree with the catalog.

use crate::host::{OptionValue, RenditionRegistry, SettingsStore};
use crate::picker::NameMap;
use serde::{Deserialize, Serialize};

/// Sentinel for "no constraint on this axis".
pub const UNBOUNDED: u32 = 9999;

/// Host sizes whose dimensions also live in settings storage.
pub const BUILT_IN_SIZES: [&str; 4] = ["thumbnail", "medium", "medium_large", "large"];

/// One named rendition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenditionDefinition {
    /// Stable key used by the host for lookups and persistence.
    pub identifier: String,
    /// Picker label. Empty hides the rendition from the picker.
    #[serde(default)]
    pub name: String,
    pub width: u32,
    /// [`UNBOUNDED`] lets this axis float.
    #[serde(default = "unbounded")]
    pub height: u32,
    /// `true` = exact `width × height` via cover-crop; `false` = fit inside.
    #[serde(default)]
    pub crop: bool,
}

fn unbounded() -> u32 {
    UNBOUNDED
}

impl RenditionDefinition {
    pub fn new(identifier: &str, name: &str, width: u32, height: u32, crop: bool) -> Self {
        Self {
            identifier: identifier.to_string(),
            name: name.to_string(),
            width,
            height,
            crop,
        }
    }

    pub fn is_built_in(&self) -> bool {
        BUILT_IN_SIZES.contains(&self.identifier.as_str())
    }
}

/// The stock rendition table, in display order.
pub fn default_renditions() -> Vec<RenditionDefinition> {
    vec![
        RenditionDefinition::new("thumbnail", "Thumbnail", 150, 150, true),
        RenditionDefinition::new("xx_small", "XX-Small", 225, UNBOUNDED, false),
        RenditionDefinition::new("medium", "X-Small", 300, UNBOUNDED, false),
        RenditionDefinition::new("medium_small", "Small", 450, UNBOUNDED, false),
        RenditionDefinition::new("medium_medium", "Medium", 600, UNBOUNDED, false),
        RenditionDefinition::new("medium_large", "Large", 900, UNBOUNDED, false),
        RenditionDefinition::new("large", "X-Large", 1200, UNBOUNDED, false),
        RenditionDefinition::new("xx_large", "XX-Large", 1920, UNBOUNDED, false),
        RenditionDefinition::new("small_banner", "Small banner", 1920, 300, true),
        RenditionDefinition::new("medium_banner", "Medium banner", 1920, 600, true),
        RenditionDefinition::new("large_banner", "Large banner", 1920, 1200, true),
    ]
}

/// Active renditions plus their picker labels, both in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenditionCatalog {
    definitions: Vec<RenditionDefinition>,
    names: NameMap,
}

impl RenditionCatalog {
    /// Build the catalog from the stock table passed through `customize`.
    ///
    /// `customize` may add, remove, or replace entries; pass
    /// [`std::convert::identity`] to keep the defaults. An empty result is a
    /// valid, empty catalog.
    pub fn build<F>(customize: F) -> Self
    where
        F: FnOnce(Vec<RenditionDefinition>) -> Vec<RenditionDefinition>,
    {
        Self::from_definitions(customize(default_renditions()))
    }

    /// Build from an explicit list, skipping the stock table.
    pub fn from_definitions(definitions: Vec<RenditionDefinition>) -> Self {
        let mut names = NameMap::new();
        for def in &definitions {
            // A repeated identifier keeps its first position, last label wins.
            names.insert(def.identifier.clone(), def.name.clone());
        }
        tracing::info!(renditions = definitions.len(), "rendition catalog built");
        Self { definitions, names }
    }

    pub fn definitions(&self) -> &[RenditionDefinition] {
        &self.definitions
    }

    /// Identifier → label, in catalog order. Empty labels are included.
    pub fn names(&self) -> &NameMap {
        &self.names
    }

    /// Last definition registered under `identifier`.
    pub fn get(&self, identifier: &str) -> Option<&RenditionDefinition> {
        self.definitions
            .iter()
            .rev()
            .find(|d| d.identifier == identifier)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Register every definition with the host, in catalog order.
    ///
    /// Each built-in size is synced to settings storage right after its own
    /// registration, so a later duplicate identifier overwrites both.
    pub fn register_all(&self, registry: &dyn RenditionRegistry, settings: &dyn SettingsStore) {
        for def in &self.definitions {
            tracing::debug!(
                identifier = %def.identifier,
                width = def.width,
                height = def.height,
                crop = def.crop,
                "registering rendition"
            );
            registry.add_image_size(&def.identifier, def.width, def.height, def.crop);

            if def.is_built_in() {
                sync_built_in_settings(def, settings);
            }
        }
    }
}

fn sync_built_in_settings(def: &RenditionDefinition, settings: &dyn SettingsStore) {
    let id = &def.identifier;
    settings.update_option(&format!("{id}_size_w"), OptionValue::Int(def.width));
    settings.update_option(&format!("{id}_size_h"), OptionValue::Int(def.height));
    if id == "thumbnail" {
        settings.update_option(&format!("{id}_size_crop"), OptionValue::Bool(def.crop));
    }
    tracing::debug!(identifier = %id, "synced built-in size settings");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostOp, Recorder};
    use crate::test_helpers::{catalog_ids, find_definition};

    // =========================================================================
    // Default table
    // =========================================================================

    #[test]
    fn defaults_have_eleven_entries_in_order() {
        let ids: Vec<String> = default_renditions()
            .into_iter()
            .map(|d| d.identifier)
            .collect();
        assert_eq!(
            ids,
            vec![
                "thumbnail",
                "xx_small",
                "medium",
                "medium_small",
                "medium_medium",
                "medium_large",
                "large",
                "xx_large",
                "small_banner",
                "medium_banner",
                "large_banner",
            ]
        );
    }

    #[test]
    fn only_thumbnail_and_banners_crop() {
        let cropped: Vec<String> = default_renditions()
            .into_iter()
            .filter(|d| d.crop)
            .map(|d| d.identifier)
            .collect();
        assert_eq!(
            cropped,
            vec!["thumbnail", "small_banner", "medium_banner", "large_banner"]
        );
    }

    #[test]
    fn fit_renditions_have_unbounded_height() {
        for def in default_renditions().iter().filter(|d| !d.crop) {
            assert_eq!(def.height, UNBOUNDED, "{} should float", def.identifier);
        }
    }

    #[test]
    fn built_in_flags() {
        let catalog = RenditionCatalog::build(std::convert::identity);
        assert!(find_definition(&catalog, "thumbnail").is_built_in());
        assert!(find_definition(&catalog, "medium_large").is_built_in());
        assert!(!find_definition(&catalog, "medium_small").is_built_in());
        assert!(!find_definition(&catalog, "large_banner").is_built_in());
    }

    // =========================================================================
    // build
    // =========================================================================

    #[test]
    fn identity_hook_keeps_defaults_and_labels() {
        let catalog = RenditionCatalog::build(std::convert::identity);
        assert_eq!(catalog.len(), 11);
        assert_eq!(catalog.names().get("medium").map(String::as_str), Some("X-Small"));
        assert_eq!(
            catalog.names().keys().cloned().collect::<Vec<_>>(),
            catalog_ids(&catalog)
        );
    }

    #[test]
    fn empty_hook_yields_empty_catalog() {
        let catalog = RenditionCatalog::build(|_| Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.names().is_empty());
    }

    #[test]
    fn hook_can_append_and_drop() {
        let catalog = RenditionCatalog::build(|mut defs| {
            defs.retain(|d| !d.identifier.ends_with("_banner"));
            defs.push(RenditionDefinition::new("hero", "Hero", 2560, 1440, true));
            defs
        });
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog_ids(&catalog).last().map(String::as_str), Some("hero"));
        assert!(catalog.get("small_banner").is_none());
    }

    #[test]
    fn repeated_identifier_keeps_first_position_last_label() {
        let catalog = RenditionCatalog::from_definitions(vec![
            RenditionDefinition::new("a", "First", 10, 10, false),
            RenditionDefinition::new("b", "B", 20, 20, false),
            RenditionDefinition::new("a", "Second", 30, 30, true),
        ]);
        let names: Vec<(&str, &str)> = catalog
            .names()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(names, vec![("a", "Second"), ("b", "B")]);
        assert_eq!(catalog.get("a").map(|d| d.width), Some(30));
    }

    // =========================================================================
    // register_all
    // =========================================================================

    #[test]
    fn registers_every_definition_in_order() {
        let catalog = RenditionCatalog::build(std::convert::identity);
        let host = Recorder::new();
        catalog.register_all(&host, &host);
        assert_eq!(host.registered(), catalog_ids(&catalog));
    }

    #[test]
    fn syncs_built_in_settings() {
        let catalog = RenditionCatalog::build(std::convert::identity);
        let host = Recorder::new();
        catalog.register_all(&host, &host);

        assert_eq!(
            host.options(),
            vec![
                ("thumbnail_size_w".to_string(), OptionValue::Int(150)),
                ("thumbnail_size_h".to_string(), OptionValue::Int(150)),
                ("thumbnail_size_crop".to_string(), OptionValue::Bool(true)),
                ("medium_size_w".to_string(), OptionValue::Int(300)),
                ("medium_size_h".to_string(), OptionValue::Int(9999)),
                ("medium_large_size_w".to_string(), OptionValue::Int(900)),
                ("medium_large_size_h".to_string(), OptionValue::Int(9999)),
                ("large_size_w".to_string(), OptionValue::Int(1200)),
                ("large_size_h".to_string(), OptionValue::Int(9999)),
            ]
        );
    }

    #[test]
    fn settings_follow_their_own_registration() {
        let catalog = RenditionCatalog::build(std::convert::identity);
        let host = Recorder::new();
        catalog.register_all(&host, &host);

        let ops = host.operations();
        let medium = ops
            .iter()
            .position(|op| matches!(op, HostOp::AddImageSize { identifier, .. } if identifier == "medium"))
            .unwrap();
        assert!(matches!(
            &ops[medium + 1],
            HostOp::UpdateOption { key, .. } if key == "medium_size_w"
        ));
        assert!(matches!(
            &ops[medium + 3],
            HostOp::AddImageSize { identifier, .. } if identifier == "medium_small"
        ));
    }

    #[test]
    fn duplicate_built_in_last_write_wins() {
        let catalog = RenditionCatalog::build(|mut defs| {
            defs.push(RenditionDefinition::new("thumbnail", "Square", 200, 200, false));
            defs
        });
        let host = Recorder::new();
        catalog.register_all(&host, &host);

        let last_crop = host
            .options()
            .into_iter()
            .rev()
            .find(|(k, _)| k == "thumbnail_size_crop")
            .map(|(_, v)| v);
        assert_eq!(last_crop, Some(OptionValue::Bool(false)));
    }

    #[test]
    fn empty_catalog_touches_nothing() {
        let catalog = RenditionCatalog::build(|_| Vec::new());
        let host = Recorder::new();
        catalog.register_all(&host, &host);
        assert!(host.operations().is_empty());
    }

    #[test]
    fn definition_deserializes_with_defaults() {
        let def: RenditionDefinition = toml::from_str(
            r#"
identifier = "wide"
width = 2400
"#,
        )
        .unwrap();
        assert_eq!(def, RenditionDefinition::new("wide", "", 2400, UNBOUNDED, false));
    }
}
