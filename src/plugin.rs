//! Startup wiring between the catalog and the host.
//!
//! [`Plugin::start`] runs once: it builds the catalog through the
//! customization hook and registers it. The returned value carries the three
//! per-request hooks the host calls afterwards.

use crate::admin;
use crate::catalog::{RenditionCatalog, RenditionDefinition};
use crate::config::{AdminConfig, FormatsConfig};
use crate::host::{RenditionRegistry, SettingsStore};
use crate::imaging::{CropPlan, CropRequest, resolve_crop};
use crate::picker::{NameMap, merge_picker_names};
use std::borrow::Cow;

/// A started plugin: read-only catalog plus host hooks.
#[derive(Debug, Clone)]
pub struct Plugin {
    catalog: RenditionCatalog,
    admin: AdminConfig,
}

impl Plugin {
    /// Build the catalog through `customize` and register it with the host.
    pub fn start<F>(
        customize: F,
        registry: &dyn RenditionRegistry,
        settings: &dyn SettingsStore,
        admin: AdminConfig,
    ) -> Self
    where
        F: FnOnce(Vec<RenditionDefinition>) -> Vec<RenditionDefinition>,
    {
        let catalog = RenditionCatalog::build(customize);
        catalog.register_all(registry, settings);
        Self { catalog, admin }
    }

    /// [`start`](Self::start) with the customizations from a config file.
    pub fn from_config(
        config: &FormatsConfig,
        registry: &dyn RenditionRegistry,
        settings: &dyn SettingsStore,
    ) -> Self {
        Self::start(
            |defaults| config.catalog.customize(defaults),
            registry,
            settings,
            config.admin.clone(),
        )
    }

    pub fn catalog(&self) -> &RenditionCatalog {
        &self.catalog
    }

    /// Resize hook: cover-crop geometry, or defer to the host.
    pub fn resize_override(&self, request: &CropRequest) -> CropPlan {
        resolve_crop(request)
    }

    /// Picker hook: the names the editor's size picker should list.
    pub fn picker_names(&self, platform: &NameMap) -> NameMap {
        merge_picker_names(platform, self.catalog.names())
    }

    /// Admin output hook: drop the host's image-sizes panel.
    pub fn filter_admin_page<'a>(&self, screen: Option<&str>, html: &'a str) -> Cow<'a, str> {
        admin::filter_admin_page(
            screen,
            &self.admin.screen,
            &self.admin.section_heading,
            html,
        )
    }
}
