//! # Image Formats
//!
//! A fixed catalog of named image renditions for a content-management
//! platform's media pipeline, plus the cover-crop geometry that makes cropped
//! renditions fill their box instead of letterboxing inside it.
//!
//! # Architecture: Startup, Then Hooks
//!
//! ```text
//! startup   defaults → customize → RenditionCatalog → register_all → host
//! resize    CropRequest → resolve_crop → CropPlan → host resampler
//! picker    host names + catalog names → merge_picker_names → picker UI
//! admin     rendered media settings HTML → strip_section → browser
//! ```
//!
//! The catalog is built once and never mutated. Every per-request hook is a
//! pure function. The host's registration API and settings storage are
//! injected as traits ([`host::RenditionRegistry`], [`host::SettingsStore`]),
//! so the whole crate is testable against an in-process [`host::Recorder`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Rendition definitions, stock table, registration with the host |
//! | [`imaging`] | Cover-crop geometry: [`imaging::resolve_crop`] |
//! | [`picker`] | Names shown in the editor's size picker |
//! | [`admin`] | Removes the host's image-sizes panel from the media settings page |
//! | [`host`] | Collaborator traits and the recording host |
//! | [`plugin`] | Startup wiring and the per-request hooks |
//! | [`config`] | `image-formats.toml` loading and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Cover, Not Contain
//!
//! The host's own resize math behaves like CSS `object-fit: contain`: a
//! cropped rendition can come out smaller than its box. [`imaging::resolve_crop`]
//! instead scales by the larger of the two axis ratios and crops the centered
//! overflow, like `object-fit: cover`, so a 1920×300 banner is always
//! 1920×300. Non-crop renditions are left to the host.
//!
//! ## Unbounded Axes
//!
//! Fit-inside renditions use [`catalog::UNBOUNDED`] (9999) as height, so the
//! width alone decides the scale. The host already understands this value;
//! the crate passes it through unchanged.
//!
//! ## Explicit Hooks
//!
//! Customization is a plain `FnOnce(Vec<RenditionDefinition>) ->
//! Vec<RenditionDefinition>` handed to [`catalog::RenditionCatalog::build`],
//! and the host calls methods on [`plugin::Plugin`]. No global registry.

pub mod admin;
pub mod catalog;
pub mod config;
pub mod host;
pub mod imaging;
pub mod output;
pub mod picker;
pub mod plugin;

#[cfg(test)]
pub(crate) mod test_helpers;
