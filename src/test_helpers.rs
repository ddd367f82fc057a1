//! Shared test utilities for the image-formats test suite.
//!
//! Builders for requests and name maps, plus lookups that panic with a
//! clear message on miss.

use crate::catalog::{RenditionCatalog, RenditionDefinition};
use crate::imaging::{CropPlan, CropRect, CropRequest, Dimensions};
use crate::picker::NameMap;

// =========================================================================
// Builders
// =========================================================================

/// Request from `(width, height)` tuples.
pub fn crop_request(source: (u32, u32), dest: (u32, u32), crop: bool) -> CropRequest {
    CropRequest::new(
        Dimensions::new(source.0, source.1),
        Dimensions::new(dest.0, dest.1),
        crop,
    )
}

/// Name map from `(identifier, label)` pairs, order preserved.
pub fn name_map(entries: &[(&str, &str)]) -> NameMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =========================================================================
// Extractors
// =========================================================================

/// Name map as borrowed pairs, for order-sensitive comparisons.
pub fn pairs(names: &NameMap) -> Vec<(&str, &str)> {
    names
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

/// Catalog identifiers in catalog order.
pub fn catalog_ids(catalog: &RenditionCatalog) -> Vec<String> {
    catalog
        .definitions()
        .iter()
        .map(|d| d.identifier.clone())
        .collect()
}

/// Unwrap a crop plan. Panics on `NoOverride`.
pub fn expect_crop(plan: CropPlan) -> CropRect {
    match plan {
        CropPlan::Crop(rect) => rect,
        CropPlan::NoOverride => panic!("expected a crop plan, got NoOverride"),
    }
}

// =========================================================================
// Lookups
// =========================================================================

/// Find a definition by identifier. Panics if not found.
pub fn find_definition<'a>(catalog: &'a RenditionCatalog, identifier: &str) -> &'a RenditionDefinition {
    catalog.get(identifier).unwrap_or_else(|| {
        panic!(
            "rendition '{identifier}' not found. Available: {:?}",
            catalog_ids(catalog)
        )
    })
}
