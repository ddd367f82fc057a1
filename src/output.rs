//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Catalog
//!
//! ```text
//! 001 Thumbnail (thumbnail)
//!     150x150 crop
//! 002 XX-Small (xx_small)
//!     225 wide, height unbounded
//! 003 (hidden_size)
//!     640x480 fit, hidden from picker
//! ```
//!
//! ## Register
//!
//! ```text
//! add_image_size thumbnail 150x150 crop
//!     thumbnail_size_w = 150
//!     thumbnail_size_h = 150
//!     thumbnail_size_crop = true
//! add_image_size xx_small 225x9999 fit
//!
//! Registered 11 renditions, wrote 9 settings
//! ```
//!
//! ## Crop
//!
//! ```text
//! Source crop: 600x600 at (100, 0)
//! Destination: 300x300 at (0, 0)
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure —
//! no I/O, no side effects.

use crate::catalog::{RenditionCatalog, RenditionDefinition, UNBOUNDED};
use crate::host::HostOp;
use crate::imaging::CropPlan;
use crate::picker::NameMap;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn crop_word(crop: bool) -> &'static str {
    if crop { "crop" } else { "fit" }
}

/// Human reading of a rendition's box.
fn size_detail(def: &RenditionDefinition) -> String {
    match (def.width, def.height) {
        (UNBOUNDED, UNBOUNDED) => format!("unbounded {}", crop_word(def.crop)),
        (w, UNBOUNDED) => format!("{w} wide, height unbounded"),
        (UNBOUNDED, h) => format!("{h} high, width unbounded"),
        (w, h) => format!("{w}x{h} {}", crop_word(def.crop)),
    }
}

// ============================================================================
// Catalog
// ============================================================================

pub fn format_catalog(catalog: &RenditionCatalog) -> Vec<String> {
    if catalog.is_empty() {
        return vec!["No renditions".to_string()];
    }

    let mut lines = Vec::new();
    for (i, def) in catalog.definitions().iter().enumerate() {
        if def.name.is_empty() {
            lines.push(format!("{} ({})", format_index(i + 1), def.identifier));
            lines.push(format!("{}{}, hidden from picker", indent(1), size_detail(def)));
        } else {
            lines.push(format!(
                "{} {} ({})",
                format_index(i + 1),
                def.name,
                def.identifier
            ));
            lines.push(format!("{}{}", indent(1), size_detail(def)));
        }
    }
    lines
}

pub fn print_catalog(catalog: &RenditionCatalog) {
    for line in format_catalog(catalog) {
        println!("{}", line);
    }
}

// ============================================================================
// Register
// ============================================================================

pub fn format_host_ops(ops: &[HostOp]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut registered = 0;
    let mut settings = 0;

    for op in ops {
        match op {
            HostOp::AddImageSize {
                identifier,
                width,
                height,
                crop,
            } => {
                registered += 1;
                lines.push(format!(
                    "add_image_size {} {}x{} {}",
                    identifier,
                    width,
                    height,
                    crop_word(*crop)
                ));
            }
            HostOp::UpdateOption { key, value } => {
                settings += 1;
                lines.push(format!("{}{} = {}", indent(1), key, value));
            }
        }
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "Registered {} renditions, wrote {} settings",
        registered, settings
    ));
    lines
}

pub fn print_host_ops(ops: &[HostOp]) {
    for line in format_host_ops(ops) {
        println!("{}", line);
    }
}

// ============================================================================
// Crop
// ============================================================================

pub fn format_plan(plan: &CropPlan) -> Vec<String> {
    match plan {
        CropPlan::NoOverride => vec!["No override: host fits the image inside the box".to_string()],
        CropPlan::Crop(r) => vec![
            format!(
                "Source crop: {}x{} at ({}, {})",
                r.src_width, r.src_height, r.src_x, r.src_y
            ),
            format!(
                "Destination: {}x{} at ({}, {})",
                r.dest_width, r.dest_height, r.dest_x, r.dest_y
            ),
        ],
    }
}

pub fn print_plan(plan: &CropPlan) {
    for line in format_plan(plan) {
        println!("{}", line);
    }
}

// ============================================================================
// Picker
// ============================================================================

pub fn format_names(names: &NameMap) -> Vec<String> {
    names
        .iter()
        .enumerate()
        .map(|(i, (id, label))| format!("{} {} ({})", format_index(i + 1), label, id))
        .collect()
}

pub fn print_names(names: &NameMap) {
    for line in format_names(names) {
        println!("{}", line);
    }
}
