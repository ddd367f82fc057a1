//! Rendition names shown in the editorial size picker.
//!
//! The host offers its own identifier → label list. The catalog's labels take
//! over every identifier it defines, renditions with an empty label are
//! hidden, and catalog entries are listed before the host's leftovers.

use indexmap::IndexMap;

/// Identifier → display label, in display order.
pub type NameMap = IndexMap<String, String>;

/// Merge the host's picker names with the catalog's.
///
/// ```
/// # use image_formats::picker::{NameMap, merge_picker_names};
/// let platform: NameMap = [("a", "A"), ("b", "B")]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v.to_string()))
///     .collect();
/// let catalog: NameMap = [("b", "B2"), ("c", "")]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v.to_string()))
///     .collect();
/// let merged = merge_picker_names(&platform, &catalog);
/// assert_eq!(merged.keys().collect::<Vec<_>>(), ["b", "a"]);
/// assert_eq!(merged["b"], "B2");
/// ```
pub fn merge_picker_names(platform: &NameMap, catalog: &NameMap) -> NameMap {
    let shown = catalog
        .iter()
        .filter(|(_, label)| !label.is_empty())
        .map(|(id, label)| (id.clone(), label.clone()));

    // Any catalog identifier supersedes the host's, hidden or not.
    let leftovers = platform
        .iter()
        .filter(|(id, _)| !catalog.contains_key(id.as_str()))
        .map(|(id, label)| (id.clone(), label.clone()));

    shown.chain(leftovers).collect()
}
