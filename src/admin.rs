//! Media settings page rewrite.
//!
//! The catalog owns rendition sizes, so the host's own "Image sizes" panel on
//! the media settings screen is misleading. The host renders that screen as
//! HTML; this module cuts the panel out of the rendered markup.
//!
//! The panel is found by its heading: an `<h2 ...>` tag whose text starts
//! with the (localized) heading, running up to the next `<h2`. Markup with no
//! following `<h2` is left alone, as is every other screen.

use regex::Regex;
use std::borrow::Cow;

/// Host screen id of the media settings page.
pub const MEDIA_SETTINGS_SCREEN: &str = "options-media";

/// Untranslated heading of the panel to remove.
pub const IMAGE_SIZES_HEADING: &str = "Image sizes";

/// Remove the image-sizes panel when `screen` is the media settings page.
///
/// `screen` is `None` when the host has no current screen.
pub fn filter_admin_page<'a>(
    screen: Option<&str>,
    media_screen: &str,
    heading: &str,
    html: &'a str,
) -> Cow<'a, str> {
    match screen {
        Some(s) if s == media_screen => strip_section(html, heading),
        _ => Cow::Borrowed(html),
    }
}

/// Remove the first `<h2>` section whose heading starts with `heading`.
pub fn strip_section<'a>(html: &'a str, heading: &str) -> Cow<'a, str> {
    let pattern = format!(r"(?s)<h2[^>]+>{}.*?<h2", regex::escape(heading));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(err) => {
            tracing::warn!(%err, "admin section pattern rejected");
            return Cow::Borrowed(html);
        }
    };

    let Some(m) = re.find(html) else {
        return Cow::Borrowed(html);
    };
    // Keep the next section's opening `<h2`.
    let end = m.end() - "<h2".len();
    tracing::debug!(heading, removed = end - m.start(), "stripped admin section");

    let mut out = String::with_capacity(html.len() - (end - m.start()));
    out.push_str(&html[..m.start()]);
    out.push_str(&html[end..]);
    Cow::Owned(out)
}
