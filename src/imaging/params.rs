//! Parameter types for crop geometry.
//!
//! These structs describe *what* the resampler should do, not *how*. The
//! resolver in [`calculations`](super::calculations) turns a [`CropRequest`]
//! into a [`CropPlan`]; the host's resampling engine reads pixels and writes
//! the output file.
//!
//! ## Types
//!
//! - [`Dimensions`] — A width × height pair. Parses from `"800x600"`.
//! - [`CropRequest`] — Source size, destination box, and the rendition's crop flag.
//! - [`CropRect`] — Source crop rectangle plus destination paste rectangle.
//! - [`CropPlan`] — Either [`CropPlan::NoOverride`] or a [`CropRect`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DimensionsParseError {
    #[error("expected WIDTHxHEIGHT, got {0:?}")]
    Malformed(String),
    #[error("dimensions must be positive, got {0:?}")]
    Zero(String),
}

/// Pixel dimensions of an image or a target box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Dimensions {
    type Err = DimensionsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DimensionsParseError::Malformed(s.to_string());
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(malformed)?;
        let width: u32 = w.trim().parse().map_err(|_| malformed())?;
        let height: u32 = h.trim().parse().map_err(|_| malformed())?;
        if width == 0 || height == 0 {
            return Err(DimensionsParseError::Zero(s.to_string()));
        }
        Ok(Self { width, height })
    }
}

/// One resize request from the host resampler.
///
/// Source dimensions must be positive; the resolver does not check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRequest {
    pub source_width: u32,
    pub source_height: u32,
    pub dest_width: u32,
    pub dest_height: u32,
    pub crop: bool,
}

impl CropRequest {
    pub fn new(source: Dimensions, dest: Dimensions, crop: bool) -> Self {
        Self {
            source_width: source.width,
            source_height: source.height,
            dest_width: dest.width,
            dest_height: dest.height,
            crop,
        }
    }
}

/// Read `src_width × src_height` from the source at `(src_x, src_y)` and
/// write it scaled to `dest_width × dest_height` at `(dest_x, dest_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub src_x: u32,
    pub src_y: u32,
    pub src_width: u32,
    pub src_height: u32,
    pub dest_x: u32,
    pub dest_y: u32,
    pub dest_width: u32,
    pub dest_height: u32,
}

/// Outcome of resolving a [`CropRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "plan", rename_all = "snake_case")]
pub enum CropPlan {
    /// Let the host use its default contain-fit logic.
    NoOverride,
    /// Cover-crop with exact geometry.
    Crop(CropRect),
}

impl CropPlan {
    pub fn rect(&self) -> Option<&CropRect> {
        match self {
            CropPlan::NoOverride => None,
            CropPlan::Crop(rect) => Some(rect),
        }
    }

    /// Geometry in the order the host resampler consumes it:
    /// `[dst_x, dst_y, src_x, src_y, dst_w, dst_h, src_w, src_h]`.
    pub fn as_resize_dimensions(&self) -> Option<[u32; 8]> {
        self.rect().map(|r| {
            [
                r.dest_x,
                r.dest_y,
                r.src_x,
                r.src_y,
                r.dest_width,
                r.dest_height,
                r.src_width,
                r.src_height,
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_parse_lowercase_and_uppercase() {
        assert_eq!("800x600".parse(), Ok(Dimensions::new(800, 600)));
        assert_eq!("1920X300".parse(), Ok(Dimensions::new(1920, 300)));
        assert_eq!(" 150 x 150 ".parse(), Ok(Dimensions::new(150, 150)));
    }

    #[test]
    fn dimensions_parse_rejects_malformed() {
        assert!(matches!(
            "800".parse::<Dimensions>(),
            Err(DimensionsParseError::Malformed(_))
        ));
        assert!(matches!(
            "axb".parse::<Dimensions>(),
            Err(DimensionsParseError::Malformed(_))
        ));
        assert!(matches!(
            "-1x5".parse::<Dimensions>(),
            Err(DimensionsParseError::Malformed(_))
        ));
    }

    #[test]
    fn dimensions_parse_rejects_zero() {
        assert_eq!(
            "0x600".parse::<Dimensions>(),
            Err(DimensionsParseError::Zero("0x600".to_string()))
        );
    }

    #[test]
    fn dimensions_display_round_trips_format() {
        assert_eq!(Dimensions::new(225, 9999).to_string(), "225x9999");
    }

    #[test]
    fn resize_dimensions_order_matches_host() {
        let plan = CropPlan::Crop(CropRect {
            src_x: 100,
            src_y: 0,
            src_width: 600,
            src_height: 600,
            dest_x: 0,
            dest_y: 0,
            dest_width: 300,
            dest_height: 300,
        });
        assert_eq!(
            plan.as_resize_dimensions(),
            Some([0, 0, 100, 0, 300, 300, 600, 600])
        );
    }

    #[test]
    fn no_override_has_no_resize_dimensions() {
        assert_eq!(CropPlan::NoOverride.as_resize_dimensions(), None);
        assert_eq!(CropPlan::NoOverride.rect(), None);
    }
}
