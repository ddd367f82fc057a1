//! Crop geometry for the host's image resampler — pure math, no pixels.
//!
//! | Piece | Role |
//! |---|---|
//! | **Parameters** | [`CropRequest`] in, [`CropPlan`] out |
//! | **Calculations** | [`resolve_crop`]: cover-fit scale, rounded crop size, centered offset |
//!
//! The host decodes, resamples, and encodes. This module only decides which
//! source rectangle fills which destination rectangle.

mod calculations;
mod params;

pub use calculations::resolve_crop;
pub use params::{CropPlan, CropRect, CropRequest, Dimensions, DimensionsParseError};
