//! Pure calculation functions for crop geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use super::params::{CropPlan, CropRect, CropRequest};

/// Resolve cover-crop geometry for a resize request.
///
/// Non-crop requests return [`CropPlan::NoOverride`] so the host keeps its
/// contain-fit path. Crop requests pick the smallest scale factor that makes
/// the scaled source cover the destination box on both axes, then take the
/// centered source region that fills the box exactly at that scale.
///
/// Rounding follows the host's arithmetic: crop sizes are rounded half away
/// from zero, offsets are floored, so an odd leftover pixel goes to the
/// bottom/right edge.
///
/// Precondition: `source_width` and `source_height` are positive.
///
/// # Examples
/// ```
/// # use image_formats::imaging::{CropRequest, Dimensions, resolve_crop};
/// let request = CropRequest::new(Dimensions::new(800, 600), Dimensions::new(300, 300), true);
/// let rect = *resolve_crop(&request).rect().unwrap();
/// assert_eq!((rect.src_x, rect.src_y, rect.src_width, rect.src_height), (100, 0, 600, 600));
/// ```
pub fn resolve_crop(request: &CropRequest) -> CropPlan {
    if !request.crop {
        return CropPlan::NoOverride;
    }

    let src_w = f64::from(request.source_width);
    let src_h = f64::from(request.source_height);
    let dst_w = f64::from(request.dest_width);
    let dst_h = f64::from(request.dest_height);

    let scale_factor = (dst_w / src_w).max(dst_h / src_h);

    let crop_w = (dst_w / scale_factor).round();
    let crop_h = (dst_h / scale_factor).round();

    let src_x = ((src_w - crop_w) / 2.0).floor();
    let src_y = ((src_h - crop_h) / 2.0).floor();

    CropPlan::Crop(CropRect {
        src_x: src_x as u32,
        src_y: src_y as u32,
        src_width: crop_w as u32,
        src_height: crop_h as u32,
        dest_x: 0,
        dest_y: 0,
        dest_width: request.dest_width,
        dest_height: request.dest_height,
    })
}
