//! Texture atlas generation: the unrolled silhouette as a filled mask.
//!
//! The atlas width approximates the half-circumference of the widest
//! cross-section at the atlas' vertical resolution. Each row's filled span
//! is the U envelope at the matching arc-length V offset, so the mask
//! covers exactly the UV footprint produced by the arc-length mesh.

use crate::error::{MeshError, Result};
use crate::raster::{TextureRaster, CHANNELS};
use crate::silhouette::{Silhouette, UBounds};
use std::f64::consts::PI;

/// Color of the filled silhouette region (background stays black).
pub const FILL_COLOR: [u8; 3] = [255, 255, 255];

/// Compute the atlas width in pixels: `floor(pi * texture_height * max_radius)`.
///
/// Fails if the result is below one pixel or does not fit in a `u32`.
pub fn texture_width(texture_height: u32, max_radius: f64) -> Result<u32> {
    let width = (PI * f64::from(texture_height) * max_radius).floor();
    if !(1.0..=f64::from(u32::MAX)).contains(&width) {
        return Err(MeshError::InvalidArgument(format!(
            "Texture width {} for height {} and max radius {} is out of range",
            width, texture_height, max_radius
        )));
    }
    Ok(width as u32)
}

/// Closed pixel-space contour of the unrolled silhouette.
///
/// The right edge (`u_max`) runs from the last sample back to the first,
/// then the left edge (`u_min`) runs forward again. Coordinates are scaled
/// by the raster size and truncated.
pub fn contour_polygon(
    offsets: &[f64],
    envelope: &[UBounds],
    width: u32,
    height: u32,
) -> Vec<[i32; 2]> {
    let (w, h) = (f64::from(width), f64::from(height));
    let to_pixel = |u: f64, v: f64| [(u * w) as i32, (v * h) as i32];

    let right = offsets
        .iter()
        .zip(envelope)
        .rev()
        .map(|(&v, b)| to_pixel(b.u_max, v));
    let left = offsets
        .iter()
        .zip(envelope)
        .map(|(&v, b)| to_pixel(b.u_min, v));

    right.chain(left).collect()
}

/// Build the texture mask for a silhouette.
///
/// Requires at least two samples, a non-zero `texture_height` and a
/// silhouette that is not all zero.
pub fn build_texture(silhouette: &Silhouette, texture_height: u32) -> Result<TextureRaster> {
    if silhouette.len() < 2 {
        return Err(MeshError::InvalidArgument(format!(
            "Texture atlas needs at least 2 silhouette samples, got {}",
            silhouette.len()
        )));
    }
    let envelope = silhouette.u_envelope()?;
    let offsets = silhouette.arc_length_offsets();
    rasterize(&offsets, &envelope, silhouette.max_radius(), texture_height)
}

/// Rasterize precomputed arc-length offsets and U envelope into a mask.
pub(crate) fn rasterize(
    offsets: &[f64],
    envelope: &[UBounds],
    max_radius: f64,
    texture_height: u32,
) -> Result<TextureRaster> {
    if texture_height == 0 {
        return Err(MeshError::InvalidArgument(
            "Texture height must be at least 1 pixel".to_string(),
        ));
    }
    let width = texture_width(texture_height, max_radius)?;
    (width as usize)
        .checked_mul(texture_height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| {
            MeshError::InvalidArgument(format!(
                "Texture {}x{} exceeds the addressable buffer size",
                width, texture_height
            ))
        })?;

    let polygon = contour_polygon(offsets, envelope, width, texture_height);
    let mut raster = TextureRaster::new(width, texture_height);
    raster.fill_polygon(&polygon, FILL_COLOR);
    // Fill puts V = 0 on row 0; image rows run top-down.
    raster.flip_vertical();

    log::debug!(
        "Texture atlas {}x{}, {} of {} pixels filled",
        width,
        texture_height,
        raster.filled_pixel_count(),
        width as usize * texture_height as usize
    );

    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_width_formula() {
        assert_eq!(texture_width(10, 1.0).unwrap(), 31);
        assert_eq!(texture_width(1000, 0.5).unwrap(), 1570);
    }

    #[test]
    fn test_texture_width_rejects_zero() {
        assert!(texture_width(10, 0.0).is_err());
        assert!(texture_width(0, 1.0).is_err());
        // pi * 1 * 0.1 floors to 0
        assert!(texture_width(1, 0.1).is_err());
    }

    #[test]
    fn test_texture_size_overflow_rejected() {
        let s = Silhouette::new(vec![0.6, 0.3]).unwrap();
        let result = build_texture(&s, 1u32 << 31);
        assert!(matches!(result, Err(MeshError::InvalidArgument(_))));
    }

    #[test]
    fn test_texture_width_monotonic() {
        let mut previous = 0;
        for h in [4u32, 16, 64, 256, 1024] {
            let w = texture_width(h, 0.7).unwrap();
            assert!(w >= previous);
            previous = w;
        }
        let mut previous = 0;
        for r in [0.1, 0.3, 0.5, 0.9, 1.0] {
            let w = texture_width(100, r).unwrap();
            assert!(w >= previous);
            previous = w;
        }
    }

    #[test]
    fn test_contour_polygon_order() {
        let offsets = [0.0, 1.0];
        let envelope = [
            UBounds {
                u_min: 0.25,
                u_max: 0.75,
            },
            UBounds {
                u_min: 0.0,
                u_max: 1.0,
            },
        ];
        let polygon = contour_polygon(&offsets, &envelope, 20, 10);
        assert_eq!(polygon, vec![[20, 10], [15, 0], [5, 0], [0, 10]]);
    }

    #[test]
    fn test_build_texture_rejects_single_sample() {
        let s = Silhouette::new(vec![0.5]).unwrap();
        assert!(build_texture(&s, 10).is_err());
    }

    #[test]
    fn test_build_texture_rejects_all_zero() {
        let s = Silhouette::new(vec![0.0, 0.0, 0.0]).unwrap();
        assert!(matches!(
            build_texture(&s, 100),
            Err(MeshError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_cylinder_fills_whole_atlas() {
        let s = Silhouette::new(vec![0.5, 0.5]).unwrap();
        let raster = build_texture(&s, 20).unwrap();
        assert_eq!(raster.height(), 20);
        assert_eq!(raster.width(), 31);
        assert_eq!(raster.filled_pixel_count(), 31 * 20);
    }

    #[test]
    fn test_cone_is_narrow_at_apex_row() {
        // Apex (radius 0) at V = 0, base at V = 1. After the flip the apex
        // sits on the bottom row and the base on the top row.
        let s = Silhouette::new(vec![0.0, 1.0]).unwrap();
        let raster = build_texture(&s, 40).unwrap();
        let w = raster.width();
        let row_fill = |y: u32| (0..w).filter(|&x| raster.pixel(x, y) == Some(FILL_COLOR)).count();
        assert!(row_fill(0) > row_fill(39));
        assert!(row_fill(0) as u32 >= w - 2);
        assert!(row_fill(39) as u32 <= w / 10);
    }
}
