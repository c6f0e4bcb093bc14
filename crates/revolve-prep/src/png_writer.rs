use crate::error::PrepError;
use image::{ImageFormat, RgbImage};
use revolve_core::TextureRaster;
use std::path::Path;

/// Convert an atlas raster into an `image` buffer.
pub fn to_rgb_image(raster: &TextureRaster) -> Option<RgbImage> {
    RgbImage::from_raw(raster.width(), raster.height(), raster.data().to_vec())
}

/// Encode the atlas as a PNG file at `path`.
pub fn write_texture(path: &Path, raster: &TextureRaster) -> Result<(), PrepError> {
    let is_png = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if !is_png {
        log::warn!(
            "Texture path {} has no .png extension; writing PNG data anyway",
            path.display()
        );
    }

    let img = to_rgb_image(raster).ok_or_else(|| PrepError::ImageEncode {
        path: path.to_path_buf(),
        message: format!(
            "raster buffer of {} bytes does not match {}×{} RGB8",
            raster.size_bytes(),
            raster.width(),
            raster.height()
        ),
    })?;

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| PrepError::ImageEncode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    log::info!(
        "  Wrote {} ({}×{} RGB8, {:.1} KB raw)",
        path.display(),
        raster.width(),
        raster.height(),
        raster.size_bytes() as f64 / 1024.0
    );
    Ok(())
}
