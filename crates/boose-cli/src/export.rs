//! Surface → PNG.

use boose_canvas::Surface;
use image::RgbImage;
use std::path::Path;

/// Copy the surface into an `image` buffer.
pub fn to_image(surface: &Surface) -> Result<RgbImage, String> {
    RgbImage::from_raw(
        surface.width(),
        surface.height(),
        surface.to_rgb_bytes(),
    )
    .ok_or_else(|| {
        format!(
            "pixel buffer does not match {}x{}",
            surface.width(),
            surface.height()
        )
    })
}

pub fn save_png(surface: &Surface, path: &Path) -> Result<(), String> {
    let img = to_image(surface)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| format!("error saving PNG {}: {e}", path.display()))?;
    log::info!(
        "wrote {}x{} PNG to {}",
        surface.width(),
        surface.height(),
        path.display()
    );
    Ok(())
}
