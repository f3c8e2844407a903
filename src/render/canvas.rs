use crate::foundation::core::PixelRect;
use crate::foundation::error::{MovieError, MovieResult};
use crate::foundation::math::blend_premul_over_opaque;
use crate::render::overlay::SvgOverlay;
use std::path::{Path, PathBuf};

/// A figure being composed: opaque raster content plus a vector overlay drawn on top.
pub struct FrameCanvas {
    image: image::RgbaImage,
    overlay: SvgOverlay,
}

impl FrameCanvas {
    /// White canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: image::RgbaImage::from_pixel(width, height, image::Rgba([255, 255, 255, 255])),
            overlay: SvgOverlay::new(width, height),
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Set one pixel; coordinates outside the canvas are ignored.
    pub fn put(&mut self, x: i64, y: i64, rgba: [u8; 4]) {
        if x < 0 || y < 0 || x >= i64::from(self.width()) || y >= i64::from(self.height()) {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, image::Rgba(rgba));
    }

    /// Integer pixel bounds covered by `rect`, clipped to the canvas, as `(x0, y0, x1, y1)`.
    pub fn pixel_span(&self, rect: PixelRect) -> (i64, i64, i64, i64) {
        let clip = |v: f64, max: u32| (v.round() as i64).clamp(0, i64::from(max));
        (
            clip(rect.x0, self.width()),
            clip(rect.y0, self.height()),
            clip(rect.x1, self.width()),
            clip(rect.y1, self.height()),
        )
    }

    /// Vector overlay drawn above the raster content.
    pub fn overlay(&mut self) -> &mut SvgOverlay {
        &mut self.overlay
    }

    /// Flatten the overlay onto the raster content.
    pub fn finish(self) -> MovieResult<image::RgbaImage> {
        let Self { mut image, overlay } = self;
        let top = overlay.rasterize()?;
        if top.len() != image.as_raw().len() {
            return Err(MovieError::render("overlay size does not match canvas"));
        }
        for (dst, src) in image.chunks_exact_mut(4).zip(top.chunks_exact(4)) {
            blend_premul_over_opaque(dst, src);
        }
        Ok(image)
    }

    /// Flatten and write as PNG.
    ///
    /// The image goes to a sibling temp file first and is renamed into place, so `path` is
    /// either absent or complete.
    pub fn save_png(self, path: &Path) -> MovieResult<()> {
        use anyhow::Context as _;

        let image = self.finish()?;
        let tmp = partial_path(path);
        if let Err(e) = image.save_with_format(&tmp, image::ImageFormat::Png) {
            let _ = std::fs::remove_file(&tmp);
            return Err(MovieError::render(format!(
                "write png '{}': {e}",
                tmp.display()
            )));
        }
        std::fs::rename(&tmp, path).with_context(|| {
            format!(
                "failed to move '{}' to '{}'",
                tmp.display(),
                path.display()
            )
        })?;
        Ok(())
    }
}

/// Hidden sibling of `path` that a frame is written to before it is renamed into place.
pub fn partial_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.partial"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
