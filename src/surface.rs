use tiny_skia::{Color, Pixmap, PixmapPaint, Transform};

use crate::error::SurfaceError;
use crate::renderer;
use crate::stroke::Stroke;

/// The persistent raster layer holding every committed stroke.
///
/// Pixels are premultiplied RGBA8, starting fully transparent.
#[derive(Debug, Clone)]
pub struct Surface {
    pixmap: Pixmap,
    /// Bumped on every mutation so views can tell when to re-upload
    version: u64,
    /// Bumped only when the drawing itself changes, not on resize
    content_version: u64,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(SurfaceError::InvalidDimensions { width, height })?;
        Ok(Self {
            pixmap,
            version: 0,
            content_version: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn size(&self) -> [u32; 2] {
        [self.width(), self.height()]
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn content_version(&self) -> u64 {
        self.content_version
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Rasterize a committed stroke into the surface. Returns whether any
    /// pixels were touched.
    pub fn commit(&mut self, stroke: &Stroke) -> bool {
        if !renderer::rasterize(&mut self.pixmap, stroke) {
            return false;
        }
        self.version += 1;
        self.content_version += 1;
        true
    }

    /// Erase everything
    pub fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
        self.version += 1;
        self.content_version += 1;
    }

    /// Change the surface size, keeping existing pixels anchored top-left.
    /// Content outside the new bounds is dropped.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        if self.size() == [width, height] {
            return Ok(());
        }
        let mut pixmap =
            Pixmap::new(width, height).ok_or(SurfaceError::InvalidDimensions { width, height })?;
        pixmap.draw_pixmap(
            0,
            0,
            self.pixmap.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        log::debug!(
            "Resized surface from {}x{} to {}x{}",
            self.width(),
            self.height(),
            width,
            height
        );
        self.pixmap = pixmap;
        self.version += 1;
        Ok(())
    }

    /// A copy of the surface with `overlay` drawn on top. The surface itself
    /// is left untouched.
    pub fn composite(&self, overlay: Option<&Stroke>) -> Pixmap {
        let mut frame = self.pixmap.clone();
        if let Some(stroke) = overlay {
            renderer::rasterize(&mut frame, stroke);
        }
        frame
    }

    pub fn is_blank(&self) -> bool {
        self.pixmap.pixels().iter().all(|pixel| pixel.alpha() == 0)
    }
}

/// Straight (non-premultiplied) RGBA8 bytes of a pixmap, row major
pub fn unpremultiplied_rgba(pixmap: &Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect()
}
