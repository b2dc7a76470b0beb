use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};
use tiny_skia::Pixmap;

/// Keeps the GPU copy of the canvas in sync, re-uploading only when the
/// frame version changes
#[derive(Default)]
pub struct SurfaceTexture {
    handle: Option<TextureHandle>,
    version: Option<(u64, u64)>,
    uploads: u64,
}

impl std::fmt::Debug for SurfaceTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceTexture")
            .field("version", &self.version)
            .field("uploads", &self.uploads)
            .finish_non_exhaustive()
    }
}

impl SurfaceTexture {
    /// Texture for `version`, calling `render` only if it is out of date
    pub fn get_or_update<F>(&mut self, ctx: &Context, version: (u64, u64), render: F) -> TextureId
    where
        F: FnOnce() -> Pixmap,
    {
        if let (Some(handle), Some(current)) = (&self.handle, self.version) {
            if current == version {
                return handle.id();
            }
        }

        let image = color_image(&render());
        let id = match &mut self.handle {
            Some(handle) => {
                handle.set(image, TextureOptions::LINEAR);
                handle.id()
            }
            None => {
                let handle = ctx.load_texture("drawing_surface", image, TextureOptions::LINEAR);
                let id = handle.id();
                self.handle = Some(handle);
                id
            }
        };
        self.version = Some(version);
        self.uploads += 1;
        id
    }

    pub fn uploads(&self) -> u64 {
        self.uploads
    }
}

/// tiny-skia and egui both store premultiplied RGBA8
fn color_image(pixmap: &Pixmap) -> ColorImage {
    ColorImage::from_rgba_premultiplied(
        [pixmap.width() as usize, pixmap.height() as usize],
        pixmap.data(),
    )
}
