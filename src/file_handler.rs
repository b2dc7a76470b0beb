use futures::channel::oneshot;
use image::{ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};
use tiny_skia::Pixmap;

use crate::error::{SaveError, SaveResult};
use crate::permission::StoragePermission;
use crate::surface::unpremultiplied_rgba;

const PNG_EXTENSION: &str = "png";

/// Saves drawings as PNG files into a fixed directory
pub struct FileHandler {
    save_dir: PathBuf,
    permission: Box<dyn StoragePermission>,
}

impl std::fmt::Debug for FileHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileHandler")
            .field("save_dir", &self.save_dir)
            .finish_non_exhaustive()
    }
}

impl FileHandler {
    pub fn new(save_dir: PathBuf, permission: Box<dyn StoragePermission>) -> Self {
        Self {
            save_dir,
            permission,
        }
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    /// Check write access, asking for it once if it is missing
    pub fn ensure_permission(&mut self) -> SaveResult<()> {
        if self.permission.check(&self.save_dir).is_granted() {
            return Ok(());
        }
        log::info!("Requesting write access to {}", self.save_dir.display());
        if self.permission.request(&self.save_dir).is_granted() {
            Ok(())
        } else {
            log::warn!("Write access to {} denied", self.save_dir.display());
            Err(SaveError::PermissionDenied)
        }
    }

    /// Validate everything a save needs and snapshot the pixels. Nothing is
    /// written yet.
    pub fn prepare(&mut self, name: &str, pixmap: &Pixmap) -> SaveResult<ExportRequest> {
        self.ensure_permission()?;
        let path = drawing_path(&self.save_dir, name)?;
        let image = to_rgba_image(pixmap)?;
        Ok(ExportRequest { path, image })
    }

    /// Save on the calling thread
    pub fn save_blocking(&mut self, name: &str, pixmap: &Pixmap) -> SaveResult<PathBuf> {
        self.prepare(name, pixmap)?.write()
    }
}

/// A validated save, ready to be written
#[derive(Debug)]
pub struct ExportRequest {
    path: PathBuf,
    image: RgbaImage,
}

impl ExportRequest {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(self) -> SaveResult<PathBuf> {
        write_png(&self.image, &self.path)?;
        log::info!("Drawing saved to {}", self.path.display());
        Ok(self.path)
    }

    /// Write on a worker thread
    pub fn spawn(self) -> ExportJob {
        let (sender, receiver) = oneshot::channel();
        let path = self.path.clone();
        std::thread::spawn(move || {
            // The receiver may be gone if the app closed meanwhile
            let _ = sender.send(self.write());
        });
        ExportJob { path, receiver }
    }
}

/// A save running in the background
#[derive(Debug)]
pub struct ExportJob {
    path: PathBuf,
    receiver: oneshot::Receiver<SaveResult<PathBuf>>,
}

impl ExportJob {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Non-blocking; `None` while the write is still running
    pub fn poll(&mut self) -> Option<SaveResult<PathBuf>> {
        match self.receiver.try_recv() {
            Ok(result) => result,
            Err(oneshot::Canceled) => Some(Err(SaveError::WorkerDisconnected)),
        }
    }

    pub fn wait(self) -> SaveResult<PathBuf> {
        futures::executor::block_on(self.receiver).unwrap_or(Err(SaveError::WorkerDisconnected))
    }
}

/// `<dir>/<name>.png` for a user supplied name
pub fn drawing_path(dir: &Path, name: &str) -> SaveResult<PathBuf> {
    let name = name.trim();
    let stem = name
        .strip_suffix(".png")
        .or_else(|| name.strip_suffix(".PNG"))
        .unwrap_or(name)
        .trim();

    let invalid = stem.is_empty()
        || stem == "."
        || stem == ".."
        || stem.chars().any(|c| c == '/' || c == '\\' || c.is_control());
    if invalid {
        return Err(SaveError::InvalidName(name.to_owned()));
    }

    Ok(dir.join(format!("{stem}.{PNG_EXTENSION}")))
}

fn to_rgba_image(pixmap: &Pixmap) -> SaveResult<RgbaImage> {
    let (width, height) = (pixmap.width(), pixmap.height());
    RgbaImage::from_raw(width, height, unpremultiplied_rgba(pixmap)).ok_or_else(|| {
        SaveError::Io(std::io::Error::other(format!(
            "pixel buffer does not match {width}x{height}"
        )))
    })
}

/// Encode into a temporary sibling first so a failed save never leaves a
/// truncated file behind
fn write_png(image: &RgbaImage, path: &Path) -> SaveResult<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let temp = dir.join(format!(".{}.{PNG_EXTENSION}.tmp", uuid::Uuid::new_v4()));
    let result = image
        .save_with_format(&temp, ImageFormat::Png)
        .map_err(SaveError::from)
        .and_then(|()| std::fs::rename(&temp, path).map_err(SaveError::from));

    if result.is_err() {
        if let Err(err) = std::fs::remove_file(&temp) {
            log::debug!("Could not remove {}: {}", temp.display(), err);
        }
    }
    result
}
