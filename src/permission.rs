use std::path::{Path, PathBuf};

/// Outcome of a storage permission check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        self == Self::Granted
    }
}

/// Gate in front of every write to shared storage.
///
/// `check` must not have side effects. `request` is asked at most once per
/// save attempt, after a failed check.
pub trait StoragePermission: Send {
    fn check(&self, dir: &Path) -> PermissionStatus;

    fn request(&mut self, dir: &Path) -> PermissionStatus {
        self.check(dir)
    }
}

/// Desktop permission: the save directory (or the closest ancestor that
/// exists, since the directory is created on demand) must be writable.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsPermission;

impl StoragePermission for FsPermission {
    fn check(&self, dir: &Path) -> PermissionStatus {
        let Some(existing) = closest_existing(dir) else {
            return PermissionStatus::Denied;
        };
        match std::fs::metadata(&existing) {
            Ok(meta) if meta.is_dir() && !meta.permissions().readonly() => PermissionStatus::Granted,
            Ok(_) => PermissionStatus::Denied,
            Err(err) => {
                log::warn!("Cannot inspect {}: {}", existing.display(), err);
                PermissionStatus::Denied
            }
        }
    }
}

/// A fixed answer, for platforms without a storage gate and for tests
#[derive(Debug, Clone, Copy)]
pub struct StaticPermission(pub PermissionStatus);

impl StoragePermission for StaticPermission {
    fn check(&self, _dir: &Path) -> PermissionStatus {
        self.0
    }
}

fn closest_existing(dir: &Path) -> Option<PathBuf> {
    let absolute = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(dir)
    };
    absolute.ancestors().find(|path| path.exists()).map(Path::to_path_buf)
}
