//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for reading content files from the local
//! filesystem under a fixed content root.

use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::{Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage implementation.
///
/// Lists and reads markdown files under a content root. All access is
/// read-only; paths are validated so requests can never escape the root.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use sitenav_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new(PathBuf::from("docs"));
/// let names = storage.list_dir("features")?;
/// ```
pub struct FsStorage {
    /// Root directory for content storage.
    content_root: PathBuf,
}

impl FsStorage {
    /// Create a new filesystem storage.
    ///
    /// # Arguments
    ///
    /// * `content_root` - Root directory containing content files
    #[must_use]
    pub fn new(content_root: PathBuf) -> Self {
        Self { content_root }
    }

    /// Validate that a path doesn't escape the content root.
    ///
    /// Rejects paths containing parent directory components (`..`) to prevent
    /// path traversal (e.g., `../../../etc/passwd`).
    fn validate_path(path: &Path) -> Result<(), StorageError> {
        let has_parent_dir = path
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir));

        if has_parent_dir {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(path)
                .with_backend(BACKEND));
        }
        Ok(())
    }

    /// Resolve a relative path against the content root.
    fn resolve(&self, rel: &str) -> Result<PathBuf, StorageError> {
        let rel_path = Path::new(rel);
        Self::validate_path(rel_path)?;
        Ok(self.content_root.join(rel_path))
    }

    /// True for filenames the scanner should see.
    ///
    /// Content files are `.md`; hidden and underscore-prefixed files are
    /// build-tool internals and are skipped.
    fn is_content_file(name: &str) -> bool {
        !name.starts_with('.')
            && !name.starts_with('_')
            && Path::new(name)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
    }
}

impl Storage for FsStorage {
    fn list_dir(&self, dir: &str) -> Result<Vec<String>, StorageError> {
        let dir_path = self.resolve(dir)?;

        if !dir_path.is_dir() {
            return Err(StorageError::not_found(dir).with_backend(BACKEND));
        }

        let entries = fs::read_dir(&dir_path)
            .map_err(|e| StorageError::io(e, Some(PathBuf::from(dir))).with_backend(BACKEND))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(dir, error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };

            let file_type = match entry.file_type() {
                Ok(ft) => ft,
                Err(e) => {
                    tracing::warn!(dir, error = %e, "Skipping entry with unknown file type");
                    continue;
                }
            };
            if !file_type.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if Self::is_content_file(&name) {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    fn read(&self, path: &str) -> Result<String, StorageError> {
        let file_path = self.resolve(path)?;
        fs::read_to_string(&file_path)
            .map_err(|e| StorageError::io(e, Some(PathBuf::from(path))).with_backend(BACKEND))
    }

    fn is_dir(&self, dir: &str) -> bool {
        self.resolve(dir).is_ok_and(|p| p.is_dir())
    }
}
