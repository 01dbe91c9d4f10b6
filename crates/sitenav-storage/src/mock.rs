//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::RwLock;

use crate::storage::{Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Split a relative path into (directory, filename).
fn split_path(path: &str) -> (&str, &str) {
    path.rsplit_once('/').unwrap_or(("", path))
}

/// Mock storage for testing.
///
/// Stores file contents in memory. Directories exist implicitly for every
/// stored file and explicitly via [`MockStorage::with_dir`]. Use the builder
/// methods to configure the mock with test data.
///
/// # Example
///
/// ```ignore
/// use sitenav_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_file("features/split.md", "# Split Keyboards\n");
///
/// let names = storage.list_dir("features").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    contents: RwLock<BTreeMap<String, String>>,
    dirs: RwLock<BTreeSet<String>>,
    /// Paths whose reads fail, simulating unreadable entries.
    unreadable: RwLock<BTreeSet<String>>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with content.
    ///
    /// Ancestor directories are created implicitly.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_file(self, path: impl Into<String>, content: impl Into<String>) -> Self {
        let path = path.into();
        self.register_ancestors(&path);
        self.contents.write().unwrap().insert(path, content.into());
        self
    }

    /// Add an empty directory.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_dir(self, dir: impl Into<String>) -> Self {
        self.dirs.write().unwrap().insert(dir.into());
        self
    }

    /// Add a file whose reads fail with a permission error.
    ///
    /// The file still appears in directory listings, so consumers can
    /// exercise their skip-on-unreadable handling.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_unreadable_file(self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.register_ancestors(&path);
        self.unreadable.write().unwrap().insert(path.clone());
        self.contents.write().unwrap().insert(path, String::new());
        self
    }

    /// Register all ancestor directories of a file path.
    fn register_ancestors(&self, path: &str) {
        let mut dirs = self.dirs.write().unwrap();
        dirs.insert(String::new());
        let mut rest = path;
        while let Some((dir, _)) = rest.rsplit_once('/') {
            dirs.insert(dir.to_owned());
            rest = dir;
        }
    }
}

impl Storage for MockStorage {
    fn list_dir(&self, dir: &str) -> Result<Vec<String>, StorageError> {
        if !self.is_dir(dir) {
            return Err(StorageError::not_found(dir).with_backend(BACKEND));
        }

        let contents = self.contents.read().unwrap();
        let names = contents
            .keys()
            .filter_map(|path| {
                let (d, name) = split_path(path);
                (d == dir && !name.starts_with('.') && !name.starts_with('_'))
                    .then(|| name.to_owned())
            })
            .collect();
        // BTreeMap iteration keeps names lexicographically sorted
        Ok(names)
    }

    fn read(&self, path: &str) -> Result<String, StorageError> {
        if self.unreadable.read().unwrap().contains(path) {
            return Err(StorageError::new(StorageErrorKind::PermissionDenied)
                .with_path(path)
                .with_backend(BACKEND));
        }
        self.contents
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::not_found(path).with_backend(BACKEND))
    }

    fn is_dir(&self, dir: &str) -> bool {
        self.dirs.read().unwrap().contains(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_mock_has_no_root() {
        let storage = MockStorage::new();

        assert!(!storage.is_dir(""));
        assert!(storage.list_dir("").is_err());
    }

    #[test]
    fn test_with_file_creates_ancestors() {
        let storage = MockStorage::new().with_file("features/nested/page.md", "# Page");

        assert!(storage.is_dir(""));
        assert!(storage.is_dir("features"));
        assert!(storage.is_dir("features/nested"));
    }

    #[test]
    fn test_list_dir_direct_children_only() {
        let storage = MockStorage::new()
            .with_file("top.md", "# Top")
            .with_file("features/split.md", "# Split");

        assert_eq!(storage.list_dir("").unwrap(), vec!["top.md"]);
        assert_eq!(storage.list_dir("features").unwrap(), vec!["split.md"]);
    }

    #[test]
    fn test_list_dir_sorted() {
        let storage = MockStorage::new()
            .with_file("b.md", "b")
            .with_file("a.md", "a");

        assert_eq!(storage.list_dir("").unwrap(), vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_list_dir_skips_hidden_and_underscore() {
        let storage = MockStorage::new()
            .with_file(".hidden.md", "h")
            .with_file("_draft.md", "d")
            .with_file("page.md", "p");

        assert_eq!(storage.list_dir("").unwrap(), vec!["page.md"]);
    }

    #[test]
    fn test_with_dir_empty_directory() {
        let storage = MockStorage::new().with_dir("empty");

        assert!(storage.is_dir("empty"));
        assert!(storage.list_dir("empty").unwrap().is_empty());
    }

    #[test]
    fn test_read_existing() {
        let storage = MockStorage::new().with_file("guide.md", "# Guide");

        assert_eq!(storage.read("guide.md").unwrap(), "# Guide");
    }

    #[test]
    fn test_read_missing() {
        let storage = MockStorage::new();

        let err = storage.read("missing.md").unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::NotFound);
    }

    #[test]
    fn test_unreadable_file_listed_but_not_readable() {
        let storage = MockStorage::new()
            .with_file("ok.md", "ok")
            .with_unreadable_file("broken.md");

        assert_eq!(storage.list_dir("").unwrap(), vec!["broken.md", "ok.md"]);
        let err = storage.read("broken.md").unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::PermissionDenied);
    }
}
