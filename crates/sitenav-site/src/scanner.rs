//! Directory scanning for autogenerated navigation groups.
//!
//! Provides [`DirectoryScanner`] for turning a content directory into an
//! ordered sequence of [`ContentEntry`] values. Entries are ephemeral:
//! recomputed on every scan, never cached across passes.
//!
//! # Ordering
//!
//! Entries with a front-matter `order` hint come first, ascending; entries
//! without a hint follow in lexicographic filename order. Ties break by
//! filename, so repeated scans of unchanged input are identical.
//!
//! # Title Derivation
//!
//! Front-matter `title` wins; otherwise the first H1 heading; otherwise a
//! Title Case rendering of the kebab-case filename.

use regex::Regex;
use sitenav_storage::{Storage, StorageError, StorageErrorKind};

use crate::frontmatter::FrontMatter;
use crate::routes::RouteBuilder;
use crate::slug::{slugify, stem, title_from_filename};

/// A content page discovered by a directory scan.
///
/// Owned by the resolution pass that created it; rebuilt on every scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentEntry {
    /// Display title.
    pub title: String,
    /// Source file path relative to the content root.
    pub source_path: String,
    /// Final output route, base path and suffix included.
    pub output_route: String,
    /// Explicit ordering hint from front matter, if any.
    pub order: Option<i64>,
}

/// Result of scanning one directory.
#[derive(Debug, Default)]
pub struct DirScan {
    /// Ordered content entries.
    pub entries: Vec<ContentEntry>,
    /// Non-fatal per-entry issues (skipped unreadable files).
    pub warnings: Vec<String>,
}

/// Error returned when a directory scan fails.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Referenced directory does not exist under the content root.
    #[error("Content directory not found: {0}")]
    DirectoryNotFound(String),
    /// Directory exists but contains no content entries.
    ///
    /// An empty navigation group indicates misconfiguration, so this is
    /// fatal rather than silently producing an empty group.
    #[error("No content entries found in directory: {0}")]
    EmptyAutogenGroup(String),
    /// Underlying storage failure.
    #[error("{0}")]
    Storage(#[from] StorageError),
}

/// Scans content directories into ordered entries.
///
/// Holds only borrowed storage and a cloned [`RouteBuilder`]; each `scan`
/// call is independent and reads the filesystem snapshot as-is.
pub struct DirectoryScanner<'a> {
    storage: &'a dyn Storage,
    routes: RouteBuilder,
    h1_regex: Regex,
}

impl<'a> DirectoryScanner<'a> {
    /// Create a new scanner over the given storage.
    ///
    /// # Panics
    ///
    /// Panics if the internal regex for H1 heading extraction fails to
    /// compile. This should never happen as the regex is a compile-time
    /// constant.
    #[must_use]
    pub fn new(storage: &'a dyn Storage, routes: RouteBuilder) -> Self {
        Self {
            storage,
            routes,
            h1_regex: Regex::new(r"(?m)^#\s+(.+)$").unwrap(),
        }
    }

    /// Scan a directory into ordered content entries.
    ///
    /// # Arguments
    ///
    /// * `relative_dir` - Directory relative to the content root, `""` for
    ///   the root itself.
    ///
    /// # Errors
    ///
    /// - [`ScanError::DirectoryNotFound`] if the directory does not exist.
    /// - [`ScanError::EmptyAutogenGroup`] if no entries are found (including
    ///   when every file had to be skipped).
    /// - [`ScanError::Storage`] on other listing failures.
    pub fn scan(&self, relative_dir: &str) -> Result<DirScan, ScanError> {
        if !self.storage.is_dir(relative_dir) {
            return Err(ScanError::DirectoryNotFound(relative_dir.to_owned()));
        }

        let names = self.storage.list_dir(relative_dir).map_err(|e| {
            if e.kind == StorageErrorKind::NotFound {
                ScanError::DirectoryNotFound(relative_dir.to_owned())
            } else {
                ScanError::Storage(e)
            }
        })?;

        let mut scan = DirScan::default();
        // (sort key, entry) pairs; the filename tiebreak keeps output stable
        let mut keyed: Vec<(i64, String, ContentEntry)> = Vec::with_capacity(names.len());

        for name in names {
            let source_path = if relative_dir.is_empty() {
                name.clone()
            } else {
                format!("{relative_dir}/{name}")
            };

            let content = match self.storage.read(&source_path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(path = %source_path, error = %e, "Skipping unreadable entry");
                    scan.warnings
                        .push(format!("Skipped unreadable entry {source_path}: {e}"));
                    continue;
                }
            };

            let (matter, body) = match FrontMatter::parse(&content) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!(path = %source_path, error = %e, "Skipping entry with invalid front matter");
                    scan.warnings
                        .push(format!("Skipped entry {source_path}: {e}"));
                    continue;
                }
            };

            let title = matter
                .title
                .clone()
                .or_else(|| self.extract_h1(body))
                .unwrap_or_else(|| title_from_filename(&name));

            let output_route = self.routes.route(relative_dir, &slugify(stem(&name)));

            keyed.push((
                matter.order.unwrap_or(i64::MAX),
                name,
                ContentEntry {
                    title,
                    source_path,
                    output_route,
                    order: matter.order,
                },
            ));
        }

        if keyed.is_empty() {
            return Err(ScanError::EmptyAutogenGroup(relative_dir.to_owned()));
        }

        keyed.sort_by(|(a_order, a_name, _), (b_order, b_name, _)| {
            a_order.cmp(b_order).then_with(|| a_name.cmp(b_name))
        });
        scan.entries = keyed.into_iter().map(|(_, _, entry)| entry).collect();

        Ok(scan)
    }

    /// Extract the first H1 heading from markdown content.
    fn extract_h1(&self, content: &str) -> Option<String> {
        self.h1_regex
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_owned())
    }
}
