//! Content storage abstraction for sitenav.
//!
//! Provides the [`Storage`] trait for read-only access to a content root,
//! [`FsStorage`] for the local filesystem, and [`MockStorage`] (behind the
//! `mock` feature) for tests.

mod fs;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockStorage;
pub use storage::{Storage, StorageError, StorageErrorKind};
