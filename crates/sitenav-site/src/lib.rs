//! Sidebar resolution and link validation for sitenav.
//!
//! Turns a declarative sidebar definition — explicit items, autogenerated
//! directory groups, and external links — into a validated, ordered
//! navigation tree with stable output routes.
//!
//! # Architecture
//!
//! Resolution is a pure function of the site configuration and a filesystem
//! snapshot, evaluated in dependency order:
//!
//! 1. [`RouteBuilder`] derives output routes from the base path,
//!    trailing-slash policy, and build format.
//! 2. [`DirectoryScanner`] lists a content directory through a
//!    [`Storage`](sitenav_storage::Storage) backend and produces ordered
//!    [`ContentEntry`] values.
//! 3. [`SidebarResolver`] expands the sidebar definition depth-first, then
//!    validates every internal link against the collected route set.
//!
//! Each call to [`resolve`] builds a fresh [`ResolvedNav`]; nothing is
//! cached or mutated between passes, so repeated invocations (e.g., driven
//! by an external watch loop) are independent.

mod frontmatter;
mod nav;
mod resolver;
mod routes;
mod scanner;
mod slug;

use sitenav_config::{SidebarNode, SiteConfig};
use sitenav_storage::Storage;

pub use frontmatter::{FrontMatter, FrontMatterError};
pub use nav::{NavNode, ResolvedNav};
pub use resolver::{ResolveError, SidebarResolver};
pub use routes::RouteBuilder;
pub use scanner::{ContentEntry, DirScan, DirectoryScanner, ScanError};
pub use slug::{slugify, title_from_filename};

/// Resolve a sidebar definition against a content storage.
///
/// Convenience entry point wiring [`RouteBuilder`], [`DirectoryScanner`],
/// and [`SidebarResolver`] together for one resolution pass.
///
/// # Errors
///
/// Returns [`ResolveError`] on the first fatal error; no partial tree is
/// returned.
pub fn resolve(
    site: &SiteConfig,
    sidebar: &[SidebarNode],
    storage: &dyn Storage,
) -> Result<ResolvedNav, ResolveError> {
    let routes = RouteBuilder::new(site);
    let scanner = DirectoryScanner::new(storage, routes.clone());
    SidebarResolver::new(scanner, routes).resolve(sidebar)
}
