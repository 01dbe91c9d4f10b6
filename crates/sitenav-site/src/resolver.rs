//! Sidebar resolution.
//!
//! Provides [`SidebarResolver`] for expanding a sidebar definition into a
//! [`ResolvedNav`] and validating its internal links.
//!
//! # Two-Phase Resolution
//!
//! A link may reference a route produced by a sibling or later-declared
//! autogenerated group, so resolution runs in two explicit phases:
//!
//! 1. **Expand**: depth-first walk in declaration order. Links pass through,
//!    groups recurse, autogenerated groups invoke the
//!    [`DirectoryScanner`] and splice its entries in scanner order. Every
//!    produced route is collected into the route set.
//! 2. **Validate**: each internal href, normalized against the base path and
//!    trailing-slash policy, must match a collected route (or the site
//!    root, which the external builder always emits).
//!
//! The first fatal error aborts resolution; no partial tree is returned.

use std::collections::BTreeSet;

use sitenav_config::SidebarNode;

use crate::nav::{NavNode, ResolvedNav};
use crate::routes::RouteBuilder;
use crate::scanner::{DirectoryScanner, ScanError};

/// Error returned when sidebar resolution fails.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Internal link whose route is produced by nothing on the site.
    #[error("Dangling link {href:?} in sidebar node {label:?}: no matching output route")]
    DanglingLink {
        /// Label of the offending link node.
        label: String,
        /// The href as declared in the sidebar definition.
        href: String,
    },
    /// Autogenerated group scan failed.
    #[error("{0}")]
    Scan(#[from] ScanError),
}

/// An internal link awaiting second-phase validation.
struct PendingLink {
    label: String,
    /// Href as declared, for error reporting.
    declared: String,
    /// Normalized form compared against the route set.
    normalized: String,
}

/// Resolves a sidebar definition into a validated navigation tree.
///
/// Stateless between calls: each [`SidebarResolver::resolve`] builds a fresh
/// tree from the current filesystem snapshot.
pub struct SidebarResolver<'a> {
    scanner: DirectoryScanner<'a>,
    routes: RouteBuilder,
}

impl<'a> SidebarResolver<'a> {
    /// Create a new resolver.
    #[must_use]
    pub fn new(scanner: DirectoryScanner<'a>, routes: RouteBuilder) -> Self {
        Self { scanner, routes }
    }

    /// Resolve a sidebar definition.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::Scan`] if an autogenerated group's directory is
    ///   missing or empty.
    /// - [`ResolveError::DanglingLink`] if an internal link matches no
    ///   output route once the full tree is expanded.
    pub fn resolve(&self, nodes: &[SidebarNode]) -> Result<ResolvedNav, ResolveError> {
        let mut nav = ResolvedNav::default();
        let mut pending = Vec::new();

        // Phase 1: expand. The site root always exists as a route.
        nav.routes.insert(self.routes.root());
        nav.items = self.expand_nodes(nodes, &mut nav.routes, &mut nav.warnings, &mut pending)?;

        // Phase 2: validate, now that all autogenerated routes are known.
        for link in pending {
            if !nav.routes.contains(&link.normalized) {
                return Err(ResolveError::DanglingLink {
                    label: link.label,
                    href: link.declared,
                });
            }
        }

        tracing::debug!(
            items = nav.items.len(),
            routes = nav.routes.len(),
            warnings = nav.warnings.len(),
            "Sidebar resolved"
        );

        Ok(nav)
    }

    /// Expand a node sequence depth-first, preserving declaration order.
    fn expand_nodes(
        &self,
        nodes: &[SidebarNode],
        routes: &mut BTreeSet<String>,
        warnings: &mut Vec<String>,
        pending: &mut Vec<PendingLink>,
    ) -> Result<Vec<NavNode>, ResolveError> {
        let mut items = Vec::with_capacity(nodes.len());

        for node in nodes {
            match node {
                SidebarNode::Link { label, href } => {
                    if RouteBuilder::is_external(href) {
                        items.push(NavNode::Link {
                            label: label.clone(),
                            href: href.clone(),
                        });
                    } else {
                        let normalized = self.routes.normalize_href(href);
                        pending.push(PendingLink {
                            label: label.clone(),
                            declared: href.clone(),
                            normalized: normalized.clone(),
                        });
                        items.push(NavNode::Link {
                            label: label.clone(),
                            href: normalized,
                        });
                    }
                }
                SidebarNode::Group { label, children } => {
                    let children = self.expand_nodes(children, routes, warnings, pending)?;
                    items.push(NavNode::Group {
                        label: label.clone(),
                        children,
                    });
                }
                SidebarNode::Autogenerate { label, directory } => {
                    let scan = self.scanner.scan(directory)?;
                    warnings.extend(scan.warnings);

                    let children = scan
                        .entries
                        .into_iter()
                        .map(|entry| {
                            routes.insert(entry.output_route.clone());
                            NavNode::Link {
                                label: entry.title,
                                href: entry.output_route,
                            }
                        })
                        .collect();
                    items.push(NavNode::Group {
                        label: label.clone(),
                        children,
                    });
                }
            }
        }

        Ok(items)
    }
}
