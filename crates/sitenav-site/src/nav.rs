//! Resolved navigation tree.
//!
//! This is the output contract the external renderer depends on: an ordered
//! sequence of `{label, href}` leaves and `{label, children}` groups.

use std::collections::BTreeSet;

use serde::Serialize;

/// A node of the resolved navigation tree.
///
/// Every autogenerated group has been expanded by the time this type is
/// produced, so only links and explicit groups remain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavNode {
    /// Navigation leaf.
    Link {
        /// Display label.
        label: String,
        /// Validated link target.
        href: String,
    },
    /// Navigation group.
    Group {
        /// Display label.
        label: String,
        /// Child nodes in display order.
        children: Vec<NavNode>,
    },
}

impl NavNode {
    /// Display label of this node.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Link { label, .. } | Self::Group { label, .. } => label,
        }
    }
}

/// Fully resolved navigation, the terminal artifact of a resolution pass.
///
/// Discarded and rebuilt on every pass, never mutated in place.
#[derive(Debug, Default)]
pub struct ResolvedNav {
    /// Resolved tree in declaration order.
    pub items: Vec<NavNode>,
    /// Every known output route, for external link checking.
    pub routes: BTreeSet<String>,
    /// Non-fatal issues collected during resolution.
    pub warnings: Vec<String>,
}
