//! Sidebar definition types.
//!
//! The TOML sidebar section is a sequence of node descriptors, each carrying
//! a label and exactly one of `link`, `items`, or `autogenerate`. Descriptors
//! are deserialized into [`RawSidebarNode`] and resolved into the
//! [`SidebarNode`] sum type so that downstream code matches exhaustively
//! instead of probing optional fields.

use serde::Deserialize;

use crate::ConfigError;

/// Sidebar node descriptor as parsed from TOML.
///
/// Exactly one of `link`, `items`, `autogenerate` must be set;
/// [`RawSidebarNode::resolve`] enforces this.
#[derive(Clone, Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawSidebarNode {
    /// Display label.
    pub label: String,
    /// Link target (absolute URL or site-relative path).
    pub link: Option<String>,
    /// Explicit child descriptors.
    pub items: Option<Vec<RawSidebarNode>>,
    /// Content directory to expand into children, relative to the source dir.
    pub autogenerate: Option<String>,
}

/// Sidebar navigation node.
///
/// Tree structure: children are owned by their parent, so cycles cannot be
/// expressed. Declaration order is the displayed navigation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidebarNode {
    /// Explicit navigation item.
    Link {
        /// Display label.
        label: String,
        /// Absolute URL or site-relative path.
        href: String,
    },
    /// Group with explicitly declared children.
    Group {
        /// Display label.
        label: String,
        /// Child nodes in declaration order.
        children: Vec<SidebarNode>,
    },
    /// Group whose children are derived from scanning a content directory.
    Autogenerate {
        /// Display label.
        label: String,
        /// Directory relative to the content root.
        directory: String,
    },
}

impl SidebarNode {
    /// Display label of this node.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Link { label, .. } | Self::Group { label, .. } | Self::Autogenerate { label, .. } => {
                label
            }
        }
    }
}

impl RawSidebarNode {
    /// Resolve a descriptor into a [`SidebarNode`].
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyLabel`] if the label is empty.
    /// - [`ConfigError::AmbiguousNode`] if more than one of
    ///   `link`/`items`/`autogenerate` is set.
    /// - [`ConfigError::EmptyNode`] if none is set.
    pub fn resolve(&self) -> Result<SidebarNode, ConfigError> {
        if self.label.is_empty() {
            return Err(ConfigError::EmptyLabel);
        }

        let variants =
            usize::from(self.link.is_some()) + usize::from(self.items.is_some())
                + usize::from(self.autogenerate.is_some());
        if variants > 1 {
            return Err(ConfigError::AmbiguousNode {
                label: self.label.clone(),
            });
        }

        if let Some(href) = &self.link {
            return Ok(SidebarNode::Link {
                label: self.label.clone(),
                href: href.clone(),
            });
        }
        if let Some(items) = &self.items {
            let children = items
                .iter()
                .map(Self::resolve)
                .collect::<Result<_, _>>()?;
            return Ok(SidebarNode::Group {
                label: self.label.clone(),
                children,
            });
        }
        if let Some(directory) = &self.autogenerate {
            return Ok(SidebarNode::Autogenerate {
                label: self.label.clone(),
                directory: directory.clone(),
            });
        }

        Err(ConfigError::EmptyNode {
            label: self.label.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(label: &str) -> RawSidebarNode {
        RawSidebarNode {
            label: label.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_link() {
        let raw = RawSidebarNode {
            link: Some("/".to_owned()),
            ..node("Introduction")
        };

        let resolved = raw.resolve().unwrap();

        assert_eq!(
            resolved,
            SidebarNode::Link {
                label: "Introduction".to_owned(),
                href: "/".to_owned(),
            }
        );
    }

    #[test]
    fn test_resolve_autogenerate() {
        let raw = RawSidebarNode {
            autogenerate: Some("getting-started".to_owned()),
            ..node("Getting Started")
        };

        let resolved = raw.resolve().unwrap();

        assert_eq!(
            resolved,
            SidebarNode::Autogenerate {
                label: "Getting Started".to_owned(),
                directory: "getting-started".to_owned(),
            }
        );
    }

    #[test]
    fn test_resolve_group_recurses() {
        let raw = RawSidebarNode {
            items: Some(vec![RawSidebarNode {
                link: Some("/intro/".to_owned()),
                ..node("Intro")
            }]),
            ..node("Information")
        };

        let resolved = raw.resolve().unwrap();

        match resolved {
            SidebarNode::Group { label, children } => {
                assert_eq!(label, "Information");
                assert_eq!(children.len(), 1);
                assert_eq!(children[0].label(), "Intro");
            }
            other => panic!("Expected Group, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_ambiguous_node() {
        let raw = RawSidebarNode {
            link: Some("/".to_owned()),
            autogenerate: Some("features".to_owned()),
            ..node("Features")
        };

        let err = raw.resolve().unwrap_err();

        assert!(
            matches!(err, ConfigError::AmbiguousNode { ref label } if label == "Features"),
            "Expected AmbiguousNode, got {err:?}"
        );
    }

    #[test]
    fn test_resolve_all_three_set() {
        let raw = RawSidebarNode {
            link: Some("/".to_owned()),
            items: Some(Vec::new()),
            autogenerate: Some("features".to_owned()),
            ..node("Everything")
        };

        assert!(matches!(
            raw.resolve().unwrap_err(),
            ConfigError::AmbiguousNode { .. }
        ));
    }

    #[test]
    fn test_resolve_empty_node() {
        let err = node("Nothing").resolve().unwrap_err();

        assert!(
            matches!(err, ConfigError::EmptyNode { ref label } if label == "Nothing"),
            "Expected EmptyNode, got {err:?}"
        );
    }

    #[test]
    fn test_resolve_empty_label() {
        let raw = RawSidebarNode {
            link: Some("/".to_owned()),
            ..node("")
        };

        assert!(matches!(raw.resolve().unwrap_err(), ConfigError::EmptyLabel));
    }

    #[test]
    fn test_resolve_nested_error_propagates() {
        let raw = RawSidebarNode {
            items: Some(vec![node("Broken Child")]),
            ..node("Parent")
        };

        let err = raw.resolve().unwrap_err();

        assert!(
            matches!(err, ConfigError::EmptyNode { ref label } if label == "Broken Child"),
            "Expected nested EmptyNode, got {err:?}"
        );
    }

    #[test]
    fn test_empty_items_resolves_to_empty_group() {
        let raw = RawSidebarNode {
            items: Some(Vec::new()),
            ..node("Empty Group")
        };

        let resolved = raw.resolve().unwrap();

        assert_eq!(
            resolved,
            SidebarNode::Group {
                label: "Empty Group".to_owned(),
                children: Vec::new(),
            }
        );
    }

    #[test]
    fn test_deserialize_sidebar_from_toml() {
        #[derive(Deserialize)]
        struct Doc {
            sidebar: Vec<RawSidebarNode>,
        }

        let toml = r#"
[[sidebar]]
label = "Information"

  [[sidebar.items]]
  label = "Introduction"
  link = "/"

[[sidebar]]
label = "Features"
autogenerate = "features"
"#;
        let doc: Doc = toml::from_str(toml).unwrap();

        assert_eq!(doc.sidebar.len(), 2);
        assert_eq!(doc.sidebar[0].label, "Information");
        assert!(doc.sidebar[0].items.is_some());
        assert_eq!(doc.sidebar[1].autogenerate.as_deref(), Some("features"));
    }
}
