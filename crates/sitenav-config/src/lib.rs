//! Configuration management for sitenav.
//!
//! Parses `sitenav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! Loading is a pure transformation of the file contents: the raw TOML
//! sections are deserialized first, then resolved into validated values
//! ([`SiteConfig`], [`SidebarNode`]). All validation errors are fatal and
//! reported once, before any resolution work begins.

mod sidebar;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub use sidebar::{RawSidebarNode, SidebarNode};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override site base path.
    pub base_path: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sitenav.toml";

/// Trailing-slash policy for generated routes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrailingSlash {
    /// Every route ends with a trailing slash.
    Always,
    /// No route ends with a trailing slash (except the site root).
    Never,
    /// Routes keep the build-format default.
    #[default]
    Ignore,
}

impl FromStr for TrailingSlash {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            "ignore" => Ok(Self::Ignore),
            other => Err(other.to_owned()),
        }
    }
}

/// Output format of the external site builder.
///
/// Determines the shape of generated routes: `File` produces
/// `/guide.html`-style routes, `Directory` produces `/guide/`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuildFormat {
    /// One HTML file per page (`/guide.html`).
    File,
    /// One directory with an index per page (`/guide/`).
    #[default]
    Directory,
}

impl FromStr for BuildFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(Self::File),
            "directory" => Ok(Self::Directory),
            other => Err(other.to_owned()),
        }
    }
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site metadata as parsed from TOML (enums are raw strings).
    site: SiteConfigRaw,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Social links displayed by the external renderer.
    #[serde(rename = "social")]
    pub social_links: Vec<SocialLink>,
    /// Raw sidebar node descriptors.
    sidebar: Vec<RawSidebarNode>,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved sidebar definition (set after loading).
    #[serde(skip)]
    pub sidebar_resolved: Vec<SidebarNode>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site section as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    title: Option<String>,
    base_path: Option<String>,
    trailing_slash: Option<String>,
    build_format: Option<String>,
}

/// Resolved site configuration.
///
/// Immutable after load; passed by value through the resolution pipeline so
/// multiple independent resolutions never share ambient state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Path prefix under which the site is served. Starts with `/`,
    /// no trailing slash except when it is exactly `/`.
    pub base_path: String,
    /// Trailing-slash policy for generated routes.
    pub trailing_slash: TrailingSlash,
    /// Output format of the external site builder.
    pub build_format: BuildFormat,
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for content files.
    pub source_dir: PathBuf,
}

/// Social link displayed in the site header.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SocialLink {
    /// Display label.
    pub label: String,
    /// Icon identifier understood by the renderer (e.g., "github").
    pub icon: String,
    /// Absolute URL of the linked profile.
    pub href: String,
}

impl SocialLink {
    /// Validate that the link is well-formed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the label is empty or the href
    /// is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.label, "social.label")?;
        require_http_url(&self.href, "social.href")?;
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Base path missing its leading slash.
    #[error("Invalid base path {0:?}: must start with '/'")]
    InvalidBasePath(String),
    /// Enum-valued field set to an unrecognized value.
    #[error("Unknown value {value:?} for {field}")]
    UnknownEnumValue {
        /// Config field path (e.g., "`site.trailing_slash`").
        field: String,
        /// The rejected value.
        value: String,
    },
    /// Sidebar node descriptor with more than one of link/items/autogenerate.
    #[error("Sidebar node {label:?} sets more than one of link, items, autogenerate")]
    AmbiguousNode {
        /// Label of the offending node.
        label: String,
    },
    /// Sidebar node descriptor with none of link/items/autogenerate.
    #[error("Sidebar node {label:?} sets none of link, items, autogenerate")]
    EmptyNode {
        /// Label of the offending node.
        label: String,
    },
    /// Sidebar node with an empty label.
    #[error("Sidebar node with empty label")]
    EmptyLabel,
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sitenav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or any resolved value fails validation.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings)?;
        }

        Ok(config)
    }

    /// Parse configuration from a TOML string and resolve it against `base`.
    ///
    /// Used by `load` and directly by tests.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or any resolution/validation step fails.
    pub fn from_toml(content: &str, base: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.resolve(base)?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) -> Result<(), ConfigError> {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(base_path) = &settings.base_path {
            self.site_resolved.base_path = resolve_base_path(base_path)?;
        }
        Ok(())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfigRaw::default(),
            docs: DocsConfigRaw::default(),
            social_links: Vec::new(),
            sidebar: Vec::new(),
            site_resolved: SiteConfig {
                title: "Documentation".to_owned(),
                base_path: "/".to_owned(),
                trailing_slash: TrailingSlash::default(),
                build_format: BuildFormat::default(),
            },
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
            },
            sidebar_resolved: Vec::new(),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::from_toml(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Resolve raw sections into validated values.
    fn resolve(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        self.site_resolved = resolve_site(&self.site)?;
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(self.docs.source_dir.as_deref().unwrap_or("docs")),
        };

        for link in &self.social_links {
            link.validate()?;
        }

        self.sidebar_resolved = self
            .sidebar
            .iter()
            .map(RawSidebarNode::resolve)
            .collect::<Result<_, _>>()?;

        Ok(())
    }
}

/// Resolve the raw site section into a validated [`SiteConfig`].
fn resolve_site(raw: &SiteConfigRaw) -> Result<SiteConfig, ConfigError> {
    let trailing_slash = match raw.trailing_slash.as_deref() {
        None => TrailingSlash::default(),
        Some(value) => {
            value
                .parse()
                .map_err(|value| ConfigError::UnknownEnumValue {
                    field: "site.trailing_slash".to_owned(),
                    value,
                })?
        }
    };

    let build_format = match raw.build_format.as_deref() {
        None => BuildFormat::default(),
        Some(value) => {
            value
                .parse()
                .map_err(|value| ConfigError::UnknownEnumValue {
                    field: "site.build_format".to_owned(),
                    value,
                })?
        }
    };

    Ok(SiteConfig {
        title: raw.title.clone().unwrap_or_else(|| "Documentation".to_owned()),
        base_path: resolve_base_path(raw.base_path.as_deref().unwrap_or("/"))?,
        trailing_slash,
        build_format,
    })
}

/// Validate and normalize a base path.
///
/// Must start with `/`. A trailing slash on a non-root path is stripped so
/// the stored value satisfies the no-trailing-slash invariant.
fn resolve_base_path(value: &str) -> Result<String, ConfigError> {
    if !value.starts_with('/') {
        return Err(ConfigError::InvalidBasePath(value.to_owned()));
    }
    if value == "/" {
        return Ok(value.to_owned());
    }
    Ok(value.trim_end_matches('/').to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.site_resolved.base_path, "/");
        assert_eq!(config.site_resolved.trailing_slash, TrailingSlash::Ignore);
        assert_eq!(config.site_resolved.build_format, BuildFormat::Directory);
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
        assert!(config.sidebar_resolved.is_empty());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::from_toml("", Path::new("/project")).unwrap();
        assert_eq!(config.site_resolved.title, "Documentation");
        assert_eq!(config.site_resolved.base_path, "/");
    }

    #[test]
    fn test_parse_site_section() {
        let toml = r#"
[site]
title = "rumcake"
base_path = "/rumcake"
trailing_slash = "always"
build_format = "directory"
"#;
        let config = Config::from_toml(toml, Path::new("/project")).unwrap();
        assert_eq!(config.site_resolved.title, "rumcake");
        assert_eq!(config.site_resolved.base_path, "/rumcake");
        assert_eq!(config.site_resolved.trailing_slash, TrailingSlash::Always);
        assert_eq!(config.site_resolved.build_format, BuildFormat::Directory);
    }

    #[test]
    fn test_base_path_missing_leading_slash() {
        let toml = r#"
[site]
base_path = "rumcake"
"#;
        let err = Config::from_toml(toml, Path::new("/project")).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidBasePath(ref v) if v == "rumcake"),
            "Expected InvalidBasePath, got {err:?}"
        );
    }

    #[test]
    fn test_base_path_trailing_slash_stripped() {
        let toml = r#"
[site]
base_path = "/rumcake/"
"#;
        let config = Config::from_toml(toml, Path::new("/project")).unwrap();
        assert_eq!(config.site_resolved.base_path, "/rumcake");
    }

    #[test]
    fn test_base_path_root_kept() {
        let toml = r#"
[site]
base_path = "/"
"#;
        let config = Config::from_toml(toml, Path::new("/project")).unwrap();
        assert_eq!(config.site_resolved.base_path, "/");
    }

    #[test]
    fn test_unknown_trailing_slash_value() {
        let toml = r#"
[site]
trailing_slash = "sometimes"
"#;
        let err = Config::from_toml(toml, Path::new("/project")).unwrap_err();
        match err {
            ConfigError::UnknownEnumValue { field, value } => {
                assert_eq!(field, "site.trailing_slash");
                assert_eq!(value, "sometimes");
            }
            other => panic!("Expected UnknownEnumValue, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_build_format_value() {
        let toml = r#"
[site]
build_format = "zip"
"#;
        let err = Config::from_toml(toml, Path::new("/project")).unwrap_err();
        match err {
            ConfigError::UnknownEnumValue { field, value } => {
                assert_eq!(field, "site.build_format");
                assert_eq!(value, "zip");
            }
            other => panic!("Expected UnknownEnumValue, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_source_dir() {
        let toml = r#"
[docs]
source_dir = "content"
"#;
        let config = Config::from_toml(toml, Path::new("/project")).unwrap();
        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/project/content")
        );
    }

    #[test]
    fn test_parse_social_links() {
        let toml = r#"
[[social]]
label = "GitHub"
icon = "github"
href = "https://github.com/example/project"
"#;
        let config = Config::from_toml(toml, Path::new("/project")).unwrap();
        assert_eq!(config.social_links.len(), 1);
        assert_eq!(config.social_links[0].label, "GitHub");
        assert_eq!(config.social_links[0].icon, "github");
    }

    #[test]
    fn test_social_link_rejects_non_http_href() {
        let toml = r#"
[[social]]
label = "GitHub"
icon = "github"
href = "ftp://example.com"
"#;
        let err = Config::from_toml(toml, Path::new("/project")).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("social.href"));
    }

    #[test]
    fn test_social_link_rejects_empty_label() {
        let toml = r#"
[[social]]
label = ""
icon = "github"
href = "https://example.com"
"#;
        let err = Config::from_toml(toml, Path::new("/project")).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("social.label"));
    }

    #[test]
    fn test_apply_cli_settings_source_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/custom/docs")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides).unwrap();

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/custom/docs")
        );
    }

    #[test]
    fn test_apply_cli_settings_base_path() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            base_path: Some("/docs".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides).unwrap();

        assert_eq!(config.site_resolved.base_path, "/docs");
    }

    #[test]
    fn test_apply_cli_settings_invalid_base_path() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            base_path: Some("docs".to_owned()),
            ..Default::default()
        };

        let err = config.apply_cli_settings(&overrides).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBasePath(_)));
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.apply_cli_settings(&CliSettings::default()).unwrap();
        assert_eq!(config.site_resolved.base_path, "/");
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/does/not/exist/sitenav.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_sets_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitenav.toml");
        std::fs::write(&path, "[site]\ntitle = \"Test\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.site_resolved.title, "Test");
        assert_eq!(config.docs_resolved.source_dir, dir.path().join("docs"));
    }

    #[test]
    fn test_trailing_slash_from_str() {
        assert_eq!("always".parse(), Ok(TrailingSlash::Always));
        assert_eq!("never".parse(), Ok(TrailingSlash::Never));
        assert_eq!("ignore".parse(), Ok(TrailingSlash::Ignore));
        assert!("Always".parse::<TrailingSlash>().is_err());
    }

    #[test]
    fn test_build_format_from_str() {
        assert_eq!("file".parse(), Ok(BuildFormat::File));
        assert_eq!("directory".parse(), Ok(BuildFormat::Directory));
        assert!("dir".parse::<BuildFormat>().is_err());
    }
}
