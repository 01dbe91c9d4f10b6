//! Output-route construction.
//!
//! Routes are derived from the site base path, the build format, and the
//! trailing-slash policy:
//!
//! - `Directory` format: `/base/dir/slug` with a trailing slash by default;
//!   the `never` policy strips it, `always` and `ignore` keep it.
//! - `File` format: `/base/dir/slug.html`; the trailing-slash policy does
//!   not apply to file routes (there is nothing to normalize), only to the
//!   site root.
//!
//! Internal link hrefs are normalized through the same rules so that user
//! links and scanner-produced routes compare equal under any one policy.

use sitenav_config::{BuildFormat, SiteConfig, TrailingSlash};

/// Builds output routes and normalizes internal hrefs.
///
/// Cheap to clone; carries only the route-shaping parts of the site config.
#[derive(Clone, Debug)]
pub struct RouteBuilder {
    base_path: String,
    trailing_slash: TrailingSlash,
    build_format: BuildFormat,
}

impl RouteBuilder {
    /// Create a route builder from the site configuration.
    #[must_use]
    pub fn new(site: &SiteConfig) -> Self {
        Self {
            base_path: site.base_path.clone(),
            trailing_slash: site.trailing_slash,
            build_format: site.build_format,
        }
    }

    /// True if the href points outside the site (absolute URL or mail link).
    #[must_use]
    pub fn is_external(href: &str) -> bool {
        href.contains("://") || href.starts_with("mailto:")
    }

    /// Route of the site root.
    #[must_use]
    pub fn root(&self) -> String {
        self.route("", "")
    }

    /// Build the output route for a content entry.
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory relative to the content root, `""` for the root.
    /// * `slug` - Page slug; empty for the directory's own route (index).
    #[must_use]
    pub fn route(&self, dir: &str, slug: &str) -> String {
        let path = self.join(&[dir, slug]);
        if path == "/" || path == self.base_path {
            return self.finish_dir(path);
        }
        match self.build_format {
            BuildFormat::Directory => self.finish_dir(path),
            BuildFormat::File => format!("{path}.html"),
        }
    }

    /// Normalize an internal href for comparison against output routes.
    ///
    /// The href is resolved against the base path, then put into the same
    /// form [`RouteBuilder::route`] produces: directory-format routes gain
    /// or lose their trailing slash per policy; file-format routes without
    /// an extension gain `.html`.
    #[must_use]
    pub fn normalize_href(&self, href: &str) -> String {
        let path = self.join(&[href]);
        if path == "/" || path == self.base_path {
            return self.finish_dir(path);
        }
        match self.build_format {
            BuildFormat::Directory => self.finish_dir(path),
            BuildFormat::File => {
                let last = path.rsplit('/').next().unwrap_or("");
                if last.contains('.') {
                    path
                } else {
                    format!("{path}.html")
                }
            }
        }
    }

    /// Join segments onto the base path, skipping empty ones.
    fn join(&self, segments: &[&str]) -> String {
        let mut path = self.base_path.trim_end_matches('/').to_owned();
        for segment in segments {
            for part in segment.split('/').filter(|p| !p.is_empty()) {
                path.push('/');
                path.push_str(part);
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        path
    }

    /// Apply the trailing-slash policy to a directory-style route.
    fn finish_dir(&self, mut path: String) -> String {
        match self.trailing_slash {
            TrailingSlash::Never => {
                while path.len() > 1 && path.ends_with('/') {
                    path.pop();
                }
            }
            TrailingSlash::Always | TrailingSlash::Ignore => {
                if !path.ends_with('/') {
                    path.push('/');
                }
            }
        }
        path
    }
}
