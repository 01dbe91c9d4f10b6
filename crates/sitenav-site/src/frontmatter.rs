//! YAML front-matter parsing for content files.
//!
//! Content files may begin with a `---`-delimited YAML block carrying the
//! page title and an explicit ordering hint:
//!
//! ```markdown
//! ---
//! title: Split Keyboards
//! order: 2
//! ---
//!
//! Body text.
//! ```
//!
//! Files without a block parse to the default (both fields unset). Unknown
//! keys are ignored so content authored for richer pipelines still scans.

use serde::Deserialize;

/// Parsed front-matter fields.
///
/// All fields are optional. When a field is `None`, the scanner falls back
/// to derived values (H1 title, filename ordering).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    /// Explicit page title (overrides H1 and filename derivation).
    #[serde(default)]
    pub title: Option<String>,
    /// Explicit ordering hint. Entries without one sort after hinted entries.
    #[serde(default)]
    pub order: Option<i64>,
}

/// Error type for front-matter operations.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    /// YAML parsing error.
    #[error("Invalid front matter: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Opening delimiter without a closing one.
    #[error("Unterminated front matter block")]
    Unterminated,
}

impl FrontMatter {
    /// Parse the front-matter block of a content file.
    ///
    /// Returns the parsed fields and the remaining body. A file without a
    /// leading `---` line has no block and yields the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the block is unterminated or its YAML is
    /// malformed.
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let Some(rest) = strip_delimiter(content) else {
            return Ok((Self::default(), content));
        };

        let Some((block, body)) = split_block(rest) else {
            return Err(FrontMatterError::Unterminated);
        };

        let trimmed = block.trim();
        if trimmed.is_empty() {
            return Ok((Self::default(), body));
        }

        let matter = serde_yaml::from_str(trimmed)?;
        Ok((matter, body))
    }
}

/// Strip the opening `---` line, returning the content after it.
fn strip_delimiter(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---")?;
    // The delimiter must occupy the whole first line
    match rest.strip_prefix('\n') {
        Some(r) => Some(r),
        None => rest.strip_prefix("\r\n"),
    }
}

/// Split the block at the closing `---` line.
fn split_block(rest: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    // A final "---" without a trailing newline ends the block too
    (rest[offset..].trim_end() == "---").then(|| (&rest[..offset], ""))
}
