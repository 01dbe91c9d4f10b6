//! Slug and title derivation from filenames.

/// Derive a URL slug from a filename stem.
///
/// The stem is lowercased; spaces and underscores become `-`; characters
/// outside `[a-z0-9-]` are dropped; runs of `-` collapse to one; leading and
/// trailing `-` are trimmed. The stem `index` yields the empty slug (the
/// enclosing directory's own route).
#[must_use]
pub fn slugify(stem: &str) -> String {
    if stem.eq_ignore_ascii_case("index") {
        return String::new();
    }

    let mut slug = String::with_capacity(stem.len());
    let mut last_dash = true; // suppress a leading dash
    for c in stem.chars() {
        let c = c.to_ascii_lowercase();
        match c {
            'a'..='z' | '0'..='9' => {
                slug.push(c);
                last_dash = false;
            }
            '-' | '_' | ' ' => {
                if !last_dash {
                    slug.push('-');
                    last_dash = true;
                }
            }
            _ => {}
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Generate a human-readable title from a filename.
///
/// Strips the `.md` extension, then converts the kebab/snake-case remainder
/// to Title Case.
#[must_use]
pub fn title_from_filename(name: &str) -> String {
    let stem = name.strip_suffix(".md").unwrap_or(name);

    stem.replace(['-', '_'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Filename stem (name with the `.md` extension removed).
#[must_use]
pub(crate) fn stem(name: &str) -> &str {
    name.strip_suffix(".md").unwrap_or(name)
}
