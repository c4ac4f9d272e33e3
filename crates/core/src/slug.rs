//! Slug derivation.
//!
//! Slugs are lowercase ASCII, hyphen-separated and safe to drop into a URL
//! path segment. Characters outside `[a-z0-9_-]` are removed rather than
//! transliterated, so `"São Paulo"` becomes `"so-paulo"`.

/// Turn a human-readable name into a URL slug.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for ch in text.trim().to_lowercase().chars() {
        if ch.is_whitespace() || ch == '-' {
            // Collapse runs of separators into one hyphen.
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch);
        }
    }

    while out.ends_with('-') {
        out.pop();
    }

    out
}
