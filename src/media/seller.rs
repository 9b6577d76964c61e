//! Seller logo inference

use super::MediaConfig;

/// Logo path for a seller, or None when nothing usable is left.
///
/// A value that is already an `assets/` path is returned with forward
/// slashes. Anything else is slugified into `<producers_base>/<slug>.png`.
pub fn seller_logo(seller: Option<&str>, config: &MediaConfig) -> Option<String> {
    let trimmed = seller?.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.starts_with("assets/") {
        return Some(trimmed.replace('\\', "/"));
    }

    let slug = slugify(trimmed);
    if slug.is_empty() {
        return None;
    }

    Some(format!(
        "{}/{}.png",
        config.producers_base.trim_end_matches('/'),
        slug
    ))
}

/// Lowercase, collapse whitespace/underscore runs into `-`, keep only `[a-z0-9-]`
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut in_separator = false;

    for c in input.to_lowercase().chars() {
        if c == '_' || c.is_whitespace() {
            if !in_separator {
                slug.push('-');
                in_separator = true;
            }
            continue;
        }
        in_separator = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
        }
    }

    slug
}
