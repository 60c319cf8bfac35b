//! Slug cleanup and matching.
//!
//! Stored slugs are inconsistently formatted upstream (trailing slashes,
//! percent-encoding, mixed case), so lookups try a fixed list of variants of
//! the requested slug.

use std::borrow::Cow;

/// Ordered, de-duplicated variants of a requested slug.
///
/// Empty variants are dropped since they would match everything.
#[must_use]
pub fn slug_variants(raw: &str) -> Vec<String> {
    let clean = strip_trailing_slash(raw.trim());
    let raw_no_slash = strip_trailing_slash(raw);
    let no_leading_space = raw.strip_prefix("%20").unwrap_or(raw).trim();
    let decoded: Option<Cow<'_, str>> = urlencoding::decode(raw).ok();
    let decoded = decoded.as_deref().map(str::trim);

    let mut candidates: Vec<String> = vec![
        clean.to_string(),
        raw.to_string(),
        raw_no_slash.to_string(),
        no_leading_space.to_string(),
    ];
    if let Some(decoded) = decoded {
        candidates.push(decoded.to_string());
        candidates.push(strip_trailing_slash(decoded).to_string());
    }
    candidates.push(clean.to_lowercase());
    candidates.push(raw_no_slash.to_lowercase());
    if let Some(decoded) = decoded {
        candidates.push(strip_trailing_slash(decoded).to_lowercase());
    }

    let mut variants: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !candidate.is_empty() && !variants.contains(&candidate) {
            variants.push(candidate);
        }
    }
    variants
}

/// Find the item whose slug best matches one of the variants.
///
/// Case-insensitive equality is tried across all variants first; only then
/// does bidirectional case-insensitive containment apply. Within each pass the
/// variants are tried in order and the first matching item wins.
pub fn find_slug_match<'a, T, F>(items: &'a [T], slug_of: F, variants: &[String]) -> Option<&'a T>
where
    F: Fn(&T) -> &str,
{
    let stored: Vec<(usize, String)> = items
        .iter()
        .enumerate()
        .map(|(i, item)| (i, slug_of(item).trim().to_lowercase()))
        .filter(|(_, slug)| !slug.is_empty())
        .collect();
    let variants: Vec<String> = variants.iter().map(|v| v.to_lowercase()).collect();

    let exact = variants
        .iter()
        .find_map(|v| stored.iter().find(|(_, slug)| slug == v));
    let matched = exact.or_else(|| {
        variants.iter().find_map(|v| {
            stored
                .iter()
                .find(|(_, slug)| slug.contains(v.as_str()) || v.contains(slug.as_str()))
        })
    });

    matched.map(|(i, _)| &items[*i])
}

fn strip_trailing_slash(s: &str) -> &str {
    s.trim_end_matches('/')
}
