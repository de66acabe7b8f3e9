use unicode_normalization::UnicodeNormalization;

use crate::store::{CareersStore, StoreResult};

const MAX_SLUG_LEN: usize = 200;
const FALLBACK_SLUG: &str = "company";

/// Slugs that would shadow fixed routes under `/api/companies/`.
const RESERVED_SLUGS: &[&str] = &["me"];

/// Folds accents (NFKD, combining marks dropped), lowercases, drops
/// everything but ASCII letters, digits, `_` and `-`, and collapses
/// whitespace/hyphen runs into single hyphens.
pub fn slugify(name: &str) -> String {
    let folded: String = name.nfkd().filter(char::is_ascii).collect();
    let mut slug = String::with_capacity(folded.len());
    let mut pending_hyphen = false;

    for ch in folded.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else if ch == '-' || ch.is_whitespace() {
            pending_hyphen = true;
        }
    }

    clip_slug(&slug, MAX_SLUG_LEN)
}

/// Slugs are ASCII here, so byte truncation never splits a char.
fn clip_slug(slug: &str, max_len: usize) -> String {
    let clipped = &slug[..slug.len().min(max_len)];
    clipped.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// First free slug among `base`, `base-1`, `base-2`, ...
pub async fn unique_slug(store: &dyn CareersStore, name: &str) -> StoreResult<String> {
    let mut base = slugify(name);
    if base.is_empty() {
        base = FALLBACK_SLUG.to_string();
    }

    let mut candidate = base.clone();
    let mut counter = 1;
    while RESERVED_SLUGS.contains(&candidate.as_str()) || store.slug_taken(&candidate).await? {
        let suffix = format!("-{counter}");
        let stem = clip_slug(&base, MAX_SLUG_LEN - suffix.len());
        candidate = format!("{stem}{suffix}");
        counter += 1;
    }
    Ok(candidate)
}
