// src/slugify.rs
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Returned whenever the input reduces to nothing usable.
pub const FALLBACK_SLUG: &str = "event-slug";

/// Inclusive length bounds for a valid slug.
pub const MIN_SLUG_LEN: usize = 3;
pub const MAX_SLUG_LEN: usize = 100;

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-z0-9-]+$").expect("slug pattern compiles"));

/// Converts an arbitrary event name into a URL path segment.
///
/// Diacritics are stripped via NFD decomposition; every other character
/// outside `[a-z0-9]` and whitespace is dropped, not transliterated. Runs of
/// whitespace and hyphens collapse to a single hyphen, the result is clamped
/// to [`MAX_SLUG_LEN`] and padded up to [`MIN_SLUG_LEN`], and inputs that
/// reduce to nothing yield [`FALLBACK_SLUG`].
///
/// The output always satisfies [`is_valid_slug`]. Uniqueness is not addressed
/// here; collisions are for the caller's persistence layer to detect.
#[must_use]
pub fn generate_slug(input: &str) -> String {
    let lowered = input.trim().to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    for c in lowered.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_whitespace() || c == '-' {
            if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }

    // All remaining characters are ASCII, so byte and char counts coincide.
    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    match slug.len() {
        0 => return FALLBACK_SLUG.to_owned(),
        1 => slug.push_str("-01"),
        2 => slug.push_str("-1"),
        _ => {}
    }

    if is_valid_slug(&slug) {
        slug
    } else {
        FALLBACK_SLUG.to_owned()
    }
}

/// Returns `true` iff `slug` matches `^[a-z0-9-]+$` with length in
/// [[`MIN_SLUG_LEN`], [`MAX_SLUG_LEN`]].
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    (MIN_SLUG_LEN..=MAX_SLUG_LEN).contains(&slug.len()) && SLUG_PATTERN.is_match(slug)
}
