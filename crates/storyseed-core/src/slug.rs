/// Characters removed from a title after lowercasing and hyphenation.
pub const STRIPPED: &[char] = &['\'', ':', '(', ')'];

/// Derive a slug from a title: lowercase, spaces become hyphens, and the
/// characters in [`STRIPPED`] are dropped.
///
/// Any other punctuation passes through untouched, and two titles may map
/// to the same slug. Neither case occurs in the built-in catalogue.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}
