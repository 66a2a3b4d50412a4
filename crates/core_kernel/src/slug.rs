//! Slug derivation
//!
//! Companies and industries are keyed by a slug derived from their display
//! name: lowercase ASCII letters and digits, runs joined by a single `-`.
//! Accented and non-Latin letters are transliterated to ASCII first.

use deunicode::deunicode;

/// Derives the URL-safe key for a display name
///
/// Only whitespace and `-` separate words. Any other character that is not an
/// ASCII letter or digit after transliteration (`_` included) is dropped
/// without splitting the word it sits in.
///
/// # Example
///
/// ```rust
/// use core_kernel::slugify;
///
/// assert_eq!(slugify("Apple Computer"), "apple-computer");
/// assert_eq!(slugify("  IBM, Inc.  "), "ibm-inc");
/// assert_eq!(slugify("AT&T"), "att");
/// assert_eq!(slugify("Café Noir"), "cafe-noir");
/// ```
pub fn slugify(name: &str) -> String {
    deunicode(name)
        .to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() {
                Some(c)
            } else if c.is_whitespace() || c == '-' {
                Some('-')
            } else {
                None
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
