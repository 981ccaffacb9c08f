//! URL slugs for page paths.

use deunicode::deunicode;

/// Transliterate to ASCII, lowercase, and join alphanumeric runs with `-`.
///
/// `"Customs Law San José"` -> `"customs-law-san-jose"`. Returns an empty
/// string when nothing alphanumeric is left.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    slug
}
