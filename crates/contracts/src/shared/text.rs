//! String canonicalization for accent- and case-insensitive matching.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase, NFD-decompose and drop combining marks.
///
/// "Käse" -> "kase", "CRÈME brûlée" -> "creme brulee".
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Escape the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_case_and_diacritics() {
        assert_eq!(normalize("Käse"), "kase");
        assert_eq!(normalize("KASE"), "kase");
        assert_eq!(normalize("Käse"), normalize("KASE"));
        assert_eq!(normalize("Crème Brûlée"), "creme brulee");
        assert_eq!(normalize("Hähnchen"), "hahnchen");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for s in ["Käse", "Caesar Salat", "mit Hähnchen", "ŞİŞ Kebap", "Œufs", ""] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("vegan"), "vegan");
    }
}
