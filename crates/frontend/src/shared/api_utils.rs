//! Helpers for fetching static assets next to the page.

/// Headers that ask every cache between us and the file to step aside
pub const NO_STORE_HEADERS: [(&str, &str); 2] = [
    ("Cache-Control", "no-cache, no-store, must-revalidate"),
    ("Pragma", "no-cache"),
];

/// Relative URL with a timestamp query parameter, so the request always
/// reaches the server.
///
/// # Example
/// ```no_run
/// use frontend::shared::api_utils::no_store_url;
///
/// // needs a JS host for the clock: "data/menu.json?_ts=1718000000000"
/// let url = no_store_url("data/menu.json");
/// ```
pub fn no_store_url(path: &str) -> String {
    with_cache_buster(path, js_sys::Date::now() as i64)
}

pub fn with_cache_buster(path: &str, ts: i64) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{}{}_ts={}", path, separator, ts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_cache_buster() {
        assert_eq!(
            with_cache_buster("data/menu.json", 42),
            "data/menu.json?_ts=42"
        );
        assert_eq!(
            with_cache_buster("data/menu.json?lang=de", 42),
            "data/menu.json?lang=de&_ts=42"
        );
    }
}
