//! URL normalization shared by both markup dialects. Applied before
//! escaping, so the output is still raw text as far as the escapers are
//! concerned.

/// Strip a leading protocol, a leading `www.` label, and one trailing slash.
/// Cosmetic only, used for link display text.
pub fn clean_url_for_display(url: &str) -> String {
    let mut cleaned = url;
    for prefix in ["https://", "http://"] {
        if let Some(rest) = cleaned.strip_prefix(prefix) {
            cleaned = rest;
            break;
        }
    }
    if let Some(rest) = cleaned.strip_prefix("www.") {
        cleaned = rest;
    }
    cleaned.strip_suffix('/').unwrap_or(cleaned).to_string()
}

/// Ensure a URL has a protocol so link targets are always absolute.
pub fn format_url_for_href(url: &str) -> String {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_url_for_display() {
        assert_eq!(clean_url_for_display("https://www.example.com/"), "example.com");
        assert_eq!(clean_url_for_display("http://example.com/a/"), "example.com/a");
        assert_eq!(clean_url_for_display("example.com"), "example.com");
        assert_eq!(clean_url_for_display("www.example.com"), "example.com");
    }

    #[test]
    fn test_clean_strips_only_one_trailing_slash() {
        assert_eq!(clean_url_for_display("example.com//"), "example.com/");
    }

    #[test]
    fn test_format_url_for_href() {
        assert_eq!(format_url_for_href("example.com"), "https://example.com");
        assert_eq!(format_url_for_href("http://example.com"), "http://example.com");
        assert_eq!(format_url_for_href("HTTPS://EXAMPLE.COM"), "HTTPS://EXAMPLE.COM");
    }
}
