//! File id extraction from share links.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SHARE_FILE_ID: Regex = Regex::new(r"/d/([A-Za-z0-9_-]+)").unwrap();
}

/// Returns the file id following the first `/d/` segment, if any.
///
/// The id is the longest run of `[A-Za-z0-9_-]` right after `/d/`.
pub fn extract_file_id(share_url: &str) -> Option<&str> {
    SHARE_FILE_ID
        .captures(share_url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_id_in_share_link() {
        assert_eq!(
            extract_file_id("https://drive.google.com/file/d/1A2b3C4d5E/view?usp=sharing"),
            Some("1A2b3C4d5E")
        );
    }

    #[test]
    fn matches_anywhere_in_input() {
        assert_eq!(extract_file_id("prefix/d/xyz"), Some("xyz"));
        assert_eq!(extract_file_id("/d/AAA/extra/d/BBB"), Some("AAA"));
    }

    #[test]
    fn no_id() {
        assert_eq!(extract_file_id(""), None);
        assert_eq!(extract_file_id("https://example.com/d"), None);
        assert_eq!(extract_file_id("https://example.com/d/"), None);
        assert_eq!(extract_file_id("https://example.com/dd/abc"), None);
    }
}
