//! Google Drive link handling.
//!
//! Rewrites share links (`.../file/d/<id>/view`) into direct-download links that
//! devices can fetch without going through the viewer page.

mod direct;
mod share;

pub use direct::is_direct_download;
pub use share::extract_file_id;

/// Prefix of a Drive direct-download link; the file id is appended verbatim.
pub const DIRECT_DOWNLOAD_PREFIX: &str = "https://drive.google.com/uc?export=download&id=";

/// Converts a Drive share URL into a direct-download URL.
///
/// Only the first `/d/<id>` occurrence is used and everything else in the input
/// is discarded. Inputs without that segment, including the empty string and
/// links that already point at `uc?...`, are returned unchanged.
///
/// # Examples
///
/// - `direct_download_url("https://drive.google.com/file/d/1A2b3C4d5E/view?usp=sharing")`
///   → `"https://drive.google.com/uc?export=download&id=1A2b3C4d5E"`
/// - `direct_download_url("https://example.com/fw.bin")` → `"https://example.com/fw.bin"`
pub fn direct_download_url(share_url: &str) -> String {
    match extract_file_id(share_url) {
        Some(file_id) => {
            tracing::debug!(file_id, "rewrote drive share link to direct download");
            format!("{DIRECT_DOWNLOAD_PREFIX}{file_id}")
        }
        None => share_url.to_string(),
    }
}
