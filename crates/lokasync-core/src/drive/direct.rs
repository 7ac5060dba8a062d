//! Recognition of links that already trigger a direct download.

const DRIVE_HOST: &str = "drive.google.com";

/// Whether `url` is a Drive `uc` link with `export=download` and a non-empty `id`.
///
/// Parameter order does not matter, so both `uc?export=download&id=X` and
/// `uc?id=X&export=download` qualify.
pub fn is_direct_download(url: &str) -> bool {
    let parsed = match url::Url::parse(url) {
        Ok(u) => u,
        Err(_) => return false,
    };
    if parsed.host_str() != Some(DRIVE_HOST) || parsed.path() != "/uc" {
        return false;
    }

    let mut export_download = false;
    let mut has_id = false;
    for (key, value) in parsed.query_pairs() {
        match key.as_ref() {
            "export" if value == "download" => export_download = true,
            "id" if !value.is_empty() => has_id = true,
            _ => {}
        }
    }
    export_download && has_id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_form() {
        assert!(is_direct_download(
            "https://drive.google.com/uc?export=download&id=1A2b3C4d5E"
        ));
    }

    #[test]
    fn reversed_params() {
        assert!(is_direct_download(
            "https://drive.google.com/uc?id=1A2b3C4d5E&export=download"
        ));
    }

    #[test]
    fn share_link_is_not_direct() {
        assert!(!is_direct_download(
            "https://drive.google.com/file/d/1A2b3C4d5E/view?usp=sharing"
        ));
    }

    #[test]
    fn missing_pieces() {
        assert!(!is_direct_download("https://drive.google.com/uc?id=abc"));
        assert!(!is_direct_download("https://drive.google.com/uc?export=download&id="));
        assert!(!is_direct_download("https://example.com/uc?export=download&id=abc"));
        assert!(!is_direct_download(""));
        assert!(!is_direct_download("not a url"));
    }
}
