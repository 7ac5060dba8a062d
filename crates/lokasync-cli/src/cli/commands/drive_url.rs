//! `lokasync drive-url <url>` – print the direct-download link.

use lokasync_core::drive;

pub fn run_drive_url(url: &str) {
    println!("{}", drive::direct_download_url(url));
}
