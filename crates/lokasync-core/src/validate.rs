//! Optional input checks for firmware update requests.
//!
//! [`crate::payload::build_update_request`] accepts any strings. Callers that want
//! to reject malformed form input before publishing run these first.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::payload::UpdateRequest;

/// Longest accepted version label (`xxx.yyy.zz`).
pub const MAX_VERSION_LEN: usize = 10;

lazy_static! {
    static ref SEMVER_TRIPLE: Regex = Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").unwrap();
    // Codenames are `location_type_id`, lowercased with spaces removed.
    static ref NODE_CODENAME: Regex = Regex::new(r"^[a-z0-9_-]+$").unwrap();
    static ref HTTP_URL: Regex = Regex::new(r"^https?://.*$").unwrap();
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FirmwareInputError {
    #[error("node codename is empty")]
    EmptyNodeCodename,
    #[error("node codename {0:?} may only contain a-z, 0-9, '_' and '-'")]
    MalformedNodeCodename(String),
    #[error("firmware version {0:?} is not in x.y.z form")]
    MalformedVersion(String),
    #[error("firmware version {0:?} is longer than {max} characters", max = MAX_VERSION_LEN)]
    VersionTooLong(String),
    #[error("firmware url {0:?} must start with http:// or https://")]
    InvalidUrl(String),
}

/// Accepts lowercase ASCII letters, digits, `_` and `-`. Topic wildcards
/// (`+`, `#`) and level separators (`/`) are rejected.
pub fn validate_node_codename(node_codename: &str) -> Result<(), FirmwareInputError> {
    if node_codename.trim().is_empty() {
        return Err(FirmwareInputError::EmptyNodeCodename);
    }
    if !NODE_CODENAME.is_match(node_codename) {
        return Err(FirmwareInputError::MalformedNodeCodename(
            node_codename.to_string(),
        ));
    }
    Ok(())
}

/// Accepts `major.minor.patch` made of ASCII digits, at most [`MAX_VERSION_LEN`] long.
pub fn validate_firmware_version(version: &str) -> Result<(), FirmwareInputError> {
    if !SEMVER_TRIPLE.is_match(version) {
        return Err(FirmwareInputError::MalformedVersion(version.to_string()));
    }
    // ASCII only past the pattern check, so bytes == chars.
    if version.len() > MAX_VERSION_LEN {
        return Err(FirmwareInputError::VersionTooLong(version.to_string()));
    }
    Ok(())
}

/// Accepts strings starting with a lowercase `http://` or `https://`.
pub fn validate_firmware_url(firmware_url: &str) -> Result<(), FirmwareInputError> {
    if !HTTP_URL.is_match(firmware_url) {
        return Err(FirmwareInputError::InvalidUrl(firmware_url.to_string()));
    }
    Ok(())
}

/// Runs every check on `req`; the first failure is returned.
pub fn validate_request(req: &UpdateRequest) -> Result<(), FirmwareInputError> {
    validate_node_codename(&req.node_codename)?;
    validate_firmware_url(&req.firmware_url)?;
    validate_firmware_version(&req.firmware_version)?;
    Ok(())
}
