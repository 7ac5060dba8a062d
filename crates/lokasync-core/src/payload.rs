//! Firmware update request payload.
//!
//! The payload is published by the caller to the device's update topic. Field
//! names on the wire are fixed by the device firmware and must not change.

use serde::{Deserialize, Serialize};

use crate::session::SessionIdGenerator;

/// Request asking a node to download and flash a firmware image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// Codename of the target node (device identifier).
    pub node_codename: String,
    /// Where the node fetches the firmware binary.
    pub firmware_url: String,
    /// Version label of the firmware, e.g. `1.2.3`.
    pub firmware_version: String,
    /// Opaque token used to correlate the node's acknowledgment.
    pub session_id: String,
}

impl UpdateRequest {
    /// Compact JSON document as published to the device.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Builds an update request, taking one session id from `session_ids`.
///
/// The three input strings are copied verbatim; no validation is done here (see
/// [`crate::validate`] for that).
pub fn build_update_request<G>(
    session_ids: &G,
    node_codename: &str,
    firmware_url: &str,
    firmware_version: &str,
) -> UpdateRequest
where
    G: SessionIdGenerator + ?Sized,
{
    let session_id = session_ids.generate();
    tracing::debug!(
        node_codename,
        firmware_version,
        session_id = %session_id,
        "built firmware update request"
    );

    UpdateRequest {
        node_codename: node_codename.to_string(),
        firmware_url: firmware_url.to_string(),
        firmware_version: firmware_version.to_string(),
        session_id,
    }
}
