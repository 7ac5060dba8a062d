//! Integration test: form input with a Drive share link becomes a publishable payload.

use lokasync_core::drive::{direct_download_url, is_direct_download};
use lokasync_core::payload::{build_update_request, UpdateRequest};
use lokasync_core::session::{SessionIdGenerator, UuidSessionIds};
use lokasync_core::validate::validate_request;

#[test]
fn share_link_payload_is_valid_and_serializes() {
    let share = "https://drive.google.com/file/d/1A2b3C4d5E/view?usp=sharing";
    let firmware_url = direct_download_url(share);
    assert!(is_direct_download(&firmware_url));

    let req = build_update_request(&|| "sid-42".to_string(), "node-7", &firmware_url, "1.2.3");
    validate_request(&req).unwrap();

    let json = req.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["node_codename"], "node-7");
    assert_eq!(
        value["firmware_url"],
        "https://drive.google.com/uc?export=download&id=1A2b3C4d5E"
    );
    assert_eq!(value["firmware_version"], "1.2.3");
    assert_eq!(value["session_id"], "sid-42");
    assert_eq!(value.as_object().unwrap().len(), 4);
}

#[test]
fn default_generator_gives_each_request_its_own_session() {
    let ids = UuidSessionIds;
    let a: UpdateRequest = build_update_request(&ids, "node-7", "https://x", "1.2.3");
    let b: UpdateRequest = build_update_request(&ids, "node-7", "https://x", "1.2.3");
    assert_ne!(a.session_id, b.session_id);
    assert!(!ids.generate().is_empty());
}
