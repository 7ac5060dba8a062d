//! Session id generation for outbound update requests.
//!
//! A session id correlates a device's later acknowledgment with the request that
//! triggered it. Generators are injected so callers and tests can choose the source.

use uuid::Uuid;

/// Source of session ids. Called exactly once per built request.
pub trait SessionIdGenerator {
    fn generate(&self) -> String;
}

/// Random UUID v4 session ids (hyphenated, lowercase).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSessionIds;

impl SessionIdGenerator for UuidSessionIds {
    fn generate(&self) -> String {
        Uuid::new_v4().hyphenated().to_string()
    }
}

impl<F> SessionIdGenerator for F
where
    F: Fn() -> String,
{
    fn generate(&self) -> String {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_parse_and_differ() {
        let ids = UuidSessionIds;
        let a = ids.generate();
        let b = ids.generate();
        assert_ne!(a, b);
        let parsed = Uuid::parse_str(&a).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(a.len(), 36);
    }

    #[test]
    fn closure_is_a_generator() {
        let fixed = || "sid-42".to_string();
        assert_eq!(fixed.generate(), "sid-42");
    }
}
