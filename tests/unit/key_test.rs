//! Unit tests for key-derived identity and output locations

use scriptlog::files::{file_stem, is_processed_key, output_key};
use scriptlog::Identity;

#[test]
fn identity_from_full_key() {
    let identity = Identity::from_key("123456789012/jdoe-0f1e2d3c4b5a69788.log");
    assert_eq!(identity.account_id, "123456789012");
    assert_eq!(identity.user, "jdoe");
    assert_eq!(identity.session_id, "0f1e2d3c4b5a69788");
}

#[test]
fn identity_splits_on_last_dash() {
    let identity = Identity::from_key("1/first-last-abc.log");
    assert_eq!(identity.user, "first-last");
    assert_eq!(identity.session_id, "abc");
}

#[test]
fn identity_without_account_directory() {
    let identity = Identity::from_key("alice-1.log");
    assert_eq!(identity.account_id, "unknown");
    assert_eq!(identity.user, "alice");

    let identity = Identity::from_key("team-a/alice-1.log");
    assert_eq!(identity.account_id, "unknown");
}

#[test]
fn identity_without_dash_keeps_stem_as_user() {
    let identity = Identity::from_key("123/alice.log");
    assert_eq!(identity.user, "alice");
    assert_eq!(identity.session_id, "unknown");
}

#[test]
fn identity_with_empty_parts_is_unknown() {
    let identity = Identity::from_key("123/-abc.log");
    assert_eq!(identity.user, "unknown");
    assert_eq!(identity.session_id, "abc");

    let identity = Identity::from_key("");
    assert_eq!(identity, Identity::default());
}

#[test]
fn file_stem_drops_last_extension_only() {
    assert_eq!(file_stem("alice-1.log"), "alice-1");
    assert_eq!(file_stem("alice-1.tar.gz"), "alice-1.tar");
    assert_eq!(file_stem("alice-1"), "alice-1");
    assert_eq!(file_stem(".hidden"), ".hidden");
}

#[test]
fn output_key_keeps_directory() {
    assert_eq!(
        output_key("123/alice-1.log", "processed_logs", "json"),
        "processed_logs/123/alice-1.json"
    );
    assert_eq!(
        output_key("a/b/c/alice-1.log", "out", "jsonl"),
        "out/a/b/c/alice-1.jsonl"
    );
    assert_eq!(output_key("alice-1.log", "out", "json"), "out/alice-1.json");
}

#[test]
fn processed_keys_are_detected_by_prefix() {
    assert!(is_processed_key("processed_logs/123/a-1.json", "processed_logs"));
    assert!(!is_processed_key("processed_logs_old/a-1.json", "processed_logs"));
    assert!(!is_processed_key("123/processed_logs/a-1.json", "processed_logs"));
    assert!(!is_processed_key("processed_logs", "processed_logs"));
}

#[test]
fn output_key_is_always_a_processed_key() {
    for key in ["123/a-1.log", "x.log", "deep/er/a-b.txt"] {
        assert!(is_processed_key(&output_key(key, "processed_logs", "json"), "processed_logs"));
    }
}
