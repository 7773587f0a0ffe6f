//! Misconfiguration must fail closed: no report leaves with an unsanitized
//! payload because a rule category was silently dropped.

mod common;

use common::{RecordingTransport, sensitive_config};
use reqscrub_core::Error;
use reqscrub_filter::{RequestDataScrubber, Scrubber};
use serde_json::json;

#[test]
fn non_array_entries_rejected_by_name() {
    for (entry, value) in [
        ("keys", json!("password")),
        ("key_regex", json!("/^secret_/")),
        ("value_regex", json!({"p": "^\\d+$"})),
    ] {
        let config = sensitive_config(json!({entry: value}));
        let err = Scrubber::from_config(&config).unwrap_err();

        match err {
            Error::Config(msg) => {
                assert!(
                    msg.contains(&format!("sensitive_data.{entry} must be an array")),
                    "unexpected message for {entry}: {msg}"
                );
            }
            other => panic!("expected Config error for {entry}, got {other:?}"),
        }
    }
}

#[test]
fn registration_fails_before_any_report_is_handled() {
    let transport = RecordingTransport::new();
    let config = sensitive_config(json!({"value_regex": 42}));

    let err = RequestDataScrubber::from_config(&config).unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    // Nothing was dispatched, nothing was sent.
    assert!(transport.sent().is_empty());
}

#[test]
fn invalid_pattern_is_a_config_error() {
    let config = sensitive_config(json!({"key_regex": ["/[unclosed/"]}));
    let err = Scrubber::from_config(&config).unwrap_err();
    assert!(matches!(err, Error::Config(msg) if msg.contains("sensitive_data.key_regex")));
}
