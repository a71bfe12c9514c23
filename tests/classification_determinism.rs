//! Determinism and totality guarantees of the classifier.

use fieldgate::classify::{
    AlertSeverity, ErrorClassifier, ErrorKind, RawErrorSignal,
};

#[test]
fn test_overlapping_triggers_resolve_identically_across_repeated_calls() {
    let classifier = ErrorClassifier::new();
    // contains both "timeout" and "server"; rule order must decide once
    let signal = RawErrorSignal::from_message("504 Gateway Timeout while calling server");

    let first = classifier.classify(&signal);
    assert_eq!(first.kind, ErrorKind::Timeout);
    for _ in 0..1000 {
        assert_eq!(classifier.classify(&signal), first);
    }
}

#[test]
fn test_empty_signal_maps_to_unknown_with_a_fallback_message() {
    let classified = ErrorClassifier::new().classify(&RawErrorSignal::from_message(""));
    assert_eq!(classified.kind, ErrorKind::Unknown);
    assert_eq!(classified.severity, AlertSeverity::Error);
    assert!(!classified.retryable);
    assert!(!classified.message.is_empty());
}

#[test]
fn test_every_signal_classifies_to_exactly_one_kind() {
    let classifier = ErrorClassifier::new();
    let signals = [
        RawErrorSignal::from_message("user already exists"),
        RawErrorSignal::from_message("Network request failed"),
        RawErrorSignal::from_message("validation failed for field"),
        RawErrorSignal::from_message("upstream timed out"),
        RawErrorSignal::from_message("internal error"),
        RawErrorSignal::from_message("Unauthorized"),
        RawErrorSignal::from_message("Forbidden"),
        RawErrorSignal::from_message("record not found"),
        RawErrorSignal::from_message("rate limit exceeded"),
        RawErrorSignal::from_message("???"),
        RawErrorSignal::from_code(500),
        RawErrorSignal::from_code(418),
    ];

    for signal in &signals {
        let classified = classifier.classify(signal);
        assert!(!classified.message.is_empty(), "signal: {:?}", signal);
    }
}

#[test]
fn test_retryable_is_a_pure_function_of_kind() {
    let classifier = ErrorClassifier::new();
    let cases = [
        ("connection dropped", true),
        ("request timeout", true),
        ("server exploded", true),
        ("rate limit hit", true),
        ("email already exists", false),
        ("validation error", false),
        ("unauthorized", false),
        ("forbidden", false),
        ("not found", false),
        ("", false),
    ];

    for (message, expected) in cases {
        let classified = classifier.classify(&RawErrorSignal::from_message(message));
        assert_eq!(
            classified.retryable, expected,
            "message {:?} classified as {:?}",
            message, classified.kind
        );
    }
}

#[test]
fn test_status_codes_alone_are_sufficient_signals() {
    let classifier = ErrorClassifier::new();
    let cases = [
        (409, ErrorKind::Conflict),
        (422, ErrorKind::ValidationRejected),
        (408, ErrorKind::Timeout),
        (503, ErrorKind::ServerFault),
        (401, ErrorKind::Unauthorized),
        (403, ErrorKind::Forbidden),
        (404, ErrorKind::NotFound),
        (429, ErrorKind::RateLimited),
    ];

    for (code, expected) in cases {
        assert_eq!(
            classifier.classify(&RawErrorSignal::from_code(code)).kind,
            expected,
            "code {}",
            code
        );
    }
}
