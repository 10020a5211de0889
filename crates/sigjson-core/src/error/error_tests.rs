#![allow(non_snake_case)]

use super::*;

#[test]
fn ErrorCode___serialize___uses_screaming_snake_case() {
    let json = serde_json::to_string(&ErrorCode::AmbiguousRecipient).unwrap();

    assert_eq!(json, r#""AMBIGUOUS_RECIPIENT""#);
}

#[test]
fn ErrorCode___deserialize___parses_wire_name() {
    let code: ErrorCode = serde_json::from_str(r#""FILE_NOT_FOUND""#).unwrap();

    assert_eq!(code, ErrorCode::FileNotFound);
}

#[test]
fn ErrorCode___into_string___matches_as_str() {
    let s: String = ErrorCode::InvalidJson.into();

    assert_eq!(s, "INVALID_JSON");
}

#[test]
fn BridgeError___ambiguous_recipient___subject_is_number() {
    let err = BridgeError::AmbiguousRecipient {
        number: "+15551234567".into(),
        group_id: "g1".into(),
    };

    assert_eq!(err.subject(), "+15551234567");
    assert!(err.to_string().contains("g1"));
}

#[test]
fn BridgeError___handler___builds_handler_failed() {
    let err = BridgeError::handler("rate limited", "+1");

    assert_eq!(err.error_code(), ErrorCode::HandlerFailed);
    assert_eq!(err.to_string(), "rate limited");
    assert_eq!(err.subject(), "+1");
}

#[test]
fn BridgeError___from_io_error___wraps_io() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");

    let err: BridgeError = io.into();

    assert!(matches!(err, BridgeError::Io(_)));
    assert_eq!(err.error_code(), ErrorCode::IoError);
}

#[test]
fn BridgeError___from_toml_error___becomes_config_error() {
    let toml_err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();

    let err: BridgeError = toml_err.into();

    assert!(matches!(err, BridgeError::ConfigError(_)));
}
