//! Property-based tests for the request/reply codec
//!
//! Requests built from any subset of fields decode back to the same value,
//! and encoded replies never mention fields that were left unset.

use proptest::prelude::*;
use sigjson_transport::{ErrorMessage, JsonCodec, Request, StatusReport};

fn arb_opt_string() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(".{0,40}")
}

fn arb_opt_list() -> impl Strategy<Value = Option<Vec<String>>> {
    proptest::option::of(proptest::collection::vec("[+0-9]{1,15}", 0..5))
}

prop_compose! {
    fn arb_request()(
        kind in prop_oneof![Just("send".to_string()), Just("update_group".to_string()), "[a-z_]{1,20}"],
        id in arb_opt_string(),
        message_body in arb_opt_string(),
        recipient_number in arb_opt_string(),
        recipient_group_id in arb_opt_string(),
        attachment_filenames in arb_opt_list(),
        group_id in arb_opt_string(),
        members in arb_opt_list(),
        name in arb_opt_string(),
        avatar in arb_opt_string(),
    ) -> Request {
        Request {
            kind,
            id,
            message_body,
            recipient_number,
            recipient_group_id,
            attachment_filenames,
            group_id,
            members,
            name,
            avatar,
        }
    }
}

proptest! {
    /// Property: any subset of request fields decodes, and unset fields stay unset
    #[test]
    fn proptest_request_subset_decodes(request in arb_request()) {
        let json = serde_json::to_string(&request)
            .expect("Serialization should succeed for valid data");

        let decoded = JsonCodec::shared()
            .decode_request_str(&json)
            .expect("Decoding should succeed for a well-formed request");

        prop_assert_eq!(decoded, request);
    }

    /// Property: a status report has no key for an unset id or message
    #[test]
    fn proptest_status_report_omits_unset_fields(
        kind in "[a-z_]{1,20}",
        id in arb_opt_string(),
        status in "[A-Z_]{1,20}",
        message in arb_opt_string(),
    ) {
        let mut report = StatusReport::new(kind, id.clone(), status);
        if let Some(message) = &message {
            report = report.with_message(message.clone());
        }

        let encoded = JsonCodec::shared().encode_reply(&report)
            .expect("Encoding should succeed");
        let value: serde_json::Value = serde_json::from_str(&encoded)
            .expect("Encoded reply should be valid JSON");
        let object = value.as_object().expect("Reply should be a JSON object");

        prop_assert!(!encoded.contains('\n'));
        prop_assert_eq!(object.contains_key("id"), id.is_some());
        prop_assert_eq!(object.contains_key("message"), message.is_some());
        prop_assert!(object.values().all(|v| !v.is_null()));
    }

    /// Property: an error reply always carries type "error" and only echoes a present id
    #[test]
    fn proptest_error_message_shape(
        error in "[A-Z_]{1,20}",
        message in ".{0,60}",
        subject in ".{0,30}",
        id in arb_opt_string(),
    ) {
        let mut request = Request::new("send");
        request.id = id.clone();
        let reply = ErrorMessage::for_request(error.clone(), message, subject, &request);

        let encoded = JsonCodec::shared().encode_reply(&reply)
            .expect("Encoding should succeed");
        let value: serde_json::Value = serde_json::from_str(&encoded)
            .expect("Encoded reply should be valid JSON");

        prop_assert_eq!(&value["type"], "error");
        prop_assert_eq!(&value["error"], error.as_str());
        prop_assert_eq!(value.get("id").and_then(|v| v.as_str()), id.as_deref());
    }

    /// Property: arbitrary bytes never panic the decoder
    #[test]
    fn proptest_decode_arbitrary_bytes_never_panics(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = JsonCodec::shared().decode_request(&data);
    }
}
