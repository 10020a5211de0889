#![allow(non_snake_case)]

use super::*;
use sigjson_core::ErrorCode;
use test_case::test_case;

fn send(number: Option<&str>, group: Option<&str>, body: Option<&str>) -> Request {
    Request {
        recipient_number: number.map(String::from),
        recipient_group_id: group.map(String::from),
        message_body: body.map(String::from),
        ..Request::new("send")
    }
}

#[test]
fn Command___from_request___send_to_number() {
    let req = send(Some("+15551234567"), None, Some("hi"));

    let cmd = Command::from_request(&req).unwrap();

    assert_eq!(
        cmd,
        Command::Send(SendCommand {
            recipient: Recipient::Number("+15551234567"),
            body: Some("hi"),
            attachments: &[],
        })
    );
}

#[test]
fn Command___from_request___send_to_group() {
    let req = send(None, Some("Z3JvdXA="), Some("hi"));

    let cmd = Command::from_request(&req).unwrap();

    assert!(matches!(
        cmd,
        Command::Send(SendCommand { recipient: Recipient::Group("Z3JvdXA="), .. })
    ));
}

#[test]
fn Command___from_request___attachments_without_body_are_accepted() {
    let req = Request {
        attachment_filenames: Some(vec!["/tmp/cat.jpg".to_string()]),
        ..send(Some("+1"), None, None)
    };

    let cmd = Command::from_request(&req).unwrap();

    match cmd {
        Command::Send(send) => {
            assert!(send.body.is_none());
            assert_eq!(send.attachments, ["/tmp/cat.jpg".to_string()]);
        }
        other => panic!("expected send, got {other:?}"),
    }
}

#[test_case(send(None, None, Some("hi")), ErrorCode::MissingRecipient ; "no recipient")]
#[test_case(send(Some(""), Some(""), Some("hi")), ErrorCode::MissingRecipient ; "empty recipients")]
#[test_case(send(Some("+1"), Some("g1"), Some("hi")), ErrorCode::AmbiguousRecipient ; "both recipients")]
#[test_case(send(Some("+1"), None, None), ErrorCode::EmptyMessage ; "no body")]
#[test_case(send(Some("+1"), None, Some("")), ErrorCode::EmptyMessage ; "empty body")]
#[test_case(Request::new("poll"), ErrorCode::UnknownRequestType ; "unknown type")]
#[test_case(Request::new("SEND"), ErrorCode::UnknownRequestType ; "type is case sensitive")]
fn Command___from_request___rejects_invalid_request(req: Request, expected: ErrorCode) {
    let err = Command::from_request(&req).unwrap_err();

    assert_eq!(err.error_code(), expected);
}

#[test]
fn Command___from_request___unknown_type_subject_is_type() {
    let req = Request::new("poll");

    let err = Command::from_request(&req).unwrap_err();

    assert_eq!(err.subject(), "poll");
}

#[test]
fn Command___from_request___update_group_without_group_id_creates() {
    let req = Request {
        name: Some("Climbing".to_string()),
        members: Some(vec!["+1".to_string(), "+2".to_string()]),
        ..Request::new("update_group")
    };

    let cmd = Command::from_request(&req).unwrap();

    assert_eq!(
        cmd,
        Command::UpdateGroup(UpdateGroupCommand {
            group_id: None,
            name: Some("Climbing"),
            members: &["+1".to_string(), "+2".to_string()],
            avatar: None,
        })
    );
}

#[test]
fn Command___from_request___update_group_ignores_send_fields() {
    let req = Request {
        group_id: Some("g1".to_string()),
        recipient_number: Some("+1".to_string()),
        ..Request::new("update_group")
    };

    let cmd = Command::from_request(&req).unwrap();

    assert!(matches!(
        cmd,
        Command::UpdateGroup(UpdateGroupCommand { group_id: Some("g1"), .. })
    ));
}

#[test]
fn Recipient___display___marks_groups() {
    assert_eq!(Recipient::Number("+1").to_string(), "+1");
    assert_eq!(Recipient::Group("g1").to_string(), "group g1");
}
