//! Typed views of decoded requests

use sigjson_core::{BridgeError, BridgeResult};
use sigjson_transport::{Request, TYPE_SEND, TYPE_UPDATE_GROUP};

/// Where a message is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient<'a> {
    Number(&'a str),
    Group(&'a str),
}

impl std::fmt::Display for Recipient<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recipient::Number(number) => write!(f, "{number}"),
            Recipient::Group(group_id) => write!(f, "group {group_id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendCommand<'a> {
    pub recipient: Recipient<'a>,
    pub body: Option<&'a str>,
    pub attachments: &'a [String],
}

/// Group update; `group_id` of `None` creates a new group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateGroupCommand<'a> {
    pub group_id: Option<&'a str>,
    pub name: Option<&'a str>,
    pub members: &'a [String],
    pub avatar: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Send(SendCommand<'a>),
    UpdateGroup(UpdateGroupCommand<'a>),
}

impl<'a> Command<'a> {
    /// Classify a request and check its cross-field rules
    pub fn from_request(request: &'a Request) -> BridgeResult<Self> {
        match request.kind.as_str() {
            TYPE_SEND => send_command(request).map(Command::Send),
            TYPE_UPDATE_GROUP => Ok(Command::UpdateGroup(UpdateGroupCommand {
                group_id: non_empty(&request.group_id),
                name: non_empty(&request.name),
                members: request.members.as_deref().unwrap_or_default(),
                avatar: non_empty(&request.avatar),
            })),
            other => Err(BridgeError::UnknownRequestType(other.to_string())),
        }
    }
}

fn send_command(request: &Request) -> BridgeResult<SendCommand<'_>> {
    let recipient = match (
        non_empty(&request.recipient_number),
        non_empty(&request.recipient_group_id),
    ) {
        (Some(number), None) => Recipient::Number(number),
        (None, Some(group_id)) => Recipient::Group(group_id),
        (None, None) => return Err(BridgeError::MissingRecipient),
        (Some(number), Some(group_id)) => {
            return Err(BridgeError::AmbiguousRecipient {
                number: number.to_string(),
                group_id: group_id.to_string(),
            });
        }
    };

    let body = request.message_body.as_deref();
    let attachments = request.attachment_filenames.as_deref().unwrap_or_default();
    if body.is_none_or(str::is_empty) && attachments.is_empty() {
        return Err(BridgeError::EmptyMessage);
    }

    Ok(SendCommand {
        recipient,
        body,
        attachments,
    })
}

/// Empty strings count as absent
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "command/command_tests.rs"]
mod command_tests;
