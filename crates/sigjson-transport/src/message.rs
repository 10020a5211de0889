//! Request and reply types exchanged over stdin/stdout

use serde::{Deserialize, Serialize};
use sigjson_core::BridgeError;

/// Request type for sending a message
pub const TYPE_SEND: &str = "send";

/// Request type for creating or updating a group
pub const TYPE_UPDATE_GROUP: &str = "update_group";

/// `type` of every error reply
pub const ERROR_TYPE: &str = "error";

/// Status reported when a request was handled
pub const STATUS_SUCCESS: &str = "SUCCESS";

/// Inbound request, one per line on stdin
///
/// Fields not present in the input stay `None`; unrecognized fields are
/// ignored. Cross-field rules (e.g. exactly one recipient for `send`) are
/// checked by whoever dispatches the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// Request type ("send", "update_group", ...)
    #[serde(rename = "type")]
    pub kind: String,

    /// Caller-supplied transaction id, echoed in replies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_body: Option<String>,

    /// Direct-message target, exclusive with `recipient_group_id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_number: Option<String>,

    /// Group target, exclusive with `recipient_number`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_group_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_filenames: Option<Vec<String>>,

    /// Group to update; absent means a new group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    /// Members to add to the group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<String>>,

    /// New group display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Path to a new group avatar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Request {
    /// Create a request of the given type with every optional field unset
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Set the transaction id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// A value that can be written to the reply stream
pub trait Reply: Serialize {
    /// Name used in diagnostics when the reply cannot be written
    fn reply_type(&self) -> &'static str;
}

/// Reply reporting the outcome of a handled request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    #[serde(rename = "type")]
    kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl StatusReport {
    /// Create a status report
    pub fn new(kind: impl Into<String>, id: Option<String>, status: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id,
            status: status.into(),
            message: None,
        }
    }

    /// Report success for `request`, echoing its type and id
    pub fn success(request: &Request) -> Self {
        Self::new(request.kind.clone(), request.id.clone(), STATUS_SUCCESS)
    }

    /// Attach a human-readable message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Reply for StatusReport {
    fn reply_type(&self) -> &'static str {
        "StatusReport"
    }
}

/// Reply reporting a failed request
///
/// The `type` field is always `"error"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    kind: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    error: String,

    message: String,

    subject: String,
}

impl ErrorMessage {
    /// Create an error reply not tied to any request
    pub fn new(
        error: impl Into<String>,
        message: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            kind: ERROR_TYPE,
            id: None,
            error: error.into(),
            message: message.into(),
            subject: subject.into(),
        }
    }

    /// Create an error reply that echoes the id of `request`
    pub fn for_request(
        error: impl Into<String>,
        message: impl Into<String>,
        subject: impl Into<String>,
        request: &Request,
    ) -> Self {
        Self::new(error, message, subject).with_id(request.id.clone())
    }

    /// Create an error reply from a handling error
    pub fn from_error(err: &BridgeError, request: Option<&Request>) -> Self {
        let reply = Self::new(err.error_code(), err.to_string(), err.subject());
        match request {
            Some(request) => reply.with_id(request.id.clone()),
            None => reply,
        }
    }

    /// Set (or clear) the transaction id
    pub fn with_id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }

    pub fn kind(&self) -> &str {
        self.kind
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }
}

impl Reply for ErrorMessage {
    fn reply_type(&self) -> &'static str {
        "ErrorMessage"
    }
}

/// Either kind of reply, as produced by request dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Status(StatusReport),
    Error(ErrorMessage),
}

impl Response {
    /// Check if this is a status (success) reply
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Status(_))
    }
}

impl Reply for Response {
    fn reply_type(&self) -> &'static str {
        match self {
            Response::Status(report) => report.reply_type(),
            Response::Error(error) => error.reply_type(),
        }
    }
}

impl From<StatusReport> for Response {
    fn from(report: StatusReport) -> Self {
        Response::Status(report)
    }
}

impl From<ErrorMessage> for Response {
    fn from(error: ErrorMessage) -> Self {
        Response::Error(error)
    }
}
