//! Error types and stable error codes

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for request handling
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Stable, machine-readable error codes carried in the `error` field of
/// error replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidJson,
    RequestTooLarge,
    UnknownRequestType,
    MissingRecipient,
    AmbiguousRecipient,
    EmptyMessage,
    FileNotFound,
    HandlerFailed,
    ConfigError,
    IoError,
}

impl ErrorCode {
    /// Wire representation of the code
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidJson => "INVALID_JSON",
            ErrorCode::RequestTooLarge => "REQUEST_TOO_LARGE",
            ErrorCode::UnknownRequestType => "UNKNOWN_REQUEST_TYPE",
            ErrorCode::MissingRecipient => "MISSING_RECIPIENT",
            ErrorCode::AmbiguousRecipient => "AMBIGUOUS_RECIPIENT",
            ErrorCode::EmptyMessage => "EMPTY_MESSAGE",
            ErrorCode::FileNotFound => "FILE_NOT_FOUND",
            ErrorCode::HandlerFailed => "HANDLER_FAILED",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::IoError => "IO_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        code.as_str().to_string()
    }
}

/// Error type for request handling
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Request `type` is not one this client understands
    #[error("unknown request type: {0}")]
    UnknownRequestType(String),

    /// A send request named neither a number nor a group
    #[error("send request needs either recipientNumber or recipientGroupId")]
    MissingRecipient,

    /// A send request named both a number and a group
    #[error("recipientNumber {number} and recipientGroupId {group_id} are mutually exclusive")]
    AmbiguousRecipient { number: String, group_id: String },

    /// A send request without a body and without attachments
    #[error("send request has neither messageBody nor attachmentFilenames")]
    EmptyMessage,

    /// A referenced attachment or avatar does not exist
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// The handler rejected or failed the request
    ///
    /// Raised by `RequestHandler` implementations backed by a messaging
    /// service (unknown recipient, network failure). The local dry-run
    /// handler only validates, so it never produces this variant.
    #[error("{message}")]
    HandlerFailed { message: String, subject: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BridgeError {
    /// Stable code reported in error replies
    pub fn error_code(&self) -> ErrorCode {
        match self {
            BridgeError::UnknownRequestType(_) => ErrorCode::UnknownRequestType,
            BridgeError::MissingRecipient => ErrorCode::MissingRecipient,
            BridgeError::AmbiguousRecipient { .. } => ErrorCode::AmbiguousRecipient,
            BridgeError::EmptyMessage => ErrorCode::EmptyMessage,
            BridgeError::FileNotFound(_) => ErrorCode::FileNotFound,
            BridgeError::HandlerFailed { .. } => ErrorCode::HandlerFailed,
            BridgeError::ConfigError(_) => ErrorCode::ConfigError,
            BridgeError::Io(_) => ErrorCode::IoError,
        }
    }

    /// The entity the error concerns: a number, group id, path or field name
    pub fn subject(&self) -> String {
        match self {
            BridgeError::UnknownRequestType(kind) => kind.clone(),
            BridgeError::MissingRecipient => "recipientNumber".to_string(),
            BridgeError::AmbiguousRecipient { number, .. } => number.clone(),
            BridgeError::EmptyMessage => "messageBody".to_string(),
            BridgeError::FileNotFound(path) => path.clone(),
            BridgeError::HandlerFailed { subject, .. } => subject.clone(),
            BridgeError::ConfigError(_) => "config".to_string(),
            BridgeError::Io(err) => err.kind().to_string(),
        }
    }

    /// Shorthand for a handler failure
    ///
    /// For `RequestHandler` implementations that report a service-side
    /// failure; `subject` names the entity it concerns, such as a number.
    pub fn handler(message: impl Into<String>, subject: impl Into<String>) -> Self {
        BridgeError::HandlerFailed {
            message: message.into(),
            subject: subject.into(),
        }
    }
}

impl From<toml::de::Error> for BridgeError {
    fn from(err: toml::de::Error) -> Self {
        BridgeError::ConfigError(err.to_string())
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
