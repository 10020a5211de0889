//! Request dispatch

use crate::command::{Command, SendCommand, UpdateGroupCommand};
use sigjson_core::BridgeResult;
use sigjson_transport::{ErrorMessage, Request, Response, StatusReport};

/// Business logic behind the JSON interface
///
/// Each method returns an optional human-readable message for the status
/// reply, or the error to report back to the caller.
pub trait RequestHandler {
    /// Send a message to a number or group
    fn send(&self, command: &SendCommand<'_>) -> BridgeResult<Option<String>>;

    /// Create a group or update its name, members or avatar
    fn update_group(&self, command: &UpdateGroupCommand<'_>) -> BridgeResult<Option<String>>;
}

/// Routes decoded requests to a [`RequestHandler`] and builds the reply
pub struct Dispatcher<H> {
    handler: H,
}

impl<H: RequestHandler> Dispatcher<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    /// Handle one request, producing exactly one reply
    pub fn dispatch(&self, request: &Request) -> Response {
        let _span = tracing::debug_span!(
            "request",
            kind = %request.kind,
            id = request.id.as_deref().unwrap_or("-")
        )
        .entered();

        let outcome = Command::from_request(request).and_then(|command| match &command {
            Command::Send(send) => self.handler.send(send),
            Command::UpdateGroup(update) => self.handler.update_group(update),
        });

        match outcome {
            Ok(message) => {
                tracing::debug!("request handled");
                let report = StatusReport::success(request);
                match message {
                    Some(message) => report.with_message(message).into(),
                    None => report.into(),
                }
            }
            Err(err) => {
                tracing::warn!(code = %err.error_code(), error = %err, "request failed");
                ErrorMessage::from_error(&err, Some(request)).into()
            }
        }
    }
}
