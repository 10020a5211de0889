//! JSON codec for requests and replies

use crate::message::{Reply, Request};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur during decoding, encoding or writing
#[derive(Error, Debug)]
pub enum CodecError {
    /// Input was not a well-formed request document
    #[error("malformed request: {message}")]
    MalformedRequest {
        /// The offending input, lossily decoded as UTF-8
        raw: String,
        /// Diagnostic from the JSON parser
        message: String,
        /// Transaction id, if one could be read from the input anyway
        id: Option<String>,
    },

    /// A reply could not be serialized
    #[error("failed to serialize {reply_type}: {message}")]
    SerializationFailure {
        reply_type: &'static str,
        message: String,
    },

    /// A reply could not be written to the output stream
    #[error("failed to write reply: {0}")]
    Io(#[from] std::io::Error),
}

static SHARED: JsonCodec = JsonCodec;

/// Stateless JSON codec using serde_json
///
/// Replies are always encoded compactly, so one reply is one line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Create a new JSON codec
    pub fn new() -> Self {
        JsonCodec
    }

    /// Process-wide codec instance
    pub fn shared() -> &'static JsonCodec {
        &SHARED
    }

    /// Decode one request document
    ///
    /// The document must be a JSON object; arrays and scalars are rejected
    /// even when their elements would line up with the request fields.
    pub fn decode_request(&self, data: &[u8]) -> Result<Request, CodecError> {
        let malformed = |message: String, id: Option<String>| CodecError::MalformedRequest {
            raw: String::from_utf8_lossy(data).into_owned(),
            message,
            id,
        };

        let value: serde_json::Value =
            serde_json::from_slice(data).map_err(|err| malformed(err.to_string(), None))?;
        if !value.is_object() {
            return Err(malformed("request must be a JSON object".to_string(), None));
        }

        let id = value.get("id").and_then(|v| v.as_str()).map(str::to_string);
        Request::deserialize(value).map_err(|err| malformed(err.to_string(), id))
    }

    /// Decode one request document from a string
    pub fn decode_request_str(&self, data: &str) -> Result<Request, CodecError> {
        self.decode_request(data.as_bytes())
    }

    /// Encode a reply as a single line of JSON, without the line terminator
    pub fn encode_reply<R: Reply + ?Sized>(&self, reply: &R) -> Result<String, CodecError> {
        serde_json::to_string(reply).map_err(|err| CodecError::SerializationFailure {
            reply_type: reply.reply_type(),
            message: err.to_string(),
        })
    }

    /// Encode a reply followed by a newline
    pub fn encode_line<R: Reply + ?Sized>(&self, reply: &R) -> Result<String, CodecError> {
        let mut line = self.encode_reply(reply)?;
        line.push('\n');
        Ok(line)
    }
}
