//! sigjson-transport - Newline-delimited JSON codec
//!
//! This crate provides:
//! - [`Request`] for inbound instructions read from stdin
//! - [`StatusReport`] and [`ErrorMessage`] for outbound replies
//! - [`JsonCodec`] for decoding requests and encoding replies
//! - [`ReplyWriter`] for writing one reply per line to an output stream

mod codec;
mod message;
mod writer;

pub use codec::{CodecError, JsonCodec};
pub use message::{
    ErrorMessage, Reply, Request, Response, StatusReport, ERROR_TYPE, STATUS_SUCCESS,
    TYPE_SEND, TYPE_UPDATE_GROUP,
};
pub use writer::ReplyWriter;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CodecError, ErrorMessage, JsonCodec, Reply, ReplyWriter, Request, Response, StatusReport,
    };
}
