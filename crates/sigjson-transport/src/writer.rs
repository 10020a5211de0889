//! Line-oriented reply output

use crate::codec::{CodecError, JsonCodec};
use crate::message::Reply;
use parking_lot::Mutex;
use std::io::Write;

/// Writes replies to an output stream, one JSON document per line
///
/// Each reply is encoded in full before the sink is locked and then written
/// with a single `write_all`, so replies emitted from several threads never
/// interleave within a line.
pub struct ReplyWriter<W: Write> {
    sink: Mutex<W>,
    codec: &'static JsonCodec,
}

impl ReplyWriter<std::io::Stdout> {
    /// Writer for the process's standard output
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ReplyWriter<W> {
    /// Create a writer over `sink`
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
            codec: JsonCodec::shared(),
        }
    }

    /// Encode and write one reply, returning any failure
    pub fn try_emit<R: Reply + ?Sized>(&self, reply: &R) -> Result<(), CodecError> {
        let line = self.codec.encode_line(reply)?;

        let mut sink = self.sink.lock();
        sink.write_all(line.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    /// Encode and write one reply
    ///
    /// Failures are logged to the diagnostic stream and swallowed; the return
    /// value only reports whether the line was written.
    pub fn emit<R: Reply + ?Sized>(&self, reply: &R) -> bool {
        match self.try_emit(reply) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(
                    reply_type = reply.reply_type(),
                    error = %err,
                    "failed to emit reply"
                );
                false
            }
        }
    }

    /// Consume the writer and return the underlying sink
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }
}
