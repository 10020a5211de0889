//! stdin/stdout request loop

use crate::dispatch::{Dispatcher, RequestHandler};
use crate::dry_run::DryRunHandler;
use anyhow::Context;
use sigjson_core::{BridgeConfig, ErrorCode};
use sigjson_transport::{CodecError, ErrorMessage, JsonCodec, ReplyWriter};
use std::io::{self, BufRead, Write};

/// Longest raw input echoed back as the subject of an INVALID_JSON reply
const MAX_SUBJECT_CHARS: usize = 256;

/// Counters reported when the loop ends
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoopStats {
    pub received: u64,
    pub succeeded: u64,
    pub failed: u64,
    pub malformed: u64,
}

enum Line {
    Complete,
    Blank,
    TooLong(usize),
    Eof,
}

/// Reads requests line by line and writes one reply per request
pub struct EventLoop<'a, H, W: Write> {
    dispatcher: &'a Dispatcher<H>,
    writer: &'a ReplyWriter<W>,
    codec: &'static JsonCodec,
    max_request_bytes: usize,
}

impl<'a, H: RequestHandler, W: Write> EventLoop<'a, H, W> {
    pub fn new(
        dispatcher: &'a Dispatcher<H>,
        writer: &'a ReplyWriter<W>,
        max_request_bytes: usize,
    ) -> Self {
        Self {
            dispatcher,
            writer,
            codec: JsonCodec::shared(),
            max_request_bytes,
        }
    }

    /// Run until EOF on `input`
    ///
    /// Only a failure to read `input` ends the loop early.
    pub fn run<R: BufRead>(&self, mut input: R) -> io::Result<LoopStats> {
        let mut stats = LoopStats::default();
        let mut buf = Vec::new();

        loop {
            match read_line_bounded(&mut input, self.max_request_bytes, &mut buf)? {
                Line::Eof => break,
                Line::TooLong(len) => {
                    stats.received += 1;
                    stats.failed += 1;
                    tracing::warn!(len, limit = self.max_request_bytes, "request too large");
                    self.writer.emit(&ErrorMessage::new(
                        ErrorCode::RequestTooLarge,
                        format!(
                            "request of {len} bytes exceeds the limit of {} bytes",
                            self.max_request_bytes
                        ),
                        len.to_string(),
                    ));
                }
                Line::Blank => {}
                Line::Complete => self.handle_line(&buf, &mut stats),
            }
        }

        Ok(stats)
    }

    fn handle_line(&self, line: &[u8], stats: &mut LoopStats) {
        stats.received += 1;

        let request = match self.codec.decode_request(line) {
            Ok(request) => request,
            Err(CodecError::MalformedRequest { raw, message, id }) => {
                stats.malformed += 1;
                tracing::warn!(error = %message, "malformed request");
                let subject: String = raw.chars().take(MAX_SUBJECT_CHARS).collect();
                self.writer.emit(
                    &ErrorMessage::new(ErrorCode::InvalidJson, message, subject).with_id(id),
                );
                return;
            }
            Err(err) => {
                stats.failed += 1;
                tracing::error!(error = %err, "unexpected decode failure");
                return;
            }
        };

        let response = self.dispatcher.dispatch(&request);
        if response.is_success() {
            stats.succeeded += 1;
        } else {
            stats.failed += 1;
        }
        self.writer.emit(&response);
    }
}

/// Read one `\n`-terminated line into `buf`, without the terminator
///
/// A trailing `\r` is dropped and does not count towards `max`. A line made
/// only of whitespace is reported as blank whatever its length. A longer line
/// is consumed but not kept.
fn read_line_bounded<R: BufRead>(input: &mut R, max: usize, buf: &mut Vec<u8>) -> io::Result<Line> {
    buf.clear();
    let mut total = 0usize;
    let mut read_any = false;
    let mut blank = true;
    let mut last = None;

    loop {
        let available = match input.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            break;
        }
        read_any = true;

        let newline = available.iter().position(|&b| b == b'\n');
        let chunk = &available[..newline.unwrap_or(available.len())];
        total += chunk.len();
        blank &= chunk.iter().all(u8::is_ascii_whitespace);
        last = chunk.last().copied().or(last);

        // one spare byte so a `\r` sitting right after `max` bytes can be dropped
        let room = max.saturating_add(1).saturating_sub(buf.len());
        buf.extend_from_slice(&chunk[..chunk.len().min(room)]);

        let consumed = newline.map_or(available.len(), |i| i + 1);
        input.consume(consumed);
        if newline.is_some() {
            break;
        }
    }

    if !read_any {
        return Ok(Line::Eof);
    }
    if blank {
        buf.clear();
        return Ok(Line::Blank);
    }

    let len = if last == Some(b'\r') { total - 1 } else { total };
    if len > max {
        buf.clear();
        Ok(Line::TooLong(len))
    } else {
        buf.truncate(len);
        Ok(Line::Complete)
    }
}

/// Run the loop on the process's stdin and stdout
pub fn run_stdio(config: &BridgeConfig) -> anyhow::Result<LoopStats> {
    let dispatcher = Dispatcher::new(DryRunHandler::from_config(config));
    let writer = ReplyWriter::stdout();
    let event_loop = EventLoop::new(&dispatcher, &writer, config.max_request_bytes);

    tracing::info!(
        account = config.account.as_deref().unwrap_or("-"),
        "listening for JSON requests on stdin"
    );

    let stdin = io::stdin();
    let stats = event_loop
        .run(stdin.lock())
        .context("Failed to read requests from stdin")?;

    tracing::info!(
        received = stats.received,
        succeeded = stats.succeeded,
        failed = stats.failed,
        malformed = stats.malformed,
        "input closed"
    );

    Ok(stats)
}
