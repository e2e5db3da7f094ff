//! Envelope stream normalizer behind `ircbounce-inspect`.
//!
//! Reads one JSON envelope per line, runs it through the frame codec, and
//! writes the re-encoded envelope. Rejected lines are logged and skipped.
//!
//! Lines are read as raw bytes, so invalid UTF-8 is just another rejected
//! frame. At most `max_frame_bytes + 2` bytes of a line (room for `\r\n`)
//! are buffered; the rest of an oversized line is drained without being kept.

use bytes::Bytes;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use ircbounce_core::error::{BounceError, Result};

use crate::config::CodecSection;
use crate::transport::{decode_frame, encode_container, encode_payload, Inbound};

/// Per-run counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InspectStats {
    pub decoded: u64,
    pub passed_through: u64,
    pub rejected: u64,
}

pub async fn normalize<R, W>(
    mut reader: R,
    mut writer: W,
    codec: &CodecSection,
) -> Result<InspectStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut stats = InspectStats::default();
    let mut buf = Vec::new();
    let mut line_no: u64 = 0;

    while let Some(line_len) = read_line_capped(&mut reader, &mut buf, codec.max_frame_bytes)
        .await
        .map_err(io_err)?
    {
        line_no += 1;
        trim_line_end(&mut buf);
        if buf.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let decoded = if buf.len() > codec.max_frame_bytes {
            Err(BounceError::PayloadTooLarge {
                size: line_len,
                limit: codec.max_frame_bytes,
            })
        } else {
            decode_frame(Bytes::copy_from_slice(&buf), codec)
        };

        let inbound = match decoded {
            Ok(inbound) => inbound,
            Err(e) => {
                stats.rejected += 1;
                tracing::warn!(
                    line = line_no,
                    code = e.client_code().as_str(),
                    error = %e,
                    "frame rejected"
                );
                continue;
            }
        };

        let bytes_len = inbound.bytes_len();
        let out = match inbound {
            Inbound::Typed { payload, .. } => {
                stats.decoded += 1;
                encode_payload(&payload)?
            }
            Inbound::Unknown { container, .. } => {
                stats.passed_through += 1;
                tracing::warn!(
                    line = line_no,
                    bytes_len,
                    msg_type = %container.msg_type,
                    "unknown message type"
                );
                encode_container(&container)?
            }
        };
        tracing::debug!(line = line_no, bytes_len, "envelope normalized");

        writer.write_all(&out).await.map_err(io_err)?;
        writer.write_all(b"\n").await.map_err(io_err)?;
    }

    writer.flush().await.map_err(io_err)?;
    Ok(stats)
}

/// Read one `\n`-terminated line into `buf`, keeping at most `limit + 2`
/// bytes of it. Returns the full line length (terminator included), or
/// `None` at end of input.
async fn read_line_capped<R>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    limit: usize,
) -> std::io::Result<Option<usize>>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    let mut total = 0usize;

    loop {
        let chunk = reader.fill_buf().await?;
        if chunk.is_empty() {
            return Ok((total > 0).then_some(total));
        }

        let (used, done) = match chunk.iter().position(|&b| b == b'\n') {
            Some(i) => (i + 1, true),
            None => (chunk.len(), false),
        };
        let room = limit.saturating_add(2).saturating_sub(buf.len());
        buf.extend_from_slice(&chunk[..used.min(room)]);
        total += used;
        reader.consume(used);

        if done {
            return Ok(Some(total));
        }
    }
}

fn trim_line_end(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
}

fn io_err(e: std::io::Error) -> BounceError {
    BounceError::Internal(format!("io: {e}"))
}
