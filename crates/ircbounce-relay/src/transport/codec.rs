//! Decode-once codec for text frames.
//!
//! - Frame bytes => `Container` => typed `Payload`, in one pass
//! - Size limit enforced before any JSON parsing
//! - Unknown `type` is rejected, or surfaced as `Inbound::Unknown` when the
//!   codec is configured to pass it through

use bytes::Bytes;
use ircbounce_core::{
    error::{BounceError, Result},
    protocol::{Container, Payload},
};

use crate::config::CodecSection;

#[derive(Debug)]
pub enum Inbound {
    Typed { payload: Payload, bytes_len: usize },
    Unknown { container: Container, bytes_len: usize },
}

impl Inbound {
    pub fn bytes_len(&self) -> usize {
        match self {
            Inbound::Typed { bytes_len, .. } | Inbound::Unknown { bytes_len, .. } => *bytes_len,
        }
    }
}

pub fn decode_frame(frame: Bytes, codec: &CodecSection) -> Result<Inbound> {
    let bytes_len = frame.len();
    if bytes_len > codec.max_frame_bytes {
        return Err(BounceError::PayloadTooLarge {
            size: bytes_len,
            limit: codec.max_frame_bytes,
        });
    }

    let container = Container::from_json_slice(&frame)?;
    match container.decode() {
        Ok(payload) => {
            tracing::debug!(msg_type = %payload.message_type(), bytes_len, "frame decoded");
            Ok(Inbound::Typed { payload, bytes_len })
        }
        Err(BounceError::UnknownType(t)) if codec.passthrough_unknown => {
            tracing::debug!(msg_type = %t, bytes_len, "unknown type passed through");
            Ok(Inbound::Unknown {
                container,
                bytes_len,
            })
        }
        Err(e) => Err(e),
    }
}

pub fn encode_payload(payload: &Payload) -> Result<Bytes> {
    encode_container(&Container::wrap(payload)?)
}

pub fn encode_container(container: &Container) -> Result<Bytes> {
    serde_json::to_vec(container)
        .map(Bytes::from)
        .map_err(|e| BounceError::Internal(format!("envelope encode failed: {e}")))
}
