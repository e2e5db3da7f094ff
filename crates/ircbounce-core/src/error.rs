//! Shared error type across ircbounce crates.
//!
//! Payload decoders never produce these. Errors only arise at the envelope
//! edge: unparseable frames, unknown discriminators, size limits, config.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Malformed frame or config.
    BadRequest,
    /// Envelope carries a discriminator outside the known set.
    UnknownType,
    /// Frame exceeds the configured size limit.
    PayloadTooLarge,
    /// Unsupported config/protocol version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnknownType => "UNKNOWN_TYPE",
            ClientCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, BounceError>;

/// Unified error type used by core and relay.
#[derive(Debug, Error)]
pub enum BounceError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unknown message type: {0}")]
    UnknownType(String),
    #[error("payload too large: {size} > {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },
    #[error("unsupported version: {0}")]
    UnsupportedVersion(u32),
    #[error("internal: {0}")]
    Internal(String),
}

impl BounceError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            BounceError::BadRequest(_) => ClientCode::BadRequest,
            BounceError::UnknownType(_) => ClientCode::UnknownType,
            BounceError::PayloadTooLarge { .. } => ClientCode::PayloadTooLarge,
            BounceError::UnsupportedVersion(_) => ClientCode::UnsupportedVersion,
            BounceError::Internal(_) => ClientCode::Internal,
        }
    }
}
