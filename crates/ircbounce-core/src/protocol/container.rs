//! Wire envelope (JSON).
//!
//! `object` is kept as a dynamic `Value` until the discriminator is resolved,
//! then decoded once into a typed [`Payload`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BounceError, Result};

use super::payload::Payload;
use super::tag::MessageType;

/// Envelope pairing a discriminator with its payload object.
///
/// `type` stays a plain string here so an envelope with an unknown tag can
/// still be parsed, logged, or forwarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// Message type (field name is `type` in JSON).
    #[serde(rename = "type")]
    pub msg_type: String,
    /// Payload; shape determined by `msg_type`.
    #[serde(default)]
    pub object: Value,
}

impl Container {
    pub fn new(msg_type: MessageType, object: Value) -> Self {
        Self {
            msg_type: msg_type.as_str().to_owned(),
            object,
        }
    }

    /// Wrap a typed payload for sending.
    pub fn wrap(payload: &Payload) -> Result<Self> {
        Ok(Self::new(payload.message_type(), payload.to_object()?))
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s)
            .map_err(|e| BounceError::BadRequest(format!("invalid envelope json: {e}")))
    }

    pub fn from_json_slice(b: &[u8]) -> Result<Self> {
        serde_json::from_slice(b)
            .map_err(|e| BounceError::BadRequest(format!("invalid envelope json: {e}")))
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| BounceError::Internal(format!("envelope encode failed: {e}")))
    }

    /// Resolve the discriminator.
    pub fn message_type(&self) -> Result<MessageType> {
        self.msg_type.parse()
    }

    /// Resolve the discriminator and decode the payload.
    ///
    /// The only failure is an unknown discriminator; a malformed `object`
    /// still decodes, to zero-valued fields.
    pub fn decode(&self) -> Result<Payload> {
        let msg_type = self.message_type()?;
        Ok(Payload::decode(msg_type, &self.object))
    }
}
