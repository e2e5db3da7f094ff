//! Typed payloads, one variant per discriminator.

use serde::Serialize;
use serde_json::Value;

use crate::error::{BounceError, Result};

use super::field::Decode;
use super::messages::{
    ChanList, ClearHistory, CommandResponse, Invite, Message, NetData, NickChange, RawMessage,
};
use super::tag::{MessageType, Shape};
use super::whois::WhoisData;

/// A decoded envelope payload.
///
/// Variants sharing a record type (`ChanData`/`Message`/`Kick`/`Mode` and the
/// opaque `Delete`/`Close`/`Open`) stay distinct so the discriminator survives
/// a decode/encode cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Raw(RawMessage),
    Invite(Invite),
    NickChange(NickChange),
    NetData(NetData),
    ChanData(Message),
    Whois(WhoisData),
    Clear(ClearHistory),
    Delete(Value),
    ChanList(ChanList),
    CmdResponse(CommandResponse),
    Message(Message),
    Kick(Message),
    Mode(Message),
    Close(Value),
    Open(Value),
}

impl Payload {
    /// Decode `object` as the shape `msg_type` calls for. Never fails.
    pub fn decode(msg_type: MessageType, object: &Value) -> Self {
        match msg_type {
            MessageType::Raw => Payload::Raw(RawMessage::decode(object)),
            MessageType::Invite => Payload::Invite(Invite::decode(object)),
            MessageType::NickChange => Payload::NickChange(NickChange::decode(object)),
            MessageType::NetData => Payload::NetData(NetData::decode(object)),
            MessageType::ChanData => Payload::ChanData(Message::decode(object)),
            MessageType::Whois => Payload::Whois(WhoisData::decode(object)),
            MessageType::Clear => Payload::Clear(ClearHistory::decode(object)),
            MessageType::Delete => Payload::Delete(object.clone()),
            MessageType::ChanList => Payload::ChanList(ChanList::decode(object)),
            MessageType::CmdResponse => Payload::CmdResponse(CommandResponse::decode(object)),
            MessageType::Message => Payload::Message(Message::decode(object)),
            MessageType::Kick => Payload::Kick(Message::decode(object)),
            MessageType::Mode => Payload::Mode(Message::decode(object)),
            MessageType::Close => Payload::Close(object.clone()),
            MessageType::Open => Payload::Open(object.clone()),
        }
    }

    pub fn message_type(&self) -> MessageType {
        match self {
            Payload::Raw(_) => MessageType::Raw,
            Payload::Invite(_) => MessageType::Invite,
            Payload::NickChange(_) => MessageType::NickChange,
            Payload::NetData(_) => MessageType::NetData,
            Payload::ChanData(_) => MessageType::ChanData,
            Payload::Whois(_) => MessageType::Whois,
            Payload::Clear(_) => MessageType::Clear,
            Payload::Delete(_) => MessageType::Delete,
            Payload::ChanList(_) => MessageType::ChanList,
            Payload::CmdResponse(_) => MessageType::CmdResponse,
            Payload::Message(_) => MessageType::Message,
            Payload::Kick(_) => MessageType::Kick,
            Payload::Mode(_) => MessageType::Mode,
            Payload::Close(_) => MessageType::Close,
            Payload::Open(_) => MessageType::Open,
        }
    }

    pub fn shape(&self) -> Shape {
        self.message_type().shape()
    }

    /// Message-shaped payloads expose their record regardless of tag.
    pub fn as_message(&self) -> Option<&Message> {
        match self {
            Payload::ChanData(m) | Payload::Message(m) | Payload::Kick(m) | Payload::Mode(m) => {
                Some(m)
            }
            _ => None,
        }
    }

    /// Encode the payload into the wire `object` value.
    pub fn to_object(&self) -> Result<Value> {
        match self {
            Payload::Raw(p) => encode(p),
            Payload::Invite(p) => encode(p),
            Payload::NickChange(p) => encode(p),
            Payload::NetData(p) => encode(p),
            Payload::Whois(p) => encode(p),
            Payload::Clear(p) => encode(p),
            Payload::ChanList(p) => encode(p),
            Payload::CmdResponse(p) => encode(p),
            Payload::ChanData(p) | Payload::Message(p) | Payload::Kick(p) | Payload::Mode(p) => {
                encode(p)
            }
            Payload::Delete(v) | Payload::Close(v) | Payload::Open(v) => Ok(v.clone()),
        }
    }
}

fn encode<T: Serialize>(record: &T) -> Result<Value> {
    serde_json::to_value(record)
        .map_err(|e| BounceError::Internal(format!("payload encode failed: {e}")))
}
