//! Message type discriminators.
//!
//! Tags are published wire identifiers. Never rename one or point it at a
//! different payload shape.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BounceError;

/// Discriminator carried in `Container.type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Raw,
    Invite,
    NickChange,
    NetData,
    ChanData,
    Whois,
    Clear,
    Delete,
    ChanList,
    CmdResponse,
    Message,
    Kick,
    Mode,
    Close,
    Open,
}

/// Payload shape a discriminator resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    RawMessage,
    Invite,
    NickChange,
    NetData,
    ChanList,
    CommandResponse,
    ClearHistory,
    WhoisData,
    Message,
    /// No typed fields; the object is carried through untouched.
    Opaque,
}

impl MessageType {
    pub const ALL: [MessageType; 15] = [
        MessageType::Raw,
        MessageType::Invite,
        MessageType::NickChange,
        MessageType::NetData,
        MessageType::ChanData,
        MessageType::Whois,
        MessageType::Clear,
        MessageType::Delete,
        MessageType::ChanList,
        MessageType::CmdResponse,
        MessageType::Message,
        MessageType::Kick,
        MessageType::Mode,
        MessageType::Close,
        MessageType::Open,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MessageType::Raw => "raw",
            MessageType::Invite => "invite",
            MessageType::NickChange => "nickchange",
            MessageType::NetData => "netdata",
            MessageType::ChanData => "chandata",
            MessageType::Whois => "whois",
            MessageType::Clear => "clear",
            MessageType::Delete => "delete",
            MessageType::ChanList => "chanlist",
            MessageType::CmdResponse => "cmdresponse",
            MessageType::Message => "message",
            MessageType::Kick => "kick",
            MessageType::Mode => "mode",
            MessageType::Close => "close",
            MessageType::Open => "open",
        }
    }

    pub fn shape(self) -> Shape {
        match self {
            MessageType::Raw => Shape::RawMessage,
            MessageType::Invite => Shape::Invite,
            MessageType::NickChange => Shape::NickChange,
            MessageType::NetData => Shape::NetData,
            MessageType::Whois => Shape::WhoisData,
            MessageType::Clear => Shape::ClearHistory,
            MessageType::ChanList => Shape::ChanList,
            MessageType::CmdResponse => Shape::CommandResponse,
            MessageType::ChanData
            | MessageType::Message
            | MessageType::Kick
            | MessageType::Mode => Shape::Message,
            MessageType::Delete | MessageType::Close | MessageType::Open => Shape::Opaque,
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = BounceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| BounceError::UnknownType(s.to_owned()))
    }
}
