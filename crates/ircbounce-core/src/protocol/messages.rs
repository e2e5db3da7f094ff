//! Bouncer <-> client payload records.
//!
//! Serde attributes pin the wire names. `Decode` impls read the same names
//! through [`Fields`], so a record encoded with serde decodes back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::field::{Decode, Fields};
use super::preview::Preview;

/// A chat line or channel event.
///
/// `id` and `timestamp` are assigned by the bouncer's history store; this
/// crate only carries them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    pub id: i64,
    pub network: String,
    pub channel: String,
    /// Unix epoch seconds.
    pub timestamp: i64,
    pub sender: String,
    /// IRC command the line came from (`privmsg`, `action`, `join`, ...).
    pub command: String,
    pub message: String,
    /// Set when the bouncer's own user sent the line.
    #[serde(rename = "ownmsg")]
    pub own_msg: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<Preview>,
}

impl Decode for Message {
    fn decode(value: &Value) -> Self {
        let f = Fields::new(value);
        Self {
            id: f.get("id"),
            network: f.get("network"),
            channel: f.get("channel"),
            timestamp: f.get("timestamp"),
            sender: f.get("sender"),
            command: f.get("command"),
            message: f.get("message"),
            own_msg: f.get("ownmsg"),
            preview: f.nested("preview"),
        }
    }
}

/// An unprocessed IRC line for (or from) a network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMessage {
    pub network: String,
    pub message: String,
}

impl Decode for RawMessage {
    fn decode(value: &Value) -> Self {
        let f = Fields::new(value);
        Self {
            network: f.get("network"),
            message: f.get("message"),
        }
    }
}

/// Our nick on `network` changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NickChange {
    pub network: String,
    pub nick: String,
}

impl Decode for NickChange {
    fn decode(value: &Value) -> Self {
        let f = Fields::new(value);
        Self {
            network: f.get("network"),
            nick: f.get("nick"),
        }
    }
}

/// Connection descriptor for one IRC network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetData {
    pub name: String,
    pub user: String,
    pub realname: String,
    pub nick: String,
    pub ip: String,
    pub port: u16,
    pub ssl: bool,
    pub connected: bool,
}

impl Decode for NetData {
    fn decode(value: &Value) -> Self {
        let f = Fields::new(value);
        Self {
            name: f.get("name"),
            user: f.get("user"),
            realname: f.get("realname"),
            nick: f.get("nick"),
            ip: f.get("ip"),
            port: f.get("port"),
            ssl: f.get("ssl"),
            connected: f.get("connected"),
        }
    }
}

/// Channels currently joined on a network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChanList {
    pub network: String,
    pub list: Vec<String>,
}

impl Decode for ChanList {
    fn decode(value: &Value) -> Self {
        let f = Fields::new(value);
        Self {
            network: f.get("network"),
            list: f.get("list"),
        }
    }
}

/// Someone invited us to a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invite {
    pub network: String,
    pub channel: String,
    pub sender: String,
}

impl Decode for Invite {
    fn decode(value: &Value) -> Self {
        let f = Fields::new(value);
        Self {
            network: f.get("network"),
            channel: f.get("channel"),
            sender: f.get("sender"),
        }
    }
}

/// Result of a client-issued internal command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(rename = "simple-message")]
    pub simple_message: String,
    pub message: String,
}

impl Decode for CommandResponse {
    fn decode(value: &Value) -> Self {
        let f = Fields::new(value);
        Self {
            success: f.get("success"),
            simple_message: f.get("simple-message"),
            message: f.get("message"),
        }
    }
}

/// Tells clients to drop buffered history for a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClearHistory {
    pub network: String,
    pub channel: String,
}

impl Decode for ClearHistory {
    fn decode(value: &Value) -> Self {
        let f = Fields::new(value);
        Self {
            network: f.get("network"),
            channel: f.get("channel"),
        }
    }
}
