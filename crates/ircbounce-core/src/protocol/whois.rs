use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::field::{Decode, Fields};

/// WHOIS reply for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhoisData {
    /// Channel name -> the user's prefix there (`@`, `+`, or empty).
    pub channels: BTreeMap<String, String>,
    pub nick: String,
    pub user: String,
    pub host: String,
    #[serde(rename = "realname")]
    pub real_name: String,
    pub away: String,
    pub server: String,
    #[serde(rename = "server-info")]
    pub server_info: String,
    /// Idle seconds.
    #[serde(rename = "idle")]
    pub idle_time: i64,
    #[serde(rename = "secure-connection")]
    pub secure_conn: bool,
    pub operator: bool,
}

impl Decode for WhoisData {
    fn decode(value: &Value) -> Self {
        let f = Fields::new(value);
        Self {
            channels: f.get("channels"),
            nick: f.get("nick"),
            user: f.get("user"),
            host: f.get("host"),
            real_name: f.get("realname"),
            away: f.get("away"),
            server: f.get("server"),
            server_info: f.get("server-info"),
            idle_time: f.get("idle"),
            secure_conn: f.get("secure-connection"),
            operator: f.get("operator"),
        }
    }
}
