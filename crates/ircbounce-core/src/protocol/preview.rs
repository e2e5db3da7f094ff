//! URL preview attached to a [`Message`](super::messages::Message).
//!
//! Only the data shape lives here; fetching pages and probing images is the
//! preview fetcher's job.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::field::{Decode, Fields};

/// Preview of the first link in a message. Either part may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

impl Preview {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.image.is_none()
    }
}

impl Decode for Preview {
    fn decode(value: &Value) -> Self {
        let f = Fields::new(value);
        Self {
            text: f.nested("text"),
            image: f.nested("image"),
        }
    }
}

/// Page metadata (OpenGraph title, description, site name).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Text {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "sitename", skip_serializing_if = "String::is_empty")]
    pub site_name: String,
}

impl Decode for Text {
    fn decode(value: &Value) -> Self {
        let f = Fields::new(value);
        Self {
            title: f.get("title"),
            description: f.get("description"),
            site_name: f.get("sitename"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub url: String,
    /// MIME type, e.g. `image/png`.
    #[serde(rename = "type")]
    pub mime: String,
    pub width: u64,
    pub height: u64,
}

impl Decode for Image {
    fn decode(value: &Value) -> Self {
        let f = Fields::new(value);
        Self {
            url: f.get("url"),
            mime: f.get("type"),
            width: f.get("width"),
            height: f.get("height"),
        }
    }
}
