//! Protocol modules: envelope, discriminators, and payload records.
//!
//! - `container`: the `{type, object}` JSON envelope.
//! - `tag`: the closed discriminator set and the shape each tag maps to.
//! - `payload`: exhaustive dispatch from discriminator to typed record.
//! - `messages`, `whois`, `preview`: the records themselves.
//! - `field`: the best-effort extractor every decoder is built on.
//!
//! Record decoders are total: malformed input degrades to zero-valued
//! fields and is never reported as an error.

pub mod container;
pub mod field;
pub mod messages;
pub mod payload;
pub mod preview;
pub mod tag;
pub mod whois;

pub use container::Container;
pub use field::{Decode, FieldValue, Fields};
pub use messages::{
    ChanList, ClearHistory, CommandResponse, Invite, Message, NetData, NickChange, RawMessage,
};
pub use payload::Payload;
pub use preview::{Image, Preview, Text};
pub use tag::{MessageType, Shape};
pub use whois::WhoisData;
