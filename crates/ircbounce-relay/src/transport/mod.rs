//! Frame-level codec used by whichever transport carries the envelopes.

pub mod codec;

pub use codec::{decode_frame, encode_container, encode_payload, Inbound};
