//! ircbounce relay library entry.
//!
//! Sits between a transport and the protocol core: strict configuration,
//! the decode-once frame codec, and the envelope stream normalizer used by
//! the `ircbounce-inspect` binary and by integration tests.

pub mod config;
pub mod inspect;
pub mod transport;
