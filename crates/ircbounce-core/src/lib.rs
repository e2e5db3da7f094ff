//! ircbounce core: the bouncer <-> client envelope and its typed payloads.
//!
//! This crate defines the wire-level contracts shared by the bouncer backend
//! and its clients: the closed set of message types, the `Container` envelope,
//! and one total decoder per payload record. It carries no transport or
//! runtime dependencies so it can be embedded on either side of the socket.
//!
//! # Decoding guarantees
//! Payload decoders never fail. A non-mapping input yields the zero record,
//! and an absent or mistyped field yields the zero value for that field while
//! the remaining fields still decode. Callers validate business rules (empty
//! network names, zero ports) themselves.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{BounceError, Result};
pub use protocol::{Container, Decode, MessageType, Payload, Shape};
