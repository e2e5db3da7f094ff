//! Top-level facade crate for ircbounce.
//!
//! Re-exports the protocol core and the relay library so users can depend on a single crate.

pub mod core {
    pub use ircbounce_core::*;
}

pub mod relay {
    pub use ircbounce_relay::*;
}
