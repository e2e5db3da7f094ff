//! Relay config loader (strict parsing).
//!
//! `ircbounce-inspect` falls back to `RelayConfig::default()` when no file is
//! given; a file, once named, must exist and validate.

pub mod schema;

use std::fs;

use ircbounce_core::error::{BounceError, Result};

pub use schema::{CodecSection, LogSection, RelayConfig};

pub fn load_from_file(path: &str) -> Result<RelayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| BounceError::Internal(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<RelayConfig> {
    let cfg: RelayConfig = serde_yaml::from_str(s)
        .map_err(|e| BounceError::BadRequest(format!("invalid relay config yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
