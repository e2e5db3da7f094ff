use serde::Deserialize;
use ircbounce_core::error::{BounceError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelayConfig {
    pub version: u32,

    #[serde(default)]
    pub codec: CodecSection,

    #[serde(default)]
    pub log: LogSection,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            codec: CodecSection::default(),
            log: LogSection::default(),
        }
    }
}

impl RelayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(BounceError::UnsupportedVersion(self.version));
        }

        self.codec.validate()?;
        self.log.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodecSection {
    #[serde(default = "default_max_frame_bytes")]
    pub max_frame_bytes: usize,

    /// Forward envelopes with an unknown `type` as-is instead of rejecting them.
    #[serde(default)]
    pub passthrough_unknown: bool,
}

impl Default for CodecSection {
    fn default() -> Self {
        Self {
            max_frame_bytes: default_max_frame_bytes(),
            passthrough_unknown: false,
        }
    }
}

impl CodecSection {
    pub fn validate(&self) -> Result<()> {
        if !(256..=16 * 1024 * 1024).contains(&self.max_frame_bytes) {
            return Err(BounceError::BadRequest(
                "codec.max_frame_bytes must be between 256 and 16777216".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl LogSection {
    pub fn validate(&self) -> Result<()> {
        if self.filter.trim().is_empty() {
            return Err(BounceError::BadRequest("log.filter must not be empty".into()));
        }
        Ok(())
    }
}

fn default_max_frame_bytes() -> usize {
    65536
}
fn default_log_filter() -> String {
    "info".into()
}
