use serde::{Deserialize, Serialize};

/// What the decoder does with bits left over once the input is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingBits {
    /// Drop them silently.
    #[default]
    Discard,
    /// Fail with [`CodecError::TrailingBits`](crate::CodecError::TrailingBits).
    Reject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub trailing_bits: TrailingBits,
}

impl CodecConfig {
    pub fn strict() -> Self {
        Self {
            trailing_bits: TrailingBits::Reject,
        }
    }
}
