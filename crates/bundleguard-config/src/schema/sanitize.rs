//! Sanitizer configuration types.

use bundleguard_common::SanitizeMode;
use serde::{Deserialize, Serialize};

/// Which replacement table each sanitize pass uses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SanitizeConfig {
    /// Mode used while assembling the distributables.
    pub assemble_mode: SanitizeMode,
    /// Mode used by the standalone `sanitize` pass.
    pub standalone_mode: SanitizeMode,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            assemble_mode: SanitizeMode::EscapeUnicode,
            standalone_mode: SanitizeMode::MangleAscii,
        }
    }
}
