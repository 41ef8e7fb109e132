use serde::{Deserialize, Serialize};

/// Verifier reporting options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VerifyConfig {
    /// Sample match offsets reported per pattern (valid range: 1-100).
    pub max_samples: u32,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self { max_samples: 5 }
    }
}
