//! Configuration schema types for bundleguard.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod css;
mod logging;
mod paths;
mod sanitize;
mod verify;

pub use css::*;
pub use logging::*;
pub use paths::*;
pub use sanitize::*;
pub use verify::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Every option has a default matching the standard `dist/` layout, so an
/// absent or empty `bundleguard.toml` is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BundleguardConfig {
    pub paths: PathsConfig,
    pub sanitize: SanitizeConfig,
    pub verify: VerifyConfig,
    pub css: CssConfig,
    pub logging: LoggingConfig,
}
