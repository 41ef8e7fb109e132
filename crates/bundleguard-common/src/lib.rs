pub mod errors;
pub mod types;

pub use errors::{BundleguardError, ConfigError, PipelineError};
pub use types::SanitizeMode;

pub type Result<T> = std::result::Result<T, BundleguardError>;
