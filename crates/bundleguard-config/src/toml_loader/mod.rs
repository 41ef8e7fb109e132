//! TOML config file loading and creation.

mod loader;
mod paths;
mod template;


pub use loader::{load_from_path, load_resolved};
pub use paths::{create_default_config, resolve_config_path, user_config_path, PROJECT_CONFIG_NAME};
pub use template::default_config_toml;
