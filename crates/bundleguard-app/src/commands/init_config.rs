use bundleguard_common::Result;
use std::path::Path;

pub(super) fn run(path: &Path) -> Result<()> {
    bundleguard_config::create_default_config(path)?;
    Ok(())
}
