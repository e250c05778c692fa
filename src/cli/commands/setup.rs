//! Config file management.

use std::path::Path;

use crate::config::{self, Config};
use crate::error::Result;

/// Write the default config, refusing to replace a file unless `force`.
pub fn cmd_init_config(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = config::save(&Config::default(), config_path, force)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
