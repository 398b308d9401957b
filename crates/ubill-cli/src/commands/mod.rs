//! CLI subcommands.

pub mod config;
pub mod extract;
pub mod pages;

use ubill_core::UbillConfig;

/// Load configuration from `--config`, falling back to defaults.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<UbillConfig> {
    match config_path {
        Some(path) => Ok(UbillConfig::from_file(std::path::Path::new(path))?),
        None => Ok(UbillConfig::default()),
    }
}
