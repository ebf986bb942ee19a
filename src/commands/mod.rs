//! Command implementations for the FPL bonus CLI

pub mod roster_summary;
pub mod standings;


use std::path::PathBuf;

use crate::{config::default_config_path, BonusError, Result, CONFIG_PATH_ENV_VAR};

/// Pick the config file: explicit path, then `FPL_BONUS_CONFIG`, then the
/// per-user default location.
pub fn resolve_config_path(config: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = config {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_config_path().ok_or_else(|| BonusError::MissingConfigPath {
        env_var: CONFIG_PATH_ENV_VAR.to_string(),
    })
}
