// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, TaskrankError};
use crate::types::StorageMode;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = TaskrankError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.gateway, raw.storage, raw.logging))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_gateway(cfg)?;
    validate_storage(cfg)?;
    Ok(())
}

fn validate_gateway(cfg: &RawConfigFile) -> Result<()> {
    let endpoint = cfg.gateway.endpoint.trim();
    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        return Err(TaskrankError::ConfigError(format!(
            "[gateway].endpoint must be an http:// or https:// URL (got '{}')",
            cfg.gateway.endpoint
        )));
    }

    if cfg.gateway.timeout_ms == 0 {
        return Err(TaskrankError::ConfigError(
            "[gateway].timeout_ms must be >= 1 (got 0)".to_string(),
        ));
    }

    if cfg.gateway.strategy.trim().is_empty() {
        return Err(TaskrankError::ConfigError(
            "[gateway].strategy must not be blank".to_string(),
        ));
    }

    Ok(())
}

fn validate_storage(cfg: &RawConfigFile) -> Result<()> {
    // The directory is irrelevant for the in-memory snapshot.
    if cfg.storage.mode == StorageMode::File && cfg.storage.dir.as_os_str().is_empty() {
        return Err(TaskrankError::ConfigError(
            "[storage].dir must not be empty when mode = \"file\"".to_string(),
        ));
    }
    Ok(())
}
