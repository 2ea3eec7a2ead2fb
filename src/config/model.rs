// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::gateway::http::DEFAULT_ENDPOINT;
use crate::types::{LogLevel, StorageMode};

/// Configuration exactly as read from a TOML file, before validation.
///
/// ```toml
/// [gateway]
/// endpoint = "http://127.0.0.1:8000/api/tasks/analyze/"
/// timeout_ms = 10000
/// strategy = "smart_balance"
///
/// [storage]
/// mode = "file"
/// dir = ".taskrank"
///
/// [logging]
/// level = "info"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub storage: StorageSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

/// Validated configuration. Build one with `ConfigFile::try_from(raw)`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub gateway: GatewaySection,
    pub storage: StorageSection,
    pub logging: LoggingSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        gateway: GatewaySection,
        storage: StorageSection,
        logging: LoggingSection,
    ) -> Self {
        Self {
            gateway,
            storage,
            logging,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(
            GatewaySection::default(),
            StorageSection::default(),
            LoggingSection::default(),
        )
    }
}

/// `[gateway]` section: where and how to reach the scoring service.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySection {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Whole-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Strategy name sent when the caller does not pick one. Passed through
    /// to the scoring service as-is.
    #[serde(default = "default_strategy")]
    pub strategy: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_strategy() -> String {
    "smart_balance".to_string()
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
            strategy: default_strategy(),
        }
    }
}

/// `[storage]` section: where the completed-tasks snapshot is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSection {
    #[serde(default)]
    pub mode: StorageMode,

    /// Directory holding `completedTasks.json` in file mode.
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".taskrank")
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            mode: StorageMode::default(),
            dir: default_storage_dir(),
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSection {
    /// If unset, `TASKRANK_LOG` or `info` is used.
    #[serde(default)]
    pub level: Option<LogLevel>,
}
