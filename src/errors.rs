// src/errors.rs

//! Crate-wide error type and result alias.

use std::fmt;

use thiserror::Error;

use crate::gateway::GatewayError;
use crate::task::ValidationError;

/// Which positional collection an out-of-range index referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Active,
    Completed,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Active => f.write_str("active"),
            Collection::Completed => f.write_str("completed"),
        }
    }
}

#[derive(Error, Debug)]
pub enum TaskrankError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Task not found: position {position} is out of range for the {collection} list ({len} tasks)")]
    NotFound {
        collection: Collection,
        position: usize,
        len: usize,
    },

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Scoring gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// The top-ranked task has no counterpart in the active list.
    #[error("Ranked task '{title}' is not in the active list")]
    UnrankedTask { title: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TaskrankError>;
