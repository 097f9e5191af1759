//! Error types for loading and checking a simulation configuration.
//!
//! The engine itself has no error type: its preconditions are established
//! here, before any particle exists.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed configuration")]
    Yaml(#[from] serde_yaml::Error),
    #[error("window must be at least 1x1, got {width}x{height}")]
    EmptyWindow { width: u32, height: u32 },
    #[error("fps must be non-zero")]
    ZeroFps,
    #[error("arena {width}x{height} leaves no room for particles of radius {radius}")]
    DegenerateArena { width: f64, height: f64, radius: f64 },
    #[error("at least one particle group is required")]
    NoGroups,
    #[error("group {name:?} has {actual} particles but every group must have {expected}")]
    UnevenGroups {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("interactivity matrix must be {expected}x{expected}")]
    MatrixShape { expected: usize },
    #[error("interactivity coefficient at ({row}, {column}) is not finite")]
    NonFiniteCoefficient { row: usize, column: usize },
    #[error("physics parameter {name} must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },
}
