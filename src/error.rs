use std::io;

use thiserror::Error;

/// Rejected session parameters.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid of {tiles} tiles is too small (minimum {min})")]
    GridTooSmall { tiles: u16, min: u16 },
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
}

/// A raw vector that is not one of the four cardinal unit steps.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("({dx}, {dy}) is not a cardinal unit vector")]
pub struct InvalidDirection {
    pub dx: i32,
    pub dy: i32,
}

/// A snake body with no segments.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("snake needs at least one segment")]
pub struct EmptySnake;

/// Top-level failure of the terminal front end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
