use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Startup configuration problems. These abort the program before the
/// terminal is switched into raw mode.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cell size must be positive")]
    ZeroCellSize,

    #[error("canvas must be positive in both dimensions, got {width}x{height} px")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("grid of {width}x{height} cells is too small, need at least {min_width}x{min_height}")]
    GridTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    #[error("grid of {width}x{height} cells exceeds the supported size")]
    GridTooLarge { width: u32, height: u32 },

    #[error("tick interval must be at least {min_ms} ms, got {got_ms} ms")]
    TickTooShort { got_ms: u64, min_ms: u64 },

    #[error("failed to read settings file {path}")]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed settings file {path}")]
    ParseSettings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Lifecycle misuse reported by [`crate::session::Session`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum SessionError {
    #[error("a session is already running")]
    AlreadyRunning,

    #[error("restart is only available after game over")]
    NotGameOver,
}
