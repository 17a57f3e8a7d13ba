//! Error types for configuration and level construction.
//!
//! Both are construction-time failures: once a [`Grid`](crate::Grid) is built
//! and a [`GameConfig`](crate::GameConfig) validated, frame stepping cannot fail.

use thiserror::Error;

/// Invalid tuning constants. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("tile size must be between 2 and {max} pixels, got {0}", max = crate::config::MAX_TILE_SIZE)]
    TileSize(i32),

    #[error("viewport must be positive, got {width}x{height}")]
    Viewport { width: i32, height: i32 },

    #[error("fps must be positive")]
    Fps,

    #[error("{name} must be {expected}, got {value}")]
    Physics {
        name: &'static str,
        expected: &'static str,
        value: f32,
    },

    #[error("invalid value for {key}: {value:?}")]
    Parse { key: &'static str, value: String },
}

/// A level description that cannot produce a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("level description has no rows")]
    Empty,

    #[error("level of {cols}x{rows} tiles does not fit in world coordinates")]
    TooLarge { cols: usize, rows: usize },
}
