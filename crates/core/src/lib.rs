//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the movement and collision engine plus the per-frame
//! level state machine. It has **no dependencies** on terminals, files or
//! clocks:
//!
//! - **Deterministic**: the same grid and intent sequence always produce the
//!   same frames
//! - **Frame-stepped**: callers own pacing and call one update per tick
//! - **Infallible at runtime**: invalid levels and constants are rejected at
//!   construction
//!
//! # Module Structure
//!
//! - [`grid`]: immutable solid/goal tiles built from level text
//! - [`body`]: the player's box, velocity and jump-assist timers
//! - [`runner`]: steps the body, moves the camera, classifies outcomes
//! - [`config`]: physics and viewport constants with validation
//! - [`error`]: construction-time errors
//!
//! # Movement Rules
//!
//! - **Axis-separated collision**: X is resolved against every solid tile,
//!   then Y
//! - **Jump buffer**: a press is remembered for 6 frames
//! - **Coyote time**: walking off a ledge still allows a jump for a few frames
//! - **Terminal velocity**: falling speed is capped at one tile per frame
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use mini_platformer_core::{GameConfig, Grid, LevelRunner};
//! use mini_platformer_types::{Intent, Outcome};
//!
//! let config = GameConfig::default();
//! let grid = Arc::new(Grid::default_map(config.physics.tile_size));
//! let mut runner = LevelRunner::new(grid, &config);
//!
//! for _ in 0..60 {
//!     let report = runner.run_frame(Intent::IDLE);
//!     assert_eq!(report.outcome, Outcome::Running);
//! }
//! assert!(runner.body().on_ground);
//! ```

pub mod body;
pub mod config;
pub mod error;
pub mod grid;
pub mod runner;

pub use mini_platformer_types as types;

pub use body::{Body, Velocity};
pub use config::{GameConfig, Physics, Viewport, MAX_TILE_SIZE};
pub use error::{ConfigError, GridError};
pub use grid::{Grid, Tile, DEFAULT_MAP};
pub use runner::{camera_offset, classify, FrameReport, LevelRunner};
