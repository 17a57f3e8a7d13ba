//! Tuning constants for a run, grouped the way the simulation consumes them.

use std::time::Duration;

use crate::error::ConfigError;
use crate::types::{
    COYOTE_FRAMES, FPS, GRAVITY, JUMP_BUFFER_FRAMES, JUMP_SPEED, PLAYER_SPEED, TILE_SIZE,
    VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};

/// Largest accepted tile size in pixels.
pub const MAX_TILE_SIZE: i32 = 4096;

/// Movement constants read by [`Body::update`](crate::Body::update).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    /// Pixel size of one grid cell. Also the terminal fall speed.
    pub tile_size: i32,
    pub player_speed: f32,
    pub gravity: f32,
    /// Launch velocity; negative is upward.
    pub jump_speed: f32,
    pub jump_buffer_frames: u32,
    pub coyote_frames: u32,
}

impl Physics {
    /// Body size for this tile size: half a tile wide, 90% of a tile tall.
    pub fn body_size(&self) -> (i32, i32) {
        (self.tile_size / 2, (self.tile_size as f32 * 0.9) as i32)
    }

    /// Maximum downward velocity (one tile per frame).
    pub fn terminal_velocity(&self) -> f32 {
        self.tile_size as f32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=MAX_TILE_SIZE).contains(&self.tile_size) {
            return Err(ConfigError::TileSize(self.tile_size));
        }
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(ConfigError::Physics {
                name: "gravity",
                expected: "positive",
                value: self.gravity,
            });
        }
        if !self.jump_speed.is_finite() || self.jump_speed >= 0.0 {
            return Err(ConfigError::Physics {
                name: "jump speed",
                expected: "negative (upward)",
                value: self.jump_speed,
            });
        }
        if !self.player_speed.is_finite() || self.player_speed < 0.0 {
            return Err(ConfigError::Physics {
                name: "player speed",
                expected: "non-negative",
                value: self.player_speed,
            });
        }
        Ok(())
    }
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            player_speed: PLAYER_SPEED,
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            jump_buffer_frames: JUMP_BUFFER_FRAMES,
            coyote_frames: COYOTE_FRAMES,
        }
    }
}

/// Camera size in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
    }
}

/// Everything a session needs to know before the first frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub physics: Physics,
    pub viewport: Viewport,
    pub fps: u32,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        if self.viewport.width <= 0 || self.viewport.height <= 0 {
            return Err(ConfigError::Viewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::Fps);
        }
        Ok(())
    }

    /// Fixed frame duration.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }

    /// Number of whole frames covering `ms` milliseconds (rounded up).
    pub fn ms_to_frames(&self, ms: u32) -> u32 {
        let fps = self.fps.max(1) as u64;
        ((ms as u64 * fps + 999) / 1000) as u32
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            physics: Physics::default(),
            viewport: Viewport::default(),
            fps: FPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn body_size_follows_tile_size() {
        let p = Physics::default();
        assert_eq!(p.body_size(), (32, 57));
        let small = Physics {
            tile_size: 16,
            ..p
        };
        assert_eq!(small.body_size(), (8, 14));
    }

    #[test]
    fn rejects_degenerate_tile_size() {
        let mut cfg = GameConfig::default();
        cfg.physics.tile_size = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::TileSize(0)));
    }

    #[test]
    fn rejects_oversized_tile_size() {
        let mut cfg = GameConfig::default();
        cfg.physics.tile_size = MAX_TILE_SIZE;
        assert_eq!(cfg.validate(), Ok(()));
        cfg.physics.tile_size = MAX_TILE_SIZE + 1;
        assert_eq!(cfg.validate(), Err(ConfigError::TileSize(MAX_TILE_SIZE + 1)));
        cfg.physics.tile_size = 100_000_000;
        assert_eq!(cfg.validate(), Err(ConfigError::TileSize(100_000_000)));
    }

    #[test]
    fn rejects_upward_gravity_and_downward_jump() {
        let mut cfg = GameConfig::default();
        cfg.physics.gravity = -1.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Physics { name: "gravity", .. })
        ));

        let mut cfg = GameConfig::default();
        cfg.physics.jump_speed = 10.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Physics { name: "jump speed", .. })
        ));
    }

    #[test]
    fn rejects_empty_viewport_and_zero_fps() {
        let mut cfg = GameConfig::default();
        cfg.viewport = Viewport::new(0, 540);
        assert!(matches!(cfg.validate(), Err(ConfigError::Viewport { .. })));

        let mut cfg = GameConfig::default();
        cfg.fps = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::Fps));
    }

    #[test]
    fn delays_round_up_to_whole_frames() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.ms_to_frames(300), 18);
        assert_eq!(cfg.ms_to_frames(400), 24);
        assert_eq!(cfg.ms_to_frames(1), 1);
        assert_eq!(cfg.ms_to_frames(0), 0);
    }

    #[test]
    fn frame_duration_is_not_truncated_to_whole_millis() {
        let frame = GameConfig::default().frame_duration();
        assert!(frame > Duration::from_millis(16));
        assert!(frame < Duration::from_millis(17));
        let second = frame * 60;
        assert!(second > Duration::from_micros(999_999));
        assert!(second < Duration::from_micros(1_000_001));
    }
}
