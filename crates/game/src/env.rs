//! Configuration overrides from environment variables.
//!
//! Every value is optional; unset variables keep the defaults. A variable that
//! is set but does not parse is a [`ConfigError`], and so is a combination
//! that fails [`GameConfig::validate`].

use std::str::FromStr;

use crate::core::{ConfigError, GameConfig};

pub const ENV_TILE_SIZE: &str = "PLATFORMER_TILE_SIZE";
pub const ENV_VIEWPORT_WIDTH: &str = "PLATFORMER_VIEWPORT_WIDTH";
pub const ENV_VIEWPORT_HEIGHT: &str = "PLATFORMER_VIEWPORT_HEIGHT";
pub const ENV_GRAVITY: &str = "PLATFORMER_GRAVITY";
pub const ENV_JUMP_SPEED: &str = "PLATFORMER_JUMP_SPEED";
pub const ENV_PLAYER_SPEED: &str = "PLATFORMER_PLAYER_SPEED";
pub const ENV_JUMP_BUFFER_FRAMES: &str = "PLATFORMER_JUMP_BUFFER_FRAMES";
pub const ENV_COYOTE_FRAMES: &str = "PLATFORMER_COYOTE_FRAMES";
pub const ENV_FPS: &str = "PLATFORMER_FPS";

/// Build the configuration from the process environment.
pub fn config_from_env() -> Result<GameConfig, ConfigError> {
    config_from_lookup(|key| std::env::var(key).ok())
}

/// Build the configuration from any key lookup (tests pass a map).
pub fn config_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<GameConfig, ConfigError> {
    let mut cfg = GameConfig::default();
    let p = &mut cfg.physics;

    override_with(&lookup, ENV_TILE_SIZE, &mut p.tile_size)?;
    override_with(&lookup, ENV_GRAVITY, &mut p.gravity)?;
    override_with(&lookup, ENV_JUMP_SPEED, &mut p.jump_speed)?;
    override_with(&lookup, ENV_PLAYER_SPEED, &mut p.player_speed)?;
    override_with(&lookup, ENV_JUMP_BUFFER_FRAMES, &mut p.jump_buffer_frames)?;
    override_with(&lookup, ENV_COYOTE_FRAMES, &mut p.coyote_frames)?;
    override_with(&lookup, ENV_VIEWPORT_WIDTH, &mut cfg.viewport.width)?;
    override_with(&lookup, ENV_VIEWPORT_HEIGHT, &mut cfg.viewport.height)?;
    override_with(&lookup, ENV_FPS, &mut cfg.fps)?;

    cfg.validate()?;
    Ok(cfg)
}

fn override_with<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    slot: &mut T,
) -> Result<(), ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(());
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    *slot = trimmed.parse().map_err(|_| ConfigError::Parse {
        key,
        value: raw.clone(),
    })?;
    Ok(())
}
