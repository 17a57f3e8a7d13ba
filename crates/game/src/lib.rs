//! Game module - everything between the pure simulation and the terminal
//!
//! This crate wraps [`mini_platformer_core`] with the parts of a playable
//! game that touch the outside world through plain files and environment
//! variables, but never the terminal:
//!
//! - [`levels`]: level discovery and loading with the default-map fallback
//! - [`progress`]: the JSON save file holding the level to continue from
//! - [`env`]: configuration overrides from `PLATFORMER_*` variables
//! - [`session`]: menu, play, freeze and win screens driven frame by frame
//!
//! # Example
//!
//! ```
//! use mini_platformer_game::levels::LevelSet;
//! use mini_platformer_game::session::{Screen, Session};
//! use mini_platformer_game::core::GameConfig;
//! use mini_platformer_game::types::{Command, Intent};
//!
//! // No files and no save: the default map is played.
//! let mut session = Session::new(GameConfig::default(), LevelSet::from_paths(vec![]), None);
//! session.handle(Command::Confirm);
//! assert_eq!(session.screen(), Screen::Playing);
//!
//! let step = session.tick(Intent::IDLE);
//! assert!(step.sfx.is_empty());
//! ```

pub mod env;
pub mod levels;
pub mod progress;
pub mod session;

#[cfg(test)]
mod testutil;

pub use mini_platformer_core as core;
pub use mini_platformer_types as types;

pub use env::{config_from_env, config_from_lookup};
pub use levels::{load_level, load_rows, LevelLoadError, LevelSet, LoadedLevel};
pub use progress::ProgressStore;
pub use session::{Screen, Session, SfxList, Step};
