//! Mini Platformer (workspace facade crate).
//!
//! Re-exports the workspace crates as `mini_platformer::{core,game,input,term,types}`
//! and holds the pieces shared by the binaries: argument parsing and log setup.

pub mod cli;
pub mod logging;

pub use mini_platformer_core as core;
pub use mini_platformer_game as game;
pub use mini_platformer_input as input;
pub use mini_platformer_term as term;
pub use mini_platformer_types as types;
