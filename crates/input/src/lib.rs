//! Terminal input module (engine-facing).
//!
//! This crate is independent of any UI framework. It maps `crossterm` key
//! events to movement controls and screen [`crate::types::Command`]s, and
//! turns press/release events into a per-frame [`crate::types::Intent`]
//! (including terminals without key-release events).

pub mod held;
pub mod map;

pub use mini_platformer_types as types;

pub use held::HeldKeys;
pub use map::{command_for, control_for, should_quit, Control};
