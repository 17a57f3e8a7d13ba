//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer of styled cells, and [`TerminalRenderer`] flushes it to the
//! terminal with `crossterm`, redrawing only what changed.
//!
//! - [`level_view`]: the running level, camera-relative, with a HUD line
//! - [`banner`]: menu and win screens
//! - [`bell`]: sound effects mapped to the terminal bell

pub mod banner;
pub mod bell;
pub mod fb;
pub mod level_view;
pub mod renderer;

pub use mini_platformer_core as core;
pub use mini_platformer_types as types;

pub use banner::Banner;
pub use bell::{BellMode, TerminalBell};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use level_view::LevelView;
pub use renderer::{encode_diff_into, encode_full_into, TermSize, TerminalRenderer};
