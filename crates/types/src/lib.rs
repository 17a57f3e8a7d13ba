//! Shared types module - plain data structures and tuning constants
//!
//! Everything here is dependency-free data: geometry, per-frame input intent,
//! level cell kinds, frame outcomes and the commands/sound effects that flow
//! between the simulation and its front end.
//!
//! # Coordinates
//!
//! World coordinates are integer pixels with the origin at the top-left of the
//! level and `y` growing downwards. A level cell at `(row, col)` covers the
//! pixel rectangle `(col * TILE_SIZE, row * TILE_SIZE, TILE_SIZE, TILE_SIZE)`.
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TILE_SIZE` | 64 | Pixel size of one grid cell |
//! | `VIEWPORT_WIDTH` | 960 | Camera width in pixels |
//! | `VIEWPORT_HEIGHT` | 540 | Camera height in pixels |
//! | `FPS` | 60 | Fixed simulation rate |
//! | `PLAYER_SPEED` | 5 | Horizontal speed (px/frame) |
//! | `GRAVITY` | 0.8 | Downward acceleration (px/frame²) |
//! | `JUMP_SPEED` | -24 | Launch velocity (negative is up) |
//! | `JUMP_BUFFER_FRAMES` | 6 | Frames a jump press stays buffered |
//! | `COYOTE_FRAMES` | 6 | Frames a ledge jump is still allowed |
//!
//! # Examples
//!
//! ```
//! use mini_platformer_types::{CellKind, Intent, Rect};
//!
//! assert_eq!(CellKind::from_char('X'), CellKind::Solid);
//! assert_eq!(CellKind::from_char('~'), CellKind::Empty);
//!
//! let a = Rect::new(0, 0, 10, 10);
//! assert!(a.intersects(&Rect::new(5, 5, 10, 10)));
//! // Touching edges do not overlap.
//! assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
//!
//! let intent = Intent::new(false, true, false);
//! assert!(intent.right);
//! ```

/// Pixel size of one grid cell.
pub const TILE_SIZE: i32 = 64;

/// Camera width in pixels.
pub const VIEWPORT_WIDTH: i32 = 960;

/// Camera height in pixels.
pub const VIEWPORT_HEIGHT: i32 = 540;

/// Fixed simulation rate (frames per second).
pub const FPS: u32 = 60;

/// Horizontal speed while a direction is held (pixels per frame).
pub const PLAYER_SPEED: f32 = 5.0;

/// Downward acceleration (pixels per frame squared).
pub const GRAVITY: f32 = 0.8;

/// Vertical launch velocity of a jump (negative is upward).
pub const JUMP_SPEED: f32 = -24.0;

/// Frames a jump press stays buffered while the body cannot jump yet.
pub const JUMP_BUFFER_FRAMES: u32 = 6;

/// Frames after leaving the ground during which a jump is still accepted.
pub const COYOTE_FRAMES: u32 = 6;

/// Freeze after reaching the goal, before the next level loads.
pub const COMPLETE_DELAY_MS: u32 = 300;

/// Freeze after falling out of the world, before the level restarts.
pub const DEAD_DELAY_MS: u32 = 400;

/// How many tiles below the level bottom the body may fall before dying.
pub const DEATH_MARGIN_TILES: i32 = 2;

/// A point in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in world pixels (`x`/`y` is the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Center point, rounded towards the top-left on odd sizes.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Kind of a single character in a level description.
///
/// - **Empty**: anything that is not one of the markers below
/// - **Solid**: `X`, blocks the body
/// - **Goal**: `G`, reaching it completes the level
/// - **Spawn**: `P`, where the body starts (first marker wins)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Empty,
    Solid,
    Goal,
    Spawn,
}

impl CellKind {
    pub fn from_char(ch: char) -> Self {
        match ch {
            'X' => CellKind::Solid,
            'P' => CellKind::Spawn,
            'G' => CellKind::Goal,
            _ => CellKind::Empty,
        }
    }
}

/// Tag stored next to each tile rectangle in a built grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Solid,
    Goal,
}

/// Per-frame movement intent sampled from whatever input source is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Intent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl Intent {
    pub const IDLE: Intent = Intent {
        left: false,
        right: false,
        jump: false,
    };

    pub const fn new(left: bool, right: bool, jump: bool) -> Self {
        Self { left, right, jump }
    }

    pub const fn jump() -> Self {
        Self::new(false, false, true)
    }

    pub const fn left() -> Self {
        Self::new(true, false, false)
    }

    pub const fn right() -> Self {
        Self::new(false, true, false)
    }
}

/// Classification of a simulated frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Nothing decisive happened.
    Running,
    /// The body touched a goal tile.
    Complete,
    /// The body fell out of the world.
    Dead,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Running => "running",
            Outcome::Complete => "complete",
            Outcome::Dead => "dead",
        }
    }

    /// Whether the caller has to change control flow (load, restart, win).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Running)
    }
}

/// Screen-level commands (menus, leaving a level, quitting).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start / continue (Enter).
    Confirm,
    /// Leave the current screen (Esc).
    Back,
    /// Exit the program.
    Quit,
}

/// Sound effects requested by the session for the front end to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sfx {
    Jump,
    Complete,
    Dead,
    Click,
}

impl Sfx {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sfx::Jump => "jump",
            Sfx::Complete => "complete",
            Sfx::Dead => "dead",
            Sfx::Click => "click",
        }
    }
}
