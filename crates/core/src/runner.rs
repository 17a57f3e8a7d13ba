//! Level runner - steps one body through one grid and classifies each frame
//!
//! The runner owns the body, shares the grid through an [`Arc`] (restarting a
//! level reuses it) and keeps the camera offset up to date. Each call to
//! [`LevelRunner::run_frame`] returns a [`FrameReport`] instead of invoking
//! callbacks, so the caller decides what a jump or an outcome means.

use std::sync::Arc;

use crate::body::Body;
use crate::config::{GameConfig, Physics, Viewport};
use crate::grid::Grid;
use crate::types::{Intent, Outcome, Point, Rect};

/// What happened during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub outcome: Outcome,
    /// A jump started this frame (fired at most once per frame).
    pub jumped: bool,
    /// Whether the body was grounded before the update.
    pub was_on_ground: bool,
}

/// Drives a [`Body`] against a [`Grid`] once per frame.
#[derive(Debug, Clone)]
pub struct LevelRunner {
    grid: Arc<Grid>,
    body: Body,
    physics: Physics,
    viewport: Viewport,
    offset: Point,
    outcome: Outcome,
    /// Frames simulated since the last (re)spawn.
    frame: u64,
}

impl LevelRunner {
    /// Spawn a fresh body on `grid`.
    pub fn new(grid: Arc<Grid>, config: &GameConfig) -> Self {
        let body = Body::spawn(&grid, &config.physics);
        Self::with_body(grid, config, body)
    }

    /// Start from an arbitrary body state.
    pub fn with_body(grid: Arc<Grid>, config: &GameConfig, body: Body) -> Self {
        let offset = camera_offset(body.rect.center(), &grid, config.viewport);
        Self {
            grid,
            body,
            physics: config.physics,
            viewport: config.viewport,
            offset,
            outcome: Outcome::Running,
            frame: 0,
        }
    }

    /// Simulate one frame.
    pub fn run_frame(&mut self, intent: Intent) -> FrameReport {
        let was_on_ground = self.body.on_ground;
        self.body.update(intent, &self.grid, &self.physics);
        let jumped = self.body.did_jump;

        self.offset = camera_offset(self.body.rect.center(), &self.grid, self.viewport);
        self.outcome = classify(&self.body.rect, self.grid.goals(), self.grid.death_line());
        self.frame += 1;

        FrameReport {
            outcome: self.outcome,
            jumped,
            was_on_ground,
        }
    }

    /// Throw the body away and respawn it on the same grid.
    pub fn restart(&mut self) {
        self.body = Body::spawn(&self.grid, &self.physics);
        self.offset = camera_offset(self.body.rect.center(), &self.grid, self.viewport);
        self.outcome = Outcome::Running;
        self.frame = 0;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn shared_grid(&self) -> Arc<Grid> {
        Arc::clone(&self.grid)
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Camera top-left in world pixels.
    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// Camera top-left that centers `focus`, clamped to the level.
///
/// Levels smaller than the viewport clamp to 0 on that axis, so their content
/// is drawn from the top-left corner rather than centered.
pub fn camera_offset(focus: Point, grid: &Grid, viewport: Viewport) -> Point {
    let x = focus.x - viewport.width / 2;
    let y = focus.y - viewport.height / 2;
    Point::new(
        x.min(grid.pixel_width() - viewport.width).max(0),
        y.min(grid.pixel_height() - viewport.height).max(0),
    )
}

/// Classify a body position: goal contact first, then the death line.
pub fn classify<'a>(
    body: &Rect,
    goals: impl IntoIterator<Item = &'a Rect>,
    death_line: i32,
) -> Outcome {
    if goals.into_iter().any(|goal| body.intersects(goal)) {
        Outcome::Complete
    } else if body.top() > death_line {
        Outcome::Dead
    } else {
        Outcome::Running
    }
}
