//! Body module - the player's rigid body and its per-frame movement
//!
//! The body is a plain `Copy` value: an axis-aligned box, a velocity, the
//! grounded flag and the jump-assist timers. [`Body::update`] is the only thing
//! that mutates it, once per fixed frame.
//!
//! # Frame Order
//!
//! The steps below must run in exactly this order:
//!
//! 1. Clear `did_jump`.
//! 2. Timers: refill coyote time while grounded (previous frame), otherwise
//!    count it down; count the jump buffer down.
//! 3. Input: horizontal velocity (right wins over left), jump held state and
//!    rising-edge jump buffering.
//! 4. Jump trigger: grounded or in coyote time, and buffered or held.
//! 5. Horizontal move and resolution against every solid tile.
//! 6. Gravity, clamped to one tile per frame.
//! 7. Vertical move and resolution; this recomputes `on_ground`.
//!
//! Resolving X completely before Y keeps corner contacts deterministic.
//!
//! Holding the jump input is level-triggered: a body that keeps jump held
//! jumps again on the first frame after every landing.

use crate::config::Physics;
use crate::grid::Grid;
use crate::types::{Intent, Point, Rect};

/// Velocity in pixels per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

/// The player-controlled body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub rect: Rect,
    pub vel: Velocity,
    /// Resting on a solid tile at the end of the last update.
    pub on_ground: bool,
    /// A jump started during the last update.
    pub did_jump: bool,
    pub jump_buffer_counter: u32,
    pub coyote_counter: u32,
    pub prev_jump_pressed: bool,
    pub jump_held: bool,
}

impl Body {
    /// Create a body at rest with its top-left corner at `pos`.
    pub fn new(pos: Point, physics: &Physics) -> Self {
        let (w, h) = physics.body_size();
        Self {
            rect: Rect::new(pos.x, pos.y, w, h),
            vel: Velocity::default(),
            on_ground: false,
            did_jump: false,
            jump_buffer_counter: 0,
            coyote_counter: 0,
            prev_jump_pressed: false,
            jump_held: false,
        }
    }

    /// Create a body at the grid's spawn point.
    pub fn spawn(grid: &Grid, physics: &Physics) -> Self {
        Self::new(grid.spawn(), physics)
    }

    pub fn position(&self) -> Point {
        Point::new(self.rect.x, self.rect.y)
    }

    /// Advance the body by one frame.
    pub fn update(&mut self, intent: Intent, grid: &Grid, physics: &Physics) {
        self.did_jump = false;
        self.tick_timers(physics);
        self.read_input(intent, physics);
        self.try_jump(physics);
        self.move_horizontal(grid);
        self.apply_gravity(physics);
        self.move_vertical(grid);
    }

    fn tick_timers(&mut self, physics: &Physics) {
        if self.on_ground {
            self.coyote_counter = physics.coyote_frames;
        } else if self.coyote_counter > 0 {
            self.coyote_counter -= 1;
        }
        if self.jump_buffer_counter > 0 {
            self.jump_buffer_counter -= 1;
        }
    }

    fn read_input(&mut self, intent: Intent, physics: &Physics) {
        self.vel.x = 0.0;
        if intent.left {
            self.vel.x = -physics.player_speed;
        }
        if intent.right {
            self.vel.x = physics.player_speed;
        }

        self.jump_held = intent.jump;
        if intent.jump && !self.prev_jump_pressed {
            self.jump_buffer_counter = physics.jump_buffer_frames;
        }
        self.prev_jump_pressed = intent.jump;
    }

    fn try_jump(&mut self, physics: &Physics) {
        let can_jump = self.on_ground || self.coyote_counter > 0;
        let wants_jump = self.jump_buffer_counter > 0 || self.jump_held;
        if can_jump && wants_jump {
            self.vel.y = physics.jump_speed;
            self.on_ground = false;
            self.did_jump = true;
            // Consumed, so the next frame cannot fire the same jump again.
            self.jump_buffer_counter = 0;
            self.coyote_counter = 0;
        }
    }

    fn move_horizontal(&mut self, grid: &Grid) {
        self.rect.x += self.vel.x.round() as i32;
        for tile in grid.solids() {
            if !self.rect.intersects(tile) {
                continue;
            }
            if self.vel.x > 0.0 {
                self.rect.set_right(tile.left());
            } else if self.vel.x < 0.0 {
                self.rect.set_left(tile.right());
            }
        }
    }

    fn apply_gravity(&mut self, physics: &Physics) {
        self.vel.y += physics.gravity;
        let terminal = physics.terminal_velocity();
        if self.vel.y > terminal {
            self.vel.y = terminal;
        }
    }

    fn move_vertical(&mut self, grid: &Grid) {
        self.rect.y += self.vel.y.round() as i32;
        self.on_ground = false;
        for tile in grid.solids() {
            if !self.rect.intersects(tile) {
                continue;
            }
            if self.vel.y > 0.0 {
                self.rect.set_bottom(tile.top());
                self.vel.y = 0.0;
                self.on_ground = true;
            } else if self.vel.y < 0.0 {
                self.rect.set_top(tile.bottom());
                self.vel.y = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physics() -> Physics {
        Physics::default()
    }

    /// Three-tile floor at row 2 of a 64px grid, nothing else.
    fn floor() -> Grid {
        Grid::build(&["---", "---", "XXX"], 64).unwrap()
    }

    fn resting(grid: &Grid) -> Body {
        let p = physics();
        let mut body = Body::new(Point::new(64, 0), &p);
        for _ in 0..60 {
            body.update(Intent::IDLE, grid, &p);
        }
        assert!(body.on_ground);
        body
    }

    #[test]
    fn new_body_is_at_rest() {
        let body = Body::new(Point::new(3, 4), &physics());
        assert_eq!(body.rect, Rect::new(3, 4, 32, 57));
        assert_eq!(body.vel, Velocity::default());
        assert!(!body.on_ground);
        assert!(!body.did_jump);
    }

    #[test]
    fn gravity_accumulates_and_clamps() {
        let p = physics();
        let grid = Grid::build(&["-"], 64).unwrap();
        let mut body = Body::new(Point::new(0, 0), &p);
        body.update(Intent::IDLE, &grid, &p);
        assert!((body.vel.y - 0.8).abs() < 1e-5);
        // round(0.8) == 1
        assert_eq!(body.rect.y, 1);

        for _ in 0..200 {
            body.update(Intent::IDLE, &grid, &p);
        }
        assert_eq!(body.vel.y, 64.0);
    }

    #[test]
    fn lands_flush_on_floor() {
        let grid = floor();
        let body = resting(&grid);
        assert_eq!(body.rect.bottom(), 128);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn stays_grounded_while_resting() {
        let grid = floor();
        let p = physics();
        let mut body = resting(&grid);
        for _ in 0..10 {
            body.update(Intent::IDLE, &grid, &p);
            assert!(body.on_ground);
            assert_eq!(body.rect.bottom(), 128);
        }
    }

    #[test]
    fn right_wins_over_left() {
        let grid = floor();
        let p = physics();
        let mut body = resting(&grid);
        let x = body.rect.x;
        body.update(Intent::new(true, true, false), &grid, &p);
        assert_eq!(body.vel.x, 5.0);
        assert_eq!(body.rect.x, x + 5);
    }

    #[test]
    fn rising_edge_fills_jump_buffer() {
        let grid = Grid::build(&["-"], 64).unwrap();
        let p = physics();
        let mut body = Body::new(Point::new(0, 0), &p);
        body.update(Intent::jump(), &grid, &p);
        assert_eq!(body.jump_buffer_counter, 6);
        assert!(body.jump_held);
        assert!(!body.did_jump);

        // Still held: no new edge, the buffer keeps counting down.
        body.update(Intent::jump(), &grid, &p);
        assert_eq!(body.jump_buffer_counter, 5);
    }

    #[test]
    fn jump_clears_assist_timers() {
        let grid = floor();
        let p = physics();
        let mut body = resting(&grid);
        body.update(Intent::jump(), &grid, &p);
        assert!(body.did_jump);
        assert!(!body.on_ground);
        assert_eq!(body.jump_buffer_counter, 0);
        assert_eq!(body.coyote_counter, 0);
        assert!((body.vel.y - (p.jump_speed + p.gravity)).abs() < 1e-5);
    }

    #[test]
    fn did_jump_only_lasts_one_frame() {
        let grid = floor();
        let p = physics();
        let mut body = resting(&grid);
        body.update(Intent::jump(), &grid, &p);
        assert!(body.did_jump);
        body.update(Intent::IDLE, &grid, &p);
        assert!(!body.did_jump);
    }

    #[test]
    fn ceiling_stops_ascent() {
        // Solid ceiling directly over a one-tile corridor.
        let grid = Grid::build(&["XXX", "---", "XXX"], 64).unwrap();
        let p = physics();
        let mut body = Body::new(Point::new(64, 64 + 7), &p);
        body.update(Intent::IDLE, &grid, &p);
        assert!(body.on_ground);

        body.update(Intent::jump(), &grid, &p);
        assert!(body.did_jump);
        assert_eq!(body.rect.top(), 64);
        assert_eq!(body.vel.y, 0.0);
        assert!(!body.on_ground);
    }

    #[test]
    fn wall_blocks_horizontal_movement() {
        let grid = Grid::build(&["---X", "---X", "XXXX"], 64).unwrap();
        let p = physics();
        let mut body = Body::new(Point::new(64, 0), &p);
        for _ in 0..120 {
            body.update(Intent::right(), &grid, &p);
        }
        assert_eq!(body.rect.right(), 192);
        assert!(body.on_ground);
    }

    #[test]
    fn wall_blocks_leftward_movement() {
        let grid = Grid::build(&["X---", "X---", "XXXX"], 64).unwrap();
        let p = physics();
        let mut body = Body::new(Point::new(128, 0), &p);
        for _ in 0..120 {
            body.update(Intent::left(), &grid, &p);
        }
        assert_eq!(body.rect.left(), 64);
    }
}
