//! Level runner tests - outcomes, camera and the jump signal

use std::sync::Arc;

use mini_platformer::core::{camera_offset, classify, Body, GameConfig, Grid, LevelRunner, Viewport};
use mini_platformer::types::{Intent, Outcome, Point, Rect};

fn runner(rows: &[&str]) -> LevelRunner {
    let grid = Arc::new(Grid::build(rows, 64).unwrap());
    LevelRunner::new(grid, &GameConfig::default())
}

#[test]
fn test_goal_overlap_completes_regardless_of_velocity() {
    let config = GameConfig::default();
    let grid = Arc::new(Grid::build(&["----", "-G--", "XXXX"], 64).unwrap());

    for vel in [-30.0f32, 0.0, 40.0] {
        let mut body = Body::new(Point::new(70, 70), &config.physics);
        body.vel.y = vel;
        let mut r = LevelRunner::with_body(grid.clone(), &config, body);
        assert_eq!(r.run_frame(Intent::IDLE).outcome, Outcome::Complete, "vel {}", vel);
        assert_eq!(r.outcome(), Outcome::Complete);
    }
}

#[test]
fn test_falling_out_is_dead() {
    let mut r = runner(&["-P-", "---"]);
    let death_line = r.grid().death_line();
    let mut last = Outcome::Running;
    for _ in 0..300 {
        let report = r.run_frame(Intent::IDLE);
        if report.outcome == Outcome::Dead {
            assert!(r.body().rect.top() > death_line);
            assert_eq!(last, Outcome::Running);
            return;
        }
        assert!(r.body().rect.top() <= death_line);
        last = report.outcome;
    }
    panic!("never died");
}

#[test]
fn test_goal_checked_before_death() {
    let death_line = 896;
    let below = Rect::new(0, death_line + 1, 32, 57);
    let goal = Rect::new(0, death_line, 64, 64);
    let none: [&Rect; 0] = [];

    assert_eq!(classify(&below, none, death_line), Outcome::Dead);
    assert_eq!(classify(&below, [&goal], death_line), Outcome::Complete);
    // Touching a goal edge is not an overlap.
    let touching = Rect::new(64, death_line, 32, 57);
    assert_eq!(classify(&touching, [&goal], death_line), Outcome::Dead);
}

#[test]
fn test_camera_narrow_level_is_pinned() {
    let grid = Grid::build(&["----------", "XXXXXXXXXX"], 64).unwrap();
    let vp = Viewport::new(960, 540);
    assert!(grid.pixel_width() < vp.width);
    for x in (-2000..4000).step_by(37) {
        assert_eq!(camera_offset(Point::new(x, 0), &grid, vp).x, 0);
    }
}

#[test]
fn test_camera_wide_level_is_clamped() {
    let grid = Grid::default_map(64);
    let vp = Viewport::new(960, 540);
    let max_x = grid.pixel_width() - vp.width;
    let max_y = grid.pixel_height() - vp.height;
    for x in (-2000..5000).step_by(41) {
        for y in (-1000..2000).step_by(97) {
            let off = camera_offset(Point::new(x, y), &grid, vp);
            assert!((0..=max_x).contains(&off.x), "x {} -> {}", x, off.x);
            assert!((0..=max_y).contains(&off.y), "y {} -> {}", y, off.y);
        }
    }
    // Centred when there is room.
    assert_eq!(camera_offset(Point::new(1000, 400), &grid, vp), Point::new(520, 130));
}

#[test]
fn test_runner_keeps_camera_in_bounds_while_walking() {
    let config = GameConfig::default();
    let grid = Arc::new(Grid::default_map(64));
    let mut r = LevelRunner::new(grid.clone(), &config);
    let max_x = grid.pixel_width() - config.viewport.width;
    for _ in 0..400 {
        r.run_frame(Intent::right());
        assert!((0..=max_x).contains(&r.offset().x));
    }
    assert!(r.offset().x > 0);
}

#[test]
fn test_jump_signal_fires_once() {
    let mut r = runner(&["----", "----", "-P--", "XXXX"]);
    for _ in 0..60 {
        assert!(!r.run_frame(Intent::IDLE).jumped);
    }
    let report = r.run_frame(Intent::jump());
    assert!(report.jumped);
    assert!(report.was_on_ground);

    let report = r.run_frame(Intent::IDLE);
    assert!(!report.jumped);
    assert!(!report.was_on_ground);
}

#[test]
fn test_jump_signal_fires_in_coyote_time() {
    let mut r = runner(&["------", "------", "-P----", "XX----", "------"]);
    for _ in 0..60 {
        r.run_frame(Intent::IDLE);
    }
    assert!(r.body().on_ground);

    let mut steps = 0;
    while r.body().on_ground {
        assert!(!r.run_frame(Intent::right()).jumped);
        steps += 1;
        assert!(steps < 100, "never walked off the ledge");
    }

    let report = r.run_frame(Intent::jump());
    assert!(report.jumped);
    assert!(!report.was_on_ground);
    assert_eq!(report.outcome, Outcome::Running);
}

#[test]
fn test_default_map_end_to_end() {
    let config = GameConfig::default();
    let mut r = LevelRunner::new(Arc::new(Grid::default_map(64)), &config);
    for _ in 0..60 {
        assert_eq!(r.run_frame(Intent::IDLE).outcome, Outcome::Running);
    }
    assert!(r.body().on_ground);
    assert_eq!(r.body().vel.y, 0.0);
    assert_eq!(r.frame(), 60);
}
