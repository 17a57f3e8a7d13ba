//! Terminal platformer runner (default binary).
//!
//! Fixed-rate loop: render, poll input until the next tick, then advance the
//! session one frame. Uses crossterm for input and the framebuffer renderer
//! from the term crate.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use mini_platformer::cli::{parse_args, USAGE};
use mini_platformer::game::{config_from_env, LevelSet, ProgressStore, Screen, Session};
use mini_platformer::input::{command_for, HeldKeys};
use mini_platformer::logging::{init_file_logging, log_path};
use mini_platformer::term::{Banner, FrameBuffer, LevelView, TermSize, TerminalBell, TerminalRenderer};
use mini_platformer::types::{Outcome, Sfx};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(opts) = parse_args(&args)? else {
        println!("{USAGE}");
        return Ok(());
    };

    if let Some(path) = log_path(opts.log.clone()) {
        init_file_logging(&path)?;
    }

    let config = config_from_env()?;
    let levels = LevelSet::discover(&opts.levels);
    info!(levels = levels.len(), dir = %opts.levels.display(), "starting");
    let mut session = Session::new(config, levels, Some(ProgressStore::new(&opts.save)));
    let bell = TerminalBell::new(opts.bell);

    let mut term = TerminalRenderer::new();
    term.enter()?;
    info!(
        bell = %bell.mode(),
        release_events = term.has_enhanced_keys(),
        "terminal ready"
    );

    let result = run(&mut term, &mut session, bell);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("bye");
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session, bell: TerminalBell) -> Result<()> {
    let view = LevelView::default();
    let mut keys = HeldKeys::new();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = session.config().frame_duration();
    let mut last_tick = Instant::now();

    while !session.is_finished() {
        // Render.
        draw(session, &view, TermSize::query(), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if let Some(cmd) = command_for(key) {
                            let sfx = session.handle(cmd);
                            play(term, bell, &sfx)?;
                        } else {
                            keys.press(key.code);
                        }
                    }
                    // Without release events, repeats are what keeps a key held.
                    KeyEventKind::Repeat => {
                        keys.press(key.code);
                    }
                    KeyEventKind::Release => keys.release(key.code),
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            keys.update(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX));
            let step = session.tick(keys.intent());
            play(term, bell, &step.sfx)?;
        }
    }
    Ok(())
}

fn draw(session: &Session, view: &LevelView, size: TermSize, fb: &mut FrameBuffer) {
    match session.screen() {
        Screen::Menu => {
            Banner::menu(session.level_index() + 1, session.level_count()).render_into(size, fb)
        }
        Screen::Playing => view.render_into(session.runner(), session.level_name(), size, fb),
        Screen::Transition { outcome, .. } => {
            view.render_into(session.runner(), session.level_name(), size, fb);
            let text = match outcome {
                Outcome::Complete => "Level complete!",
                Outcome::Dead | Outcome::Running => "Ouch!",
            };
            view.overlay(fb, text);
        }
        Screen::Win => Banner::win().render_into(size, fb),
        Screen::Quit => {}
    }
}

fn play(term: &mut TerminalRenderer, bell: TerminalBell, sfx: &[Sfx]) -> Result<()> {
    for s in sfx {
        debug!(sfx = s.as_str(), "sfx");
    }
    if bell.should_ring(sfx) {
        term.bell()?;
    }
    Ok(())
}
