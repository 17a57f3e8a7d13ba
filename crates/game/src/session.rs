//! Session state machine - screens, level progression and outcome freezes
//!
//! A [`Session`] owns the level list, the running level and the save file.
//! The front end feeds it [`Command`]s for key presses and calls
//! [`Session::tick`] once per fixed frame with the sampled [`Intent`].
//!
//! # Screens
//!
//! ```text
//!            Confirm                 goal / fall
//!   Menu ───────────────▶ Playing ─────────────▶ Transition
//!    ▲  ◀───────────────     ▲                      │
//!    │        Back           └──── restart/next ────┤
//!    │ Confirm                                      │ last level done
//!   Win ◀───────────────────────────────────────────┘
//! ```
//!
//! `Quit` is reachable from every screen. Leaving `Playing` (Back or Quit)
//! saves progress first.

use arrayvec::ArrayVec;
use tracing::{debug, info, warn};

use crate::core::{GameConfig, LevelRunner};
use crate::levels::{LevelSet, LoadedLevel};
use crate::progress::ProgressStore;
use crate::types::{Command, Intent, Outcome, Sfx, COMPLETE_DELAY_MS, DEAD_DELAY_MS};

/// Sound effects produced by one call. Never more than a few per frame.
pub type SfxList = ArrayVec<Sfx, 4>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    /// Frozen after a decisive frame; resolves when `frames_left` runs out.
    Transition {
        outcome: Outcome,
        frames_left: u32,
    },
    Win,
    Quit,
}

/// Result of one [`Session::tick`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    pub sfx: SfxList,
    /// Outcome of the simulated frame, `None` when no frame was simulated.
    pub outcome: Option<Outcome>,
}

pub struct Session {
    config: GameConfig,
    levels: LevelSet,
    progress: Option<ProgressStore>,
    index: usize,
    level: LoadedLevel,
    runner: LevelRunner,
    screen: Screen,
}

impl Session {
    /// Open a session at the saved level (clamped to `levels`), showing the menu.
    pub fn new(config: GameConfig, levels: LevelSet, progress: Option<ProgressStore>) -> Self {
        let saved = progress.as_ref().map_or(0, ProgressStore::load);
        let index = levels.clamp_index(saved);
        if index != saved {
            warn!(saved, index, "saved level out of range");
        }
        let level = levels.load(index, config.physics.tile_size);
        let runner = LevelRunner::new(level.grid.clone(), &config);
        info!(level = %level.name, index, "session started");

        Self {
            config,
            levels,
            progress,
            index,
            level,
            runner,
            screen: Screen::Menu,
        }
    }

    /// Apply a screen command.
    pub fn handle(&mut self, cmd: Command) -> SfxList {
        let mut sfx = SfxList::new();
        let next = match (self.screen, cmd) {
            (Screen::Menu, Command::Confirm) => {
                sfx.push(Sfx::Click);
                Screen::Playing
            }
            (Screen::Menu, Command::Back | Command::Quit) => Screen::Quit,

            (Screen::Playing, Command::Back) => {
                self.save_progress();
                Screen::Menu
            }
            (Screen::Playing, Command::Quit) => {
                self.save_progress();
                Screen::Quit
            }
            (Screen::Playing, Command::Confirm) => Screen::Playing,

            (Screen::Win, Command::Confirm) => {
                sfx.push(Sfx::Click);
                self.runner.restart();
                Screen::Menu
            }
            (Screen::Win, Command::Back | Command::Quit) => Screen::Quit,

            (Screen::Transition { .. }, Command::Quit) => {
                self.save_progress();
                Screen::Quit
            }
            (screen @ Screen::Transition { .. }, _) => screen,

            (Screen::Quit, _) => Screen::Quit,
        };

        if next != self.screen {
            debug!(from = ?self.screen, to = ?next, ?cmd, "screen change");
        }
        self.screen = next;
        sfx
    }

    /// Advance one fixed frame.
    pub fn tick(&mut self, intent: Intent) -> Step {
        let mut step = Step::default();
        match self.screen {
            Screen::Playing => {
                let report = self.runner.run_frame(intent);
                step.outcome = Some(report.outcome);
                if report.jumped {
                    step.sfx.push(Sfx::Jump);
                }
                if report.outcome.is_terminal() {
                    info!(
                        level = %self.level.name,
                        frame = self.runner.frame(),
                        outcome = report.outcome.as_str(),
                        "level ended"
                    );
                }
                match report.outcome {
                    Outcome::Running => {}
                    Outcome::Complete => {
                        step.sfx.push(Sfx::Complete);
                        self.freeze(Outcome::Complete, COMPLETE_DELAY_MS);
                    }
                    Outcome::Dead => {
                        step.sfx.push(Sfx::Dead);
                        self.freeze(Outcome::Dead, DEAD_DELAY_MS);
                    }
                }
            }
            Screen::Transition {
                outcome,
                frames_left,
            } => {
                if frames_left > 1 {
                    self.screen = Screen::Transition {
                        outcome,
                        frames_left: frames_left - 1,
                    };
                } else {
                    self.resolve(outcome);
                }
            }
            Screen::Menu | Screen::Win | Screen::Quit => {}
        }
        step
    }

    fn freeze(&mut self, outcome: Outcome, delay_ms: u32) {
        self.screen = Screen::Transition {
            outcome,
            frames_left: self.config.ms_to_frames(delay_ms),
        };
    }

    fn resolve(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Complete if self.levels.is_last(self.index) => {
                info!("all levels complete");
                self.screen = Screen::Win;
            }
            Outcome::Complete => {
                self.index += 1;
                self.save_progress();
                self.load_current();
                self.screen = Screen::Playing;
            }
            Outcome::Dead | Outcome::Running => {
                self.runner.restart();
                self.screen = Screen::Playing;
            }
        }
    }

    fn load_current(&mut self) {
        self.level = self.levels.load(self.index, self.config.physics.tile_size);
        self.runner = LevelRunner::new(self.level.grid.clone(), &self.config);
        info!(level = %self.level.name, index = self.index, fallback = self.level.fallback, "level loaded");
    }

    fn save_progress(&self) {
        if let Some(store) = &self.progress {
            if let Err(e) = store.save(self.index) {
                warn!(error = %e, "could not save progress");
            }
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_finished(&self) -> bool {
        self.screen == Screen::Quit
    }

    /// Zero-based index of the current level.
    pub fn level_index(&self) -> usize {
        self.index
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn level_name(&self) -> &str {
        &self.level.name
    }

    pub fn runner(&self) -> &LevelRunner {
        &self.runner
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::TempDir;

    // Body spawns right above the goal and drops into it.
    const GOAL_BELOW: &str = "-P-\n-G-\nXXX\n";
    // Nothing to stand on.
    const PIT: &str = "-P-\n---\n";

    fn session(dir: &TempDir, levels: &[(&str, &str)]) -> Session {
        let paths = levels.iter().map(|(name, body)| dir.write(name, body)).collect();
        let store = ProgressStore::new(dir.path().join("save.json"));
        Session::new(GameConfig::default(), LevelSet::from_paths(paths), Some(store))
    }

    fn run_until_transition(s: &mut Session, limit: usize) -> Step {
        for _ in 0..limit {
            let step = s.tick(Intent::IDLE);
            if matches!(s.screen(), Screen::Transition { .. }) {
                return step;
            }
        }
        panic!("no transition within {limit} frames");
    }

    #[test]
    fn starts_on_menu_and_confirm_clicks() {
        let dir = TempDir::new("session-menu");
        let mut s = session(&dir, &[("a.txt", GOAL_BELOW)]);
        assert_eq!(s.screen(), Screen::Menu);
        assert_eq!(s.tick(Intent::IDLE), Step::default());

        let sfx = s.handle(Command::Confirm);
        assert_eq!(sfx.as_slice(), &[Sfx::Click]);
        assert_eq!(s.screen(), Screen::Playing);
    }

    #[test]
    fn menu_back_quits() {
        let dir = TempDir::new("session-menu-back");
        let mut s = session(&dir, &[("a.txt", GOAL_BELOW)]);
        s.handle(Command::Back);
        assert!(s.is_finished());
    }

    #[test]
    fn completing_advances_and_saves() {
        let dir = TempDir::new("session-advance");
        let mut s = session(&dir, &[("a.txt", GOAL_BELOW), ("b.txt", GOAL_BELOW)]);
        s.handle(Command::Confirm);

        let step = run_until_transition(&mut s, 120);
        assert_eq!(step.outcome, Some(Outcome::Complete));
        assert!(step.sfx.contains(&Sfx::Complete));
        assert_eq!(
            s.screen(),
            Screen::Transition {
                outcome: Outcome::Complete,
                frames_left: 18
            }
        );

        for _ in 0..17 {
            assert_eq!(s.tick(Intent::IDLE).outcome, None);
        }
        assert!(matches!(s.screen(), Screen::Transition { frames_left: 1, .. }));
        s.tick(Intent::IDLE);

        assert_eq!(s.screen(), Screen::Playing);
        assert_eq!(s.level_index(), 1);
        assert_eq!(s.level_name(), "b");
        assert_eq!(ProgressStore::new(dir.path().join("save.json")).load(), 1);
    }

    #[test]
    fn last_level_leads_to_win_then_menu() {
        let dir = TempDir::new("session-win");
        let mut s = session(&dir, &[("a.txt", GOAL_BELOW)]);
        s.handle(Command::Confirm);
        run_until_transition(&mut s, 120);
        for _ in 0..18 {
            s.tick(Intent::IDLE);
        }
        assert_eq!(s.screen(), Screen::Win);

        assert_eq!(s.handle(Command::Confirm).as_slice(), &[Sfx::Click]);
        assert_eq!(s.screen(), Screen::Menu);
        assert_eq!(s.runner().frame(), 0);
        assert_eq!(s.runner().outcome(), Outcome::Running);
    }

    #[test]
    fn falling_restarts_same_level() {
        let dir = TempDir::new("session-dead");
        let mut s = session(&dir, &[("a.txt", PIT), ("b.txt", GOAL_BELOW)]);
        s.handle(Command::Confirm);
        let grid = s.runner().shared_grid();

        let step = run_until_transition(&mut s, 600);
        assert_eq!(step.outcome, Some(Outcome::Dead));
        assert!(step.sfx.contains(&Sfx::Dead));
        assert!(matches!(s.screen(), Screen::Transition { frames_left: 24, .. }));

        for _ in 0..24 {
            s.tick(Intent::IDLE);
        }
        assert_eq!(s.screen(), Screen::Playing);
        assert_eq!(s.level_index(), 0);
        assert_eq!(s.runner().frame(), 0);
        assert!(std::sync::Arc::ptr_eq(&grid, &s.runner().shared_grid()));
    }

    #[test]
    fn transition_ignores_everything_but_quit() {
        let dir = TempDir::new("session-freeze");
        let mut s = session(&dir, &[("a.txt", PIT)]);
        s.handle(Command::Confirm);
        run_until_transition(&mut s, 600);
        let frozen = s.screen();

        assert!(s.handle(Command::Back).is_empty());
        assert_eq!(s.screen(), frozen);
        s.handle(Command::Quit);
        assert!(s.is_finished());
    }

    #[test]
    fn back_saves_and_returns_to_menu() {
        let dir = TempDir::new("session-back");
        let mut s = session(&dir, &[("a.txt", PIT), ("b.txt", PIT)]);
        dir.write("save.json", r#"{"level":1}"#);
        // Reopen so the saved index is picked up.
        let mut s2 = session(&dir, &[("a.txt", PIT), ("b.txt", PIT)]);
        assert_eq!(s2.level_index(), 1);

        s.handle(Command::Confirm);
        s.tick(Intent::right());
        s.handle(Command::Back);
        assert_eq!(s.screen(), Screen::Menu);
        assert_eq!(ProgressStore::new(dir.path().join("save.json")).load(), 0);

        s2.handle(Command::Confirm);
        s2.handle(Command::Quit);
        assert!(s2.is_finished());
        assert_eq!(ProgressStore::new(dir.path().join("save.json")).load(), 1);
    }

    #[test]
    fn saved_index_is_clamped() {
        let dir = TempDir::new("session-clamp");
        dir.write("save.json", r#"{"level":9}"#);
        let s = session(&dir, &[("a.txt", PIT), ("b.txt", PIT)]);
        assert_eq!(s.level_index(), 1);
        assert_eq!(s.level_name(), "b");
    }

    #[test]
    fn jump_emits_sound() {
        let dir = TempDir::new("session-jump");
        let mut s = session(&dir, &[("a.txt", "----\n-P--\nXXXX\n")]);
        s.handle(Command::Confirm);
        for _ in 0..30 {
            s.tick(Intent::IDLE);
        }
        let step = s.tick(Intent::jump());
        assert_eq!(step.sfx.as_slice(), &[Sfx::Jump]);
    }
}
