//! Sound effects as terminal bells.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;

use crate::types::Sfx;

/// Which sound effects ring the bell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BellMode {
    Off,
    /// Level complete and death only.
    #[default]
    Events,
    All,
}

impl FromStr for BellMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(BellMode::Off),
            "events" => Ok(BellMode::Events),
            "all" => Ok(BellMode::All),
            other => bail!("unknown bell mode {other:?} (expected off, events or all)"),
        }
    }
}

impl fmt::Display for BellMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BellMode::Off => "off",
            BellMode::Events => "events",
            BellMode::All => "all",
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell {
    mode: BellMode,
}

impl TerminalBell {
    pub fn new(mode: BellMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> BellMode {
        self.mode
    }

    pub fn wants(&self, sfx: Sfx) -> bool {
        match self.mode {
            BellMode::Off => false,
            BellMode::Events => matches!(sfx, Sfx::Complete | Sfx::Dead),
            BellMode::All => true,
        }
    }

    /// Whether any of this frame's effects should ring. Several effects in one
    /// frame still ring once.
    pub fn should_ring(&self, sfx: &[Sfx]) -> bool {
        sfx.iter().any(|s| self.wants(*s))
    }
}
