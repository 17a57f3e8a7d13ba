//! Save file holding the index of the level to continue from.
//!
//! Format: `{"level": <index>}`. A missing or corrupt file means "start at
//! the first level"; it is never an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SaveData {
    #[serde(default)]
    pub level: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved level index, or 0 when nothing usable is stored.
    pub fn load(&self) -> usize {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(_) => return 0,
        };
        match serde_json::from_str::<SaveData>(&text) {
            Ok(data) => data.level,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring corrupt save file");
                0
            }
        }
    }

    pub fn save(&self, level: usize) -> Result<()> {
        let json = serde_json::to_string(&SaveData { level })?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write save file {}", self.path.display()))?;
        debug!(level, "progress saved");
        Ok(())
    }
}
