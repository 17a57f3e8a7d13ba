//! Level files: discovery, loading, and the default-map fallback.
//!
//! A level file is plain text, one grid row per line. Loading never fails from
//! the caller's point of view: a missing, unreadable, empty or oversized file
//! is replaced by [`DEFAULT_MAP`](crate::core::DEFAULT_MAP) and a warning is
//! logged.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::{Grid, GridError};

/// Level file names used when a directory holds no `.txt` files.
pub const STANDARD_LEVEL_FILES: [&str; 2] = ["level1.txt", "level2.txt"];

#[derive(Debug, Error)]
pub enum LevelLoadError {
    #[error("failed to read level {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("level {path} is unusable: {source}")]
    Grid {
        path: PathBuf,
        #[source]
        source: GridError,
    },
}

/// A grid ready to play, plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedLevel {
    /// File stem, shown in the HUD.
    pub name: String,
    pub grid: Arc<Grid>,
    /// The default map replaced an unusable file.
    pub fallback: bool,
}

/// Ordered list of level files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSet {
    paths: Vec<PathBuf>,
}

impl LevelSet {
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// Sorted `*.txt` files in `dir`, or the standard file names when there
    /// are none (those then load as the default map).
    pub fn discover(dir: &Path) -> Self {
        let mut paths: Vec<PathBuf> = match fs::read_dir(dir) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "txt"))
                .collect(),
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "level directory not readable");
                Vec::new()
            }
        };
        paths.sort();

        if paths.is_empty() {
            paths = STANDARD_LEVEL_FILES.iter().map(|f| dir.join(f)).collect();
        }
        debug!(count = paths.len(), "discovered levels");
        Self { paths }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Clamp a (possibly stale) saved index into this set.
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.paths.len().saturating_sub(1))
    }

    /// Whether `index` is the final level.
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 >= self.paths.len()
    }

    /// Load the level at `index` (clamped). An empty set yields the default map.
    pub fn load(&self, index: usize, tile_size: i32) -> LoadedLevel {
        match self.paths.get(self.clamp_index(index)) {
            Some(path) => load_level(path, tile_size),
            None => LoadedLevel {
                name: "default".to_string(),
                grid: Arc::new(Grid::default_map(tile_size)),
                fallback: true,
            },
        }
    }
}

/// Read the rows of a level file.
pub fn load_rows(path: &Path) -> Result<Vec<String>, LevelLoadError> {
    let text = fs::read_to_string(path).map_err(|source| LevelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Read and build a level file into a grid.
pub fn try_load_grid(path: &Path, tile_size: i32) -> Result<Grid, LevelLoadError> {
    let rows = load_rows(path)?;
    Grid::build(&rows, tile_size).map_err(|source| LevelLoadError::Grid {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a level, substituting the default map on any failure.
pub fn load_level(path: &Path, tile_size: i32) -> LoadedLevel {
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "level".to_string());

    match try_load_grid(path, tile_size) {
        Ok(grid) => {
            debug!(level = %name, cols = grid.cols(), rows = grid.rows(), "loaded level");
            if !grid.has_spawn_marker() {
                warn!(level = %name, "level has no spawn marker, using fallback spawn");
            }
            LoadedLevel {
                name,
                grid: Arc::new(grid),
                fallback: false,
            }
        }
        Err(e) => {
            warn!(error = %e, "using default map");
            LoadedLevel {
                name,
                grid: Arc::new(Grid::default_map(tile_size)),
                fallback: true,
            }
        }
    }
}
