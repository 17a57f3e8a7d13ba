//! Grid module - the static tile layout of a level
//!
//! A grid is built once from rows of text and never changes afterwards.
//! Only `Solid` and `Goal` cells are stored, as flat `(rect, kind)` pairs in
//! row-major order; collision code walks them linearly, which is plenty for
//! the tens-to-hundreds of tiles a level holds.

use crate::error::GridError;
use crate::types::{CellKind, Point, Rect, TileKind, DEATH_MARGIN_TILES};

/// Built-in 12x32 level used whenever no usable level file exists.
pub const DEFAULT_MAP: [&str; 12] = [
    "--------------------------------",
    "--------------------------------",
    "---------------------XXXX-------",
    "-------------XXX----------------",
    "----------------------XX--------",
    "------XX------------------------",
    "---------------------------X----",
    "----------XX--------------------",
    "----------------------XXXX------",
    "----P-------------------------G-",
    "--------------------------------",
    "XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
];

/// A solid or goal cell with its world rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub rect: Rect,
    pub kind: TileKind,
}

/// Immutable tile layout of one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Tile>,
    cols: usize,
    rows: usize,
    tile_size: i32,
    spawn: Point,
    has_spawn_marker: bool,
}

impl Grid {
    /// Build a grid from level rows.
    ///
    /// `X` is solid, `G` a goal, `P` the spawn marker (the first one wins) and
    /// any other character is empty. Rows shorter than the longest row are
    /// padded with empty cells. Zero rows are rejected, as is a layout whose
    /// pixel extent (including the death margin) would overflow `i32`.
    pub fn build<S: AsRef<str>>(rows: &[S], tile_size: i32) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Err(GridError::Empty);
        }
        let cols = rows
            .iter()
            .map(|r| r.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        if !fits_in_world(cols, rows.len(), tile_size) {
            return Err(GridError::TooLarge {
                cols,
                rows: rows.len(),
            });
        }
        Ok(Self::parse(rows, tile_size))
    }

    /// The built-in fallback level. `tile_size` must pass
    /// [`Physics::validate`](crate::Physics::validate).
    pub fn default_map(tile_size: i32) -> Self {
        Self::parse(&DEFAULT_MAP, tile_size)
    }

    fn parse<S: AsRef<str>>(rows: &[S], tile_size: i32) -> Self {
        let mut tiles = Vec::new();
        let mut spawn = None;
        let mut cols = 0;

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let mut width = 0;
            for (col, ch) in line.chars().enumerate() {
                width = col + 1;
                let x = col as i32 * tile_size;
                let y = row as i32 * tile_size;
                let rect = Rect::new(x, y, tile_size, tile_size);
                match CellKind::from_char(ch) {
                    CellKind::Solid => tiles.push(Tile {
                        rect,
                        kind: TileKind::Solid,
                    }),
                    CellKind::Goal => tiles.push(Tile {
                        rect,
                        kind: TileKind::Goal,
                    }),
                    // The body starts standing one tile above the marker cell.
                    CellKind::Spawn if spawn.is_none() => {
                        spawn = Some(Point::new(x, y - tile_size));
                    }
                    CellKind::Spawn | CellKind::Empty => {}
                }
            }
            cols = cols.max(width);
        }

        Self {
            tiles,
            cols,
            rows: rows.len(),
            tile_size,
            has_spawn_marker: spawn.is_some(),
            spawn: spawn.unwrap_or(Point::new(tile_size, tile_size)),
        }
    }

    /// All stored tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn solids(&self) -> impl Iterator<Item = &Rect> + '_ {
        self.tiles_of(TileKind::Solid)
    }

    pub fn goals(&self) -> impl Iterator<Item = &Rect> + '_ {
        self.tiles_of(TileKind::Goal)
    }

    fn tiles_of(&self, kind: TileKind) -> impl Iterator<Item = &Rect> + '_ {
        self.tiles
            .iter()
            .filter(move |t| t.kind == kind)
            .map(|t| &t.rect)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    pub fn pixel_width(&self) -> i32 {
        self.cols as i32 * self.tile_size
    }

    pub fn pixel_height(&self) -> i32 {
        self.rows as i32 * self.tile_size
    }

    /// Top-left position the body spawns at.
    pub fn spawn(&self) -> Point {
        self.spawn
    }

    /// False when the description had no `P` and the fallback spawn is used.
    pub fn has_spawn_marker(&self) -> bool {
        self.has_spawn_marker
    }

    /// A body whose top edge is below this line has fallen out of the world.
    pub fn death_line(&self) -> i32 {
        self.pixel_height() + DEATH_MARGIN_TILES * self.tile_size
    }
}

/// Whether `cols` x `rows` cells of `tile_size` pixels, plus the death
/// margin below and beside them, stay inside `i32`.
fn fits_in_world(cols: usize, rows: usize, tile_size: i32) -> bool {
    let margin = DEATH_MARGIN_TILES as usize;
    let span = |cells: usize| {
        cells
            .checked_add(margin)
            .and_then(|n| i32::try_from(n).ok())
            .and_then(|n| n.checked_mul(tile_size))
    };
    span(cols).is_some() && span(rows).is_some()
}
