//! Grid map - fixed tile layout with world-coordinate lookups
//!
//! The grid is built once and never mutated. Cells are stored row-major and a
//! world coordinate `(x, y)` lands in cell `floor(x / tile) + floor(y / tile) * width`.

use thiserror::Error;

use crate::draw::{Drawable, Renderer};
use crate::types::{palette, Tile, MAP_HEIGHT, MAP_WIDTH, TILE_GAP, TILE_SIZE, WALL_HEIGHT};

const W: Tile = Tile::Wall;
const E: Tile = Tile::Empty;

/// Default 8x8 layout.
#[rustfmt::skip]
const DEFAULT_TILES: [Tile; MAP_WIDTH * MAP_HEIGHT] = [
    W, W, W, W, W, W, W, W,
    W, E, W, E, E, E, E, W,
    W, E, W, E, E, E, E, W,
    W, E, W, E, E, E, E, W,
    W, E, E, E, E, E, E, W,
    W, E, E, E, E, W, E, W,
    W, E, E, E, E, E, E, W,
    W, W, W, W, W, W, W, W,
];

/// Errors raised while building a grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("grid must have at least one column and one row (got {width}x{height})")]
    Empty { width: usize, height: usize },

    #[error("expected {expected} cells for the grid, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("tile size must be positive and finite (got {0})")]
    InvalidTileSize(f64),

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unknown tile glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },
}

/// Immutable tile grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridMap {
    width: usize,
    height: usize,
    tile_size: f64,
    wall_height: f64,
    cells: Box<[Tile]>,
}

impl Default for GridMap {
    fn default() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            tile_size: TILE_SIZE,
            wall_height: WALL_HEIGHT,
            cells: DEFAULT_TILES.into(),
        }
    }
}

impl GridMap {
    /// Build a grid from row-major cells.
    pub fn new(
        width: usize,
        height: usize,
        tile_size: f64,
        cells: Vec<Tile>,
    ) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::Empty { width, height });
        }
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return Err(MapError::InvalidTileSize(tile_size));
        }
        let expected = width * height;
        if cells.len() != expected {
            return Err(MapError::SizeMismatch {
                expected,
                actual: cells.len(),
            });
        }

        tracing::debug!(width, height, tile_size, "grid map built");
        Ok(Self {
            width,
            height,
            tile_size,
            wall_height: WALL_HEIGHT,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Parse a grid from text rows, `#` for walls and `.` for empty cells.
    ///
    /// ```
    /// use tui_raycaster_core::GridMap;
    /// use tui_raycaster_core::types::Tile;
    ///
    /// let map = GridMap::from_rows(64.0, &["###", "#.#", "###"]).unwrap();
    /// assert_eq!(map.tile(1, 1), Some(Tile::Empty));
    /// assert_eq!(map.tile_at(10.0, 10.0), Some(Tile::Wall));
    /// ```
    pub fn from_rows(tile_size: f64, rows: &[&str]) -> Result<Self, MapError> {
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let count = line.chars().count();
            if count != width {
                return Err(MapError::RaggedRow {
                    row,
                    expected: width,
                    actual: count,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                let tile =
                    Tile::from_glyph(glyph).ok_or(MapError::UnknownGlyph { glyph, row, col })?;
                cells.push(tile);
            }
        }
        Self::new(width, rows.len(), tile_size, cells)
    }

    pub fn with_wall_height(mut self, wall_height: f64) -> Self {
        self.wall_height = wall_height;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    pub fn wall_height(&self) -> f64 {
        self.wall_height
    }

    pub fn world_width(&self) -> f64 {
        self.width as f64 * self.tile_size
    }

    pub fn world_height(&self) -> f64 {
        self.height as f64 * self.tile_size
    }

    /// Tile at grid coordinates, `None` outside the grid.
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells.get(col + row * self.width).copied()
    }

    /// Tile containing the world coordinate `(world_x, world_y)`.
    ///
    /// A cell with top-left corner `(cx, cy)` owns the half-open square
    /// `[cx, cx + tile) x [cy, cy + tile)`. Anything outside the grid, or a
    /// non-finite coordinate, is `None`. Columns are bounds-checked on their
    /// own so a point past the right edge never wraps into the next row.
    pub fn tile_at(&self, world_x: f64, world_y: f64) -> Option<Tile> {
        if !(world_x.is_finite() && world_y.is_finite()) {
            return None;
        }
        let col = (world_x / self.tile_size).floor();
        let row = (world_y / self.tile_size).floor();
        if col < 0.0 || row < 0.0 || col >= self.width as f64 || row >= self.height as f64 {
            return None;
        }
        self.tile(col as usize, row as usize)
    }

    /// Row-major iterator of `(col, row, tile)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &tile)| (i % width, i / width, tile))
    }
}

impl Drawable for GridMap {
    /// Each cell becomes a rect inset by half the gap on every side.
    fn draw(&self, gfx: &mut dyn Renderer) {
        let size = self.tile_size - TILE_GAP;
        for (col, row, tile) in self.cells() {
            let color = match tile {
                Tile::Empty => palette::EMPTY_TILE,
                Tile::Wall => palette::WALL_TILE,
            };
            let x = col as f64 * self.tile_size + TILE_GAP / 2.0;
            let y = row as f64 * self.tile_size + TILE_GAP / 2.0;
            gfx.draw_rect(x, y, size, size, color);
        }
    }
}
