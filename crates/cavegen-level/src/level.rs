//! 2D tile grid for a generated level.

use cavegen_core::{Cell, Direction, Error, LevelConfig, Position, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangular grid of cells.
///
/// Storage is a flat row-major buffer indexed `y * width + x`, with
/// `x` in `[0, width)` and `y` in `[0, height)`. The level behaves as if
/// surrounded by an infinite wall: [`Level::get`] answers `Wall` for any
/// out-of-range coordinate, however far outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub width: i32,
    pub height: i32,
    cells: Vec<Cell>,
}

impl Level {
    /// Create a level with every cell free.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width * height) as usize;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Free; size],
        })
    }

    /// Create a level from configuration
    pub fn from_config(config: &LevelConfig) -> Result<Self> {
        Self::new(config.width, config.height)
    }

    /// Get the cell at `(x, y)`.
    ///
    /// Out-of-range coordinates are not an error: they read as `Wall`,
    /// in every direction and at any distance.
    pub fn get(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return Cell::Wall;
        }
        self.cells[self.index(x, y)]
    }

    /// Set the cell at `(x, y)`. Coordinates must be in bounds.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        debug_assert!(
            x >= 0 && y >= 0 && x < self.width && y < self.height,
            "set out of bounds: ({x}, {y}) on {}x{}",
            self.width,
            self.height
        );
        let index = self.index(x, y);
        self.cells[index] = cell;
    }

    /// Scatter straight wall segments of length `wall_size` across the
    /// level, targeting roughly one tenth total coverage.
    ///
    /// Each segment picks a uniform orientation, then a uniform start
    /// position such that the whole run fits inside the level. Segments may
    /// overlap each other and existing walls.
    pub fn fill_random_walls(&mut self, rng: &mut impl Rng, wall_size: i32) -> Result<()> {
        if wall_size <= 0 || wall_size >= self.width || wall_size >= self.height {
            return Err(Error::InvalidWallSize {
                wall_size,
                width: self.width,
                height: self.height,
            });
        }
        let n_walls = self.width * self.height / wall_size / 10;
        for _ in 0..n_walls {
            if rng.gen_bool(0.5) {
                // Vertical wall
                let x = rng.gen_range(0..self.width);
                let y0 = rng.gen_range(0..self.height - wall_size);
                for k in 0..wall_size {
                    self.set(x, y0 + k, Cell::Wall);
                }
            } else {
                // Horizontal wall
                let x0 = rng.gen_range(0..self.width - wall_size);
                let y = rng.gen_range(0..self.height);
                for k in 0..wall_size {
                    self.set(x0 + k, y, Cell::Wall);
                }
            }
        }
        Ok(())
    }

    /// Seed walls from uniform noise: each cell independently becomes a
    /// wall with probability `chance_to_start_alive`.
    ///
    /// Cells that miss the roll keep their current state, so the pass is
    /// additive over walls placed earlier.
    pub fn noise_map(&mut self, rng: &mut impl Rng, chance_to_start_alive: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&chance_to_start_alive) {
            return Err(Error::InvalidProbability {
                chance: chance_to_start_alive,
            });
        }
        for y in 0..self.height {
            for x in 0..self.width {
                if rng.gen::<f32>() < chance_to_start_alive {
                    self.set(x, y, Cell::Wall);
                }
            }
        }
        Ok(())
    }

    /// Count wall cells among the 8 neighbors of `(x, y)`.
    ///
    /// Neighbors are read through [`Level::get`], so cells beyond the level
    /// boundary count as walls.
    pub fn count_alive_neighbors(&self, x: i32, y: i32) -> u32 {
        Direction::all()
            .iter()
            .filter(|dir| {
                let (dx, dy) = dir.to_delta();
                self.get(x + dx, y + dy).is_wall()
            })
            .count() as u32
    }

    /// Number of wall cells in the level
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_wall()).count()
    }

    /// Iterator over all cells with positions
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (self.index_to_pos(i), cell))
    }

    fn index(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let x = (index as i32) % self.width;
        let y = (index as i32) / self.width;
        Position::new(x, y)
    }
}

impl fmt::Display for Level {
    /// Diagnostic dump: a dimensions header, then one row of glyphs per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} x {}", self.width, self.height)?;
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.get(x, y))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
