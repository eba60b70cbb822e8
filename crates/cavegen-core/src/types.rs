//! Core type definitions for the level generator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single level cell.
///
/// Levels render walls as `#` and free cells as `.`; no other symbols are
/// ever stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Free,
    Wall,
}

impl Cell {
    pub fn is_wall(&self) -> bool {
        matches!(self, Cell::Wall)
    }

    /// The rendering glyph for this cell.
    pub fn to_char(&self) -> char {
        match self {
            Cell::Free => '.',
            Cell::Wall => '#',
        }
    }

    /// Parse a rendering glyph back into a cell state.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Free),
            '#' => Some(Cell::Wall),
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Free
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 2D position in a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn add(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The eight compass directions around a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub fn to_delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
        }
    }

    pub fn all() -> [Direction; 8] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
            Direction::NorthEast,
            Direction::NorthWest,
            Direction::SouthEast,
            Direction::SouthWest,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_glyphs() {
        assert_eq!(Cell::Wall.to_char(), '#');
        assert_eq!(Cell::Free.to_char(), '.');
        assert_eq!(Cell::from_char('#'), Some(Cell::Wall));
        assert_eq!(Cell::from_char('.'), Some(Cell::Free));
        assert_eq!(Cell::from_char('x'), None);
    }

    #[test]
    fn test_cell_default_is_free() {
        assert_eq!(Cell::default(), Cell::Free);
        assert!(!Cell::default().is_wall());
    }

    #[test]
    fn test_position_add() {
        let pos = Position::new(3, 4);
        assert_eq!(pos.add(1, -1), Position::new(4, 3));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::North.to_delta(), (0, -1));
        assert_eq!(Direction::South.to_delta(), (0, 1));
        assert_eq!(Direction::East.to_delta(), (1, 0));
        assert_eq!(Direction::West.to_delta(), (-1, 0));
    }

    #[test]
    fn test_directions_cover_full_neighborhood() {
        let deltas: Vec<(i32, i32)> = Direction::all().iter().map(|d| d.to_delta()).collect();
        assert_eq!(deltas.len(), 8);
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                assert!(deltas.contains(&(dx, dy)), "missing delta ({dx}, {dy})");
            }
        }
    }
}
