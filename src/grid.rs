use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::input::Direction;

/// Grid position in logical tile coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when `other` differs by exactly one unit on exactly one axis.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

/// Square N×N board.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    tiles: u16,
}

impl Grid {
    #[must_use]
    pub const fn new(tiles: u16) -> Self {
        Self { tiles }
    }

    /// Returns the edge length in tiles.
    #[must_use]
    pub fn tiles(self) -> u16 {
        self.tiles
    }

    /// Returns the total number of cells on the board.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.tiles) * usize::from(self.tiles)
    }

    /// Returns true iff `0 <= x < N` and `0 <= y < N`.
    #[must_use]
    pub fn in_bounds(self, cell: Cell) -> bool {
        let n = i32::from(self.tiles);
        cell.x >= 0 && cell.y >= 0 && cell.x < n && cell.y < n
    }

    /// Returns a uniformly random cell on the board.
    pub fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Cell {
        let n = i32::from(self.tiles);
        Cell {
            x: rng.gen_range(0..n),
            y: rng.gen_range(0..n),
        }
    }

    /// Returns the middle cell, rounding towards the bottom-right.
    #[must_use]
    pub fn center(self) -> Cell {
        let c = i32::from(self.tiles / 2);
        Cell { x: c, y: c }
    }

    /// Iterates all cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let n = i32::from(self.tiles);
        (0..n).flat_map(move |y| (0..n).map(move |x| Cell { x, y }))
    }
}
