use rand::Rng;

use crate::config::MAX_SPAWN_ATTEMPTS;
use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Picks a cell not occupied by the snake, or `None` when the board is full.
///
/// Random draws are retried up to [`MAX_SPAWN_ATTEMPTS`] times; after that
/// the free cells are enumerated and one is chosen uniformly, so crowded
/// boards still terminate.
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, grid: Grid, snake: &Snake) -> Option<Cell> {
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let candidate = grid.random_cell(rng);
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    let candidates: Vec<Cell> = grid.cells().filter(|cell| !snake.occupies(*cell)).collect();
    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
