use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::INITIAL_SNAKE_LENGTH;
use crate::error::EmptySnake;
use crate::grid::{Cell, Grid};
use crate::input::Direction;

/// Snake body, head first. Serialized as a plain list of cells.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Creates the starting body: head at the grid center, trailing to the left.
    #[must_use]
    pub fn starting(grid: Grid) -> Self {
        let head = grid.center();
        let body = (0..INITIAL_SNAKE_LENGTH)
            .scan(head, |cell, _| {
                let current = *cell;
                *cell = cell.step(Direction::Left);
                Some(current)
            })
            .collect();

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Pushes `head` to the front and pops the tail unless `grow` is set.
    pub fn advance(&mut self, head: Cell, grow: bool) {
        self.body.push_front(head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the last segment.
    #[must_use]
    pub fn tail(&self) -> Cell {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false for a well-formed snake.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    /// Returns true when every consecutive pair is one unit step apart.
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        self.body
            .iter()
            .zip(self.body.iter().skip(1))
            .all(|(a, b)| a.is_adjacent(*b))
    }
}

impl TryFrom<Vec<Cell>> for Snake {
    type Error = EmptySnake;

    fn try_from(segments: Vec<Cell>) -> Result<Self, Self::Error> {
        if segments.is_empty() {
            return Err(EmptySnake);
        }

        Ok(Self {
            body: VecDeque::from(segments),
        })
    }
}

impl From<Snake> for Vec<Cell> {
    fn from(snake: Snake) -> Self {
        snake.body.into()
    }
}

#[cfg(test)]
mod tests {
    use super::Snake;
    use crate::error::EmptySnake;
    use crate::grid::{Cell, Grid};

    #[test]
    fn starting_body_trails_left_of_center() {
        let snake = Snake::starting(Grid::new(20));

        let segments: Vec<Cell> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)]
        );
        assert!(snake.is_contiguous());
    }

    #[test]
    fn advance_without_growth_keeps_length() {
        let mut snake = Snake::starting(Grid::new(20));

        snake.advance(Cell::new(11, 10), false);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(11, 10));
        assert_eq!(snake.tail(), Cell::new(9, 10));
        assert!(!snake.occupies(Cell::new(8, 10)));
    }

    #[test]
    fn advance_with_growth_keeps_previous_tail() {
        let mut snake = Snake::starting(Grid::new(20));

        snake.advance(Cell::new(11, 10), true);

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Cell::new(8, 10));
    }

    #[test]
    fn gaps_break_contiguity() {
        let snake = Snake::from_segments(vec![Cell::new(1, 1), Cell::new(3, 1)]);
        assert!(!snake.is_contiguous());
    }

    #[test]
    fn empty_body_is_rejected() {
        assert_eq!(Snake::try_from(Vec::<Cell>::new()), Err(EmptySnake));
        assert!(serde_json::from_str::<Snake>("[]").is_err());
    }

    #[test]
    fn serialized_body_reads_back() {
        let snake = Snake::starting(Grid::new(20));
        let json = serde_json::to_string(&snake).expect("snake should serialize");

        assert_eq!(json, r#"[{"x":10,"y":10},{"x":9,"y":10},{"x":8,"y":10}]"#);
        let restored: Snake = serde_json::from_str(&json).expect("snake should deserialize");
        assert_eq!(restored, snake);
    }
}
