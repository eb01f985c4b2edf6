use serde::{Deserialize, Serialize};

use crate::error::InvalidDirection;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit vector `(dx, dy)`; y grows downwards.
    #[must_use]
    pub fn vector(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

impl TryFrom<(i32, i32)> for Direction {
    type Error = InvalidDirection;

    fn try_from((dx, dy): (i32, i32)) -> Result<Self, Self::Error> {
        match (dx, dy) {
            (0, -1) => Ok(Self::Up),
            (0, 1) => Ok(Self::Down),
            (-1, 0) => Ok(Self::Left),
            (1, 0) => Ok(Self::Right),
            _ => Err(InvalidDirection { dx, dy }),
        }
    }
}

/// High-level input events produced by the front end.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Confirm,
    Pause,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
///
/// With no committed direction yet every cardinal direction is legal.
#[must_use]
pub fn direction_change_is_valid(current: Option<Direction>, next: Direction) -> bool {
    current.is_none_or(|current| next != current.opposite())
}

/// Single-slot buffer holding the direction the next tick should commit.
///
/// Reversals of the committed direction are dropped on arrival; anything
/// else overwrites the slot, so the last legal intent between two ticks wins.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct InputBuffer {
    pending: Option<Direction>,
}

impl InputBuffer {
    /// Creates a buffer pre-loaded with `pending`.
    #[must_use]
    pub fn with_pending(pending: Option<Direction>) -> Self {
        Self { pending }
    }

    /// Buffers `requested` unless it reverses `current`. Returns whether it was accepted.
    pub fn set_intent(&mut self, current: Option<Direction>, requested: Direction) -> bool {
        if !direction_change_is_valid(current, requested) {
            return false;
        }

        self.pending = Some(requested);
        true
    }

    /// Buffers a raw `(dx, dy)` vector; non-cardinal vectors are ignored.
    pub fn set_intent_vector(&mut self, current: Option<Direction>, vector: (i32, i32)) -> bool {
        match Direction::try_from(vector) {
            Ok(direction) => self.set_intent(current, direction),
            Err(_) => false,
        }
    }

    /// Returns the buffered direction, if any.
    #[must_use]
    pub fn pending(self) -> Option<Direction> {
        self.pending
    }

    /// Returns the direction the next tick commits given the current one.
    #[must_use]
    pub fn resolve(self, current: Option<Direction>) -> Option<Direction> {
        match self.pending {
            Some(pending) if direction_change_is_valid(current, pending) => Some(pending),
            _ => current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, InputBuffer, direction_change_is_valid};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn direction_change_rejects_reverse() {
        assert!(!direction_change_is_valid(Some(Direction::Up), Direction::Down));
        assert!(!direction_change_is_valid(
            Some(Direction::Right),
            Direction::Left
        ));

        assert!(direction_change_is_valid(Some(Direction::Up), Direction::Left));
        assert!(direction_change_is_valid(Some(Direction::Up), Direction::Up));
        assert!(direction_change_is_valid(None, Direction::Left));
    }

    #[test]
    fn vectors_convert_only_when_cardinal() {
        assert_eq!(Direction::try_from((1, 0)), Ok(Direction::Right));
        assert_eq!(Direction::try_from((0, -1)), Ok(Direction::Up));
        assert!(Direction::try_from((0, 0)).is_err());
        assert!(Direction::try_from((1, 1)).is_err());
        assert!(Direction::try_from((2, 0)).is_err());
    }

    #[test]
    fn buffer_drops_reversal_without_touching_slot() {
        let mut buffer = InputBuffer::with_pending(Some(Direction::Right));

        assert!(!buffer.set_intent(Some(Direction::Right), Direction::Left));
        assert_eq!(buffer.pending(), Some(Direction::Right));
    }

    #[test]
    fn buffer_is_last_write_wins() {
        let mut buffer = InputBuffer::default();
        let current = Some(Direction::Right);

        assert!(buffer.set_intent(current, Direction::Up));
        assert!(buffer.set_intent(current, Direction::Down));
        assert_eq!(buffer.resolve(current), Some(Direction::Down));
    }

    #[test]
    fn buffer_accepts_anything_before_first_move() {
        let mut buffer = InputBuffer::default();

        assert!(buffer.set_intent(None, Direction::Left));
        assert_eq!(buffer.resolve(None), Some(Direction::Left));
    }

    #[test]
    fn buffer_ignores_invalid_vectors() {
        let mut buffer = InputBuffer::with_pending(Some(Direction::Up));

        assert!(!buffer.set_intent_vector(Some(Direction::Up), (0, 0)));
        assert!(!buffer.set_intent_vector(Some(Direction::Up), (1, -1)));
        assert_eq!(buffer.pending(), Some(Direction::Up));

        assert!(buffer.set_intent_vector(Some(Direction::Up), (-1, 0)));
        assert_eq!(buffer.pending(), Some(Direction::Left));
    }

    #[test]
    fn resolve_keeps_current_when_pending_reverses() {
        let buffer = InputBuffer::with_pending(Some(Direction::Left));

        assert_eq!(buffer.resolve(Some(Direction::Right)), Some(Direction::Right));
        assert_eq!(InputBuffer::default().resolve(None), None);
    }
}
