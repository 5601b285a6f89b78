//! # Directions
//!
//! The four move inputs. Every direction is resolved by rotating the board
//! so that it faces left, so the only thing a direction needs to know is how
//! many clockwise quarter turns that takes.

/// A direction to slide and merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Clockwise quarter turns needed to make this direction face left.
    pub const fn rotations(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }

    /// Quarter turns that undo [`Direction::rotations`].
    pub const fn restoring_rotations(self) -> usize {
        (4 - self.rotations()) % 4
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_counts() {
        assert_eq!(Direction::Left.rotations(), 0);
        assert_eq!(Direction::Down.rotations(), 1);
        assert_eq!(Direction::Right.rotations(), 2);
        assert_eq!(Direction::Up.rotations(), 3);
    }

    #[test]
    fn test_restoring_rotations_complete_a_full_turn() {
        for dir in Direction::ALL {
            assert_eq!((dir.rotations() + dir.restoring_rotations()) % 4, 0);
        }
        assert_eq!(Direction::Left.restoring_rotations(), 0);
        assert_eq!(Direction::Up.restoring_rotations(), 1);
    }
}
