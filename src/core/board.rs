//! # Board
//!
//! The 4×4 grid and the single row algorithm everything else is built on.
//!
//! ```text
//!  col →  0    1    2    3
//! row 0 [ 2 ][   ][   ][   ]
//! row 1 [   ][ 4 ][   ][   ]
//! row 2 [   ][   ][   ][   ]
//! row 3 [   ][   ][   ][ 2 ]
//! ```
//!
//! Cells hold `0` for empty or a power of two ≥ 2. Moves are not implemented
//! per direction: the board is rotated so the move faces left, every row is
//! run through [`shift_and_merge_row`], and the board is rotated back.

use std::fmt;

/// Side length of the board.
pub const SIZE: usize = 4;

/// One row of cells, left to right.
pub type Row = [u32; SIZE];

/// Result of sliding a single row toward index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowShift {
    pub row: Row,
    /// True if any tile merged or ended at a different index.
    pub moved: bool,
    /// Sum of the values produced by merges.
    pub score: u32,
}

/// Slides a row left, merging equal neighbours at most once per output slot.
///
/// `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]` and `[2, 2, 2, 0]` becomes
/// `[4, 2, 0, 0]`: a tile produced by a merge never merges again in the
/// same pass.
pub fn shift_and_merge_row(row: Row) -> RowShift {
    let mut out = [0; SIZE];
    let mut idx = 0;
    let mut moved = false;
    let mut score = 0;
    // Slot idx-1 can still absorb a merge
    let mut open = false;

    for (i, &value) in row.iter().enumerate() {
        if value == 0 {
            continue;
        }
        if open && out[idx - 1] == value {
            out[idx - 1] *= 2;
            score += out[idx - 1];
            moved = true;
            open = false;
        } else {
            out[idx] = value;
            if idx != i {
                moved = true;
            }
            idx += 1;
            open = true;
        }
    }

    RowShift {
        row: out,
        moved,
        score,
    }
}

/// A fixed 4×4 grid, row-major.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Row; SIZE],
}

impl Board {
    pub const EMPTY: Board = Board {
        cells: [[0; SIZE]; SIZE],
    };

    pub fn from_rows(cells: [Row; SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[Row; SIZE] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row][col] = value;
    }

    /// Positions of all empty cells, in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == 0 {
                    empty.push((r, c));
                }
            }
        }
        empty
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Rotates the grid 90° clockwise: `(r, c)` moves to `(c, SIZE - 1 - r)`.
    pub fn rotated(&self) -> Board {
        let mut out = [[0; SIZE]; SIZE];
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                out[c][SIZE - 1 - r] = value;
            }
        }
        Board { cells: out }
    }

    pub fn rotated_times(&self, times: usize) -> Board {
        (0..times % 4).fold(*self, |board, _| board.rotated())
    }

    /// Flips the grid left to right.
    pub fn mirrored(&self) -> Board {
        let mut cells = self.cells;
        for row in cells.iter_mut() {
            row.reverse();
        }
        Board { cells }
    }

    /// Runs [`shift_and_merge_row`] over every row.
    ///
    /// Returns whether any row moved and the total merge score. Rows that did
    /// not move are left untouched.
    pub fn shift_left(&mut self) -> (bool, u32) {
        let mut moved = false;
        let mut score = 0;
        for row in self.cells.iter_mut() {
            let shift = shift_and_merge_row(*row);
            if shift.moved {
                *row = shift.row;
                moved = true;
                score += shift.score;
            }
        }
        (moved, score)
    }

    /// True when the board is full and no two orthogonal neighbours match.
    pub fn is_stuck(&self) -> bool {
        for r in 0..SIZE {
            for c in 0..SIZE {
                let value = self.cells[r][c];
                if value == 0 {
                    return false;
                }
                if r + 1 < SIZE && self.cells[r + 1][c] == value {
                    return false;
                }
                if c + 1 < SIZE && self.cells[r][c + 1] == value {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board [")?;
        for row in &self.cells {
            writeln!(f, "  {:?}", row)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board::from_rows([
            [2, 4, 8, 16],
            [32, 64, 128, 256],
            [512, 1024, 2048, 0],
            [0, 2, 0, 4],
        ])
    }

    #[test]
    fn test_merge_four_equal_tiles() {
        let shift = shift_and_merge_row([2, 2, 2, 2]);
        assert_eq!(shift.row, [4, 4, 0, 0]);
        assert!(shift.moved);
        assert_eq!(shift.score, 8);
    }

    #[test]
    fn test_no_chain_merge() {
        let shift = shift_and_merge_row([2, 2, 2, 0]);
        assert_eq!(shift.row, [4, 2, 0, 0]);
        assert!(shift.moved);
        assert_eq!(shift.score, 4);
    }

    #[test]
    fn test_merged_tile_does_not_absorb_equal_follower() {
        // The 4 produced by 2+2 must not merge with the original 4
        let shift = shift_and_merge_row([2, 2, 4, 0]);
        assert_eq!(shift.row, [4, 4, 0, 0]);
        assert_eq!(shift.score, 4);
    }

    #[test]
    fn test_compaction_without_merge_counts_as_moved() {
        let shift = shift_and_merge_row([0, 0, 0, 2]);
        assert_eq!(shift.row, [2, 0, 0, 0]);
        assert!(shift.moved);
        assert_eq!(shift.score, 0);
    }

    #[test]
    fn test_merge_across_gap() {
        let shift = shift_and_merge_row([4, 0, 0, 4]);
        assert_eq!(shift.row, [8, 0, 0, 0]);
        assert_eq!(shift.score, 8);
    }

    #[test]
    fn test_compacted_row_does_not_move() {
        let shift = shift_and_merge_row([2, 4, 8, 0]);
        assert_eq!(shift.row, [2, 4, 8, 0]);
        assert!(!shift.moved);
        assert_eq!(shift.score, 0);

        let empty = shift_and_merge_row([0; SIZE]);
        assert!(!empty.moved);
    }

    #[test]
    fn test_rotation_maps_cells_clockwise() {
        let rotated = sample().rotated();
        // Left column read bottom to top becomes the top row
        assert_eq!(rotated.rows()[0], [0, 512, 32, 2]);
        assert_eq!(rotated.get(3, 0), 4);
    }

    #[test]
    fn test_four_rotations_round_trip() {
        let board = sample();
        assert_eq!(board.rotated_times(4), board);
        assert_eq!(board.rotated().rotated().rotated().rotated(), board);
        assert_ne!(board.rotated(), board);
    }

    #[test]
    fn test_mirror_is_an_involution() {
        let board = sample();
        assert_eq!(board.mirrored().rows()[0], [16, 8, 4, 2]);
        assert_eq!(board.mirrored().mirrored(), board);
    }

    #[test]
    fn test_empty_cells_and_max_tile() {
        let board = sample();
        assert_eq!(board.empty_cells(), vec![(2, 3), (3, 0), (3, 2)]);
        assert_eq!(board.count_empty(), 3);
        assert_eq!(board.max_tile(), 2048);
        assert_eq!(Board::EMPTY.count_empty(), SIZE * SIZE);
    }

    #[test]
    fn test_checkerboard_is_stuck() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(board.is_stuck());
    }

    #[test]
    fn test_not_stuck_with_empty_cell() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]]);
        assert!(!board.is_stuck());
    }

    #[test]
    fn test_not_stuck_with_equal_neighbours() {
        let horizontal =
            Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 2, 8]]);
        assert!(!horizontal.is_stuck());

        let vertical = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [2, 8, 4, 2]]);
        assert!(!vertical.is_stuck());
    }
}
