//! # Game Engine
//!
//! Owns the board, the score and the game-over flag. Randomness is never
//! ambient: every operation that spawns a tile takes the RNG as an argument,
//! so a seeded RNG replays the exact same game.
//!
//! ## Turn Protocol
//!
//! ```text
//! direction ──► apply_move ──moved?──► spawn_tile ──► recompute game_over
//!                   │
//!                   └── not moved: nothing changes, nothing spawns
//! ```
//!
//! [`Game::turn`] runs the whole sequence; the individual steps are public so
//! tests can drive them one at a time.

use log::debug;
use rand::Rng;

use crate::core::board::Board;
use crate::core::direction::Direction;

/// Probability that a spawned tile is a 4 instead of a 2.
pub const FOUR_PROBABILITY: f64 = 0.1;

/// What a directional input did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub moved: bool,
    /// True if this move ended the game.
    pub game_over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    score: u32,
    game_over: bool,
}

impl Game {
    /// Starts a fresh game with two spawned tiles.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut game = Self::from_board(Board::EMPTY, 0);
        game.initialize(rng);
        game
    }

    /// Wraps an existing board. The game-over flag is derived from it.
    pub fn from_board(board: Board, score: u32) -> Self {
        Self {
            board,
            score,
            game_over: board.is_stuck(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Clears everything and seeds the board with two tiles.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.board = Board::EMPTY;
        self.score = 0;
        self.game_over = false;
        self.spawn_tile(rng);
        self.spawn_tile(rng);
        debug!("New game: {:?}", self.board);
    }

    /// Places a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    ///
    /// Returns the position filled, or `None` on a full board, which is left
    /// untouched.
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, usize)> {
        let empty = self.board.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let (row, col) = empty[rng.random_range(0..empty.len())];
        let value = if rng.random_bool(FOUR_PROBABILITY) {
            4
        } else {
            2
        };
        self.board.set(row, col, value);
        Some((row, col))
    }

    /// Slides and merges every line toward `direction`.
    ///
    /// Returns true iff any tile changed position or value. Does not spawn
    /// and does not touch the game-over flag.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let mut rotated = self.board.rotated_times(direction.rotations());
        let (moved, gained) = rotated.shift_left();
        if moved {
            self.board = rotated.rotated_times(direction.restoring_rotations());
            self.score += gained;
        }
        moved
    }

    /// Read-only check: full board with no equal orthogonal neighbours.
    pub fn is_game_over(&self) -> bool {
        self.board.is_stuck()
    }

    /// Runs one directional turn: move, then spawn and re-evaluate only if
    /// the move changed the board.
    pub fn turn<R: Rng + ?Sized>(&mut self, direction: Direction, rng: &mut R) -> MoveOutcome {
        if !self.apply_move(direction) {
            return MoveOutcome {
                moved: false,
                game_over: false,
            };
        }
        self.spawn_tile(rng);
        self.game_over = self.is_game_over();
        MoveOutcome {
            moved: true,
            game_over: self.game_over,
        }
    }
}
