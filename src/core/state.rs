//! # Application State
//!
//! Core game state for term2048. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── game: Game        // board, score, game-over flag
//! ├── rng: SmallRng     // sole source of randomness (tile spawns)
//! └── seed: Option<u64> // fixed seed, if one was configured
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use log::info;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::core::config::ResolvedConfig;
use crate::core::game::Game;

pub struct App {
    pub game: Game,
    pub rng: SmallRng,
    pub seed: Option<u64>,
}

impl App {
    /// Creates an app with a fresh game. A fixed seed replays the same
    /// sequence of spawns; `None` seeds from the thread RNG.
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        let game = Game::new(&mut rng);
        Self { game, rng, seed }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        if let Some(seed) = config.seed {
            info!("Using fixed RNG seed {}", seed);
        }
        Self::new(config.seed)
    }
}
