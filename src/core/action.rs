//! # Actions
//!
//! Everything that can happen in a game becomes an `Action`.
//! User presses ←? That's `Action::Move(Direction::Left)`.
//! User presses `r` on the game-over screen? That's `Action::Restart`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing what the adapter should do
//! next. No side effects here. Sound and rendering happen elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::direction::Direction;
use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    /// Only honoured once the game is over.
    Restart,
    Quit,
}

/// Follow-up work for the adapter after an action is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Input ignored or move blocked; state is unchanged.
    None,
    /// The board changed and a tile spawned.
    Moved { game_over: bool },
    Restarted,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Move(direction) => {
            if app.game.game_over() {
                return Effect::None;
            }
            let outcome = app.game.turn(direction, &mut app.rng);
            if !outcome.moved {
                debug!("Move {} blocked", direction.label());
                return Effect::None;
            }
            debug!(
                "Move {} -> score {}, max tile {}",
                direction.label(),
                app.game.score(),
                app.game.board().max_tile()
            );
            if outcome.game_over {
                info!(
                    "Game over: score {}, max tile {}",
                    app.game.score(),
                    app.game.board().max_tile()
                );
            }
            Effect::Moved {
                game_over: outcome.game_over,
            }
        }
        Action::Restart => {
            if !app.game.game_over() {
                return Effect::None;
            }
            app.game.initialize(&mut app.rng);
            info!("Game restarted");
            Effect::Restarted
        }
        Action::Quit => Effect::Quit,
    }
}
