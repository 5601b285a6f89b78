//! # Core Game Logic
//!
//! This module contains term2048's game logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Board / Game (rules) │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   Audio    │
//!             │  Adapter   │          │   cues     │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`board`]: The 4×4 grid, rotation, and the row shift-and-merge pass
//! - [`direction`]: Move directions and their rotation counts
//! - [`game`]: The engine — moves, spawns, game-over
//! - [`state`]: The `App` struct — engine plus RNG
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Config file loading and resolution

pub mod action;
pub mod board;
pub mod config;
pub mod direction;
pub mod game;
pub mod state;
