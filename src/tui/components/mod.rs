//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Every component here is stateless and props-based: it receives all data
//! as struct fields and renders it.
//!
//! - `TitleBar`: Game title (and seed, when fixed)
//! - `BoardGrid`: The colored, box-drawn 4×4 board
//! - `StatusBar`: Score and key hints
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props", not by directly accessing
//! global state. This makes dependencies explicit and components testable.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! StatusBar::new(app.game.score(), app.game.game_over()).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! status_bar.render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Title line)
//! ├── board_grid.rs    (Board + cell geometry + tile colors)
//! └── status_bar.rs    (Score and hints)
//! ```

pub mod board_grid;
mod status_bar;
mod title_bar;

pub use board_grid::{BoardGrid, CellGeometry};
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
