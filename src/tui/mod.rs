//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the board,
//! translates keyboard events into core::Action values, and turns the
//! resulting effects into sound cues.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps in `poll` until input arrives and
//! only redraws after an event. Each event is applied to completion and
//! drawn before the next one is read.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::audio::{Cue, CuePlayer, build_player};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_timeout};

/// Geometry used when the terminal can't report its size.
pub const FALLBACK_VIEWPORT: (u16, u16) = (80, 24);

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core game logic)
pub struct TuiState {
    /// Last known terminal size (columns, rows).
    pub viewport: (u16, u16),
    pub board_scale: f32,
}

impl TuiState {
    pub fn new(viewport: (u16, u16), board_scale: f32) -> Self {
        Self {
            viewport,
            board_scale,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Current terminal size, or [`FALLBACK_VIEWPORT`] if it can't be read.
pub fn terminal_size() -> (u16, u16) {
    match crossterm::terminal::size() {
        Ok((0, _)) | Ok((_, 0)) => {
            warn!("Terminal reported zero size, using {:?}", FALLBACK_VIEWPORT);
            FALLBACK_VIEWPORT
        }
        Ok(size) => size,
        Err(e) => {
            warn!(
                "Could not determine terminal size ({}), using {:?}",
                e, FALLBACK_VIEWPORT
            );
            FALLBACK_VIEWPORT
        }
    }
}

/// The core action a TUI event stands for. Resize is TUI-local.
fn action_for(event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Restart => Some(Action::Restart),
        TuiEvent::Move(direction) => Some(Action::Move(direction)),
        TuiEvent::Resize(..) => None,
    }
}

/// Cues to play for an effect: a move cue for every successful move, plus
/// the ending cue when that move finished the game.
pub fn cues_for(effect: Effect) -> &'static [Cue] {
    match effect {
        Effect::Moved { game_over: false } => &[Cue::Move],
        Effect::Moved { game_over: true } => &[Cue::Move, Cue::Ending],
        Effect::None | Effect::Restarted | Effect::Quit => &[],
    }
}

fn play_cues(player: &dyn CuePlayer, effect: Effect) {
    for &cue in cues_for(effect) {
        player.play(cue);
    }
}

/// Applies one input event. Returns false when the game should exit.
fn handle_event(app: &mut App, tui: &mut TuiState, player: &dyn CuePlayer, event: TuiEvent) -> bool {
    if let TuiEvent::Resize(width, height) = event {
        debug!("Resize to {}x{}", width, height);
        tui.viewport = (width, height);
        return true;
    }
    let Some(action) = action_for(event) else {
        return true;
    };
    let effect = update(app, action);
    play_cues(player, effect);
    effect != Effect::Quit
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let player = build_player(&config);
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(terminal_size(), config.board_scale);

    let mut terminal = ratatui::try_init()?;
    info!("Terminal initialized at {}x{}", tui.viewport.0, tui.viewport.1);

    let result = TerminalModeGuard::new()
        .and_then(|_guard| run_loop(&mut terminal, &mut app, &mut tui, player.as_ref()));

    ratatui::restore();
    info!("Exiting with final score {}", app.game.score());
    result
}

fn run_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    player: &dyn CuePlayer,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;
        if !handle_event(app, tui, player, event) {
            return Ok(());
        }
    }
}
