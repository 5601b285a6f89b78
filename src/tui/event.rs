use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::direction::Direction;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    Restart,
    Move(Direction),

    // TUI-local events (handled directly in TUI)
    Resize(u16, u16),
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        Ok(translate(event::read()?))
    } else {
        Ok(None)
    }
}

/// Maps a raw crossterm event to a game input. Unbound keys map to `None`.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Resize(width, height) => Some(TuiEvent::Resize(width, height)),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Terminals with keyboard enhancement also report releases and repeats
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('r')) => Some(TuiEvent::Restart),
        (_, KeyCode::Up) => Some(TuiEvent::Move(Direction::Up)),
        (_, KeyCode::Down) => Some(TuiEvent::Move(Direction::Down)),
        (_, KeyCode::Left) => Some(TuiEvent::Move(Direction::Left)),
        (_, KeyCode::Right) => Some(TuiEvent::Move(Direction::Right)),
        _ => None,
    }
}
