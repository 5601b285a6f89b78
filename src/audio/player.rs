use std::fmt;

/// A sound notification tied to a game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A move changed the board.
    Move,
    /// A move ended the game.
    Ending,
}

impl Cue {
    pub fn label(self) -> &'static str {
        match self {
            Cue::Move => "move",
            Cue::Ending => "ending",
        }
    }
}

/// Errors that can occur while preparing a player.
/// Playback itself never reports errors back to the game.
#[derive(Debug)]
pub enum AudioError {
    /// Writing a cue asset to a temporary file failed.
    Io(std::io::Error),
    /// No known player program for this OS.
    UnsupportedOs(&'static str),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::Io(e) => write!(f, "audio asset I/O error: {e}"),
            AudioError::UnsupportedOs(os) => {
                write!(f, "unsupported operating system for audio playback: {os}")
            }
        }
    }
}

impl std::error::Error for AudioError {}

impl From<std::io::Error> for AudioError {
    fn from(e: std::io::Error) -> Self {
        AudioError::Io(e)
    }
}

pub trait CuePlayer: Send + Sync {
    /// Returns the name of the player.
    fn name(&self) -> &str;

    /// Starts playing a cue and returns immediately.
    ///
    /// Fire-and-forget: must not block, and failures are logged, never
    /// returned.
    fn play(&self, cue: Cue);
}
