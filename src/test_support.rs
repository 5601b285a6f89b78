//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use crate::audio::{Cue, CuePlayer};

/// A player that records cues instead of playing them.
#[derive(Default)]
pub struct RecordingPlayer {
    played: Mutex<Vec<Cue>>,
}

impl RecordingPlayer {
    pub fn played(&self) -> Vec<Cue> {
        self.played.lock().unwrap().clone()
    }
}

impl CuePlayer for RecordingPlayer {
    fn name(&self) -> &str {
        "recording"
    }

    fn play(&self, cue: Cue) {
        self.played.lock().unwrap().push(cue);
    }
}
