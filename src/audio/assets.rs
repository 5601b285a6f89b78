//! Sound cue assets.
//!
//! Both cues are short mono 16-bit PCM WAV tones synthesized by `build.rs`
//! and embedded in the binary. WAV plays on every supported OS player
//! without a decoder.

use crate::audio::Cue;

pub const MOVE_WAV: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/move.wav"));
pub const ENDING_WAV: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/ending.wav"));

/// Returns the embedded WAV bytes for a cue.
pub fn bytes_for(cue: Cue) -> &'static [u8] {
    match cue {
        Cue::Move => MOVE_WAV,
        Cue::Ending => ENDING_WAV,
    }
}
