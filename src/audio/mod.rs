pub mod assets;
pub mod player;
pub mod players;

pub use player::{AudioError, Cue, CuePlayer};
pub use players::{NoopPlayer, ProcessPlayer, build_player};
