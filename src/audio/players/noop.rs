use log::debug;

use crate::audio::{Cue, CuePlayer};

/// Player used when sound is muted or unavailable.
pub struct NoopPlayer;

impl CuePlayer for NoopPlayer {
    fn name(&self) -> &str {
        "noop"
    }

    fn play(&self, cue: Cue) {
        debug!("Skipping {} cue (audio off)", cue.label());
    }
}
