pub mod noop;
pub mod process;

use std::sync::Arc;

use log::{info, warn};

use crate::audio::CuePlayer;
use crate::core::config::ResolvedConfig;

pub use noop::NoopPlayer;
pub use process::ProcessPlayer;

/// Build a cue player from the resolved config.
///
/// Falls back to [`NoopPlayer`] when sound is disabled or the platform
/// player can't be prepared; the game never fails over missing audio.
pub fn build_player(config: &ResolvedConfig) -> Arc<dyn CuePlayer> {
    if !config.audio_enabled {
        info!("Sound cues disabled");
        return Arc::new(NoopPlayer);
    }
    match ProcessPlayer::new() {
        Ok(player) => {
            info!("Sound cues enabled via {}", player.name());
            Arc::new(player)
        }
        Err(e) => {
            warn!("Sound cues unavailable: {}", e);
            Arc::new(NoopPlayer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_audio_builds_noop() {
        let config = ResolvedConfig {
            audio_enabled: false,
            ..Default::default()
        };
        assert_eq!(build_player(&config).name(), "noop");
    }
}
