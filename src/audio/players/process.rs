//! Sound cues through the operating system's command-line player.
//!
//! - macOS: `afplay <file>`
//! - Linux: `aplay -q <file>` (ALSA)
//! - Windows: PowerShell `Media.SoundPlayer`
//!
//! The embedded WAV assets are written to temporary files once, when the
//! player is built, and removed when it is dropped. Each cue spawns the
//! player process on the tokio runtime and returns immediately; the game
//! loop never waits on it.

use std::io::Write;
use std::path::Path;
use std::process::Stdio;

use log::{debug, info, warn};
use tempfile::TempPath;
use tokio::process::Command;

use crate::audio::assets;
use crate::audio::{AudioError, Cue, CuePlayer};

pub struct ProcessPlayer {
    os: &'static str,
    move_path: TempPath,
    ending_path: TempPath,
}

impl ProcessPlayer {
    /// Prepares a player for the OS this binary was built for.
    pub fn new() -> Result<Self, AudioError> {
        Self::for_os(std::env::consts::OS)
    }

    pub fn for_os(os: &'static str) -> Result<Self, AudioError> {
        if player_program(os).is_none() {
            return Err(AudioError::UnsupportedOs(os));
        }
        let move_path = extract(Cue::Move)?;
        let ending_path = extract(Cue::Ending)?;
        info!(
            "Extracted sound cues to {} and {}",
            move_path.display(),
            ending_path.display()
        );
        Ok(Self {
            os,
            move_path,
            ending_path,
        })
    }

    pub fn path_for(&self, cue: Cue) -> &Path {
        match cue {
            Cue::Move => &self.move_path,
            Cue::Ending => &self.ending_path,
        }
    }
}

impl CuePlayer for ProcessPlayer {
    fn name(&self) -> &str {
        player_program(self.os).unwrap_or("process")
    }

    fn play(&self, cue: Cue) {
        let Some(mut command) = player_command(self.os, self.path_for(cue)) else {
            return;
        };
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!("No async runtime available, dropping {} cue", cue.label());
                return;
            }
        };

        debug!("Playing {} cue", cue.label());
        handle.spawn(async move {
            match command.status().await {
                Ok(status) if status.success() => {}
                Ok(status) => warn!("Sound player exited with {} ({} cue)", status, cue.label()),
                Err(e) => warn!("Error playing {} cue: {}", cue.label(), e),
            }
        });
    }
}

/// Writes one embedded cue to a temp file that lives as long as the `TempPath`.
fn extract(cue: Cue) -> Result<TempPath, AudioError> {
    let mut file = tempfile::Builder::new()
        .prefix("term2048-")
        .suffix(".wav")
        .tempfile()?;
    file.write_all(assets::bytes_for(cue))?;
    file.flush()?;
    Ok(file.into_temp_path())
}

/// The player program for an OS name as reported by `std::env::consts::OS`.
pub fn player_program(os: &str) -> Option<&'static str> {
    match os {
        "macos" => Some("afplay"),
        "linux" => Some("aplay"),
        "windows" => Some("powershell"),
        _ => None,
    }
}

/// Builds the command that plays `file` on `os`, with all stdio detached so
/// nothing leaks onto the game screen.
pub fn player_command(os: &str, file: &Path) -> Option<Command> {
    let mut command = Command::new(player_program(os)?);
    match os {
        "linux" => {
            command.arg("-q").arg(file);
        }
        "windows" => {
            // Single quotes are escaped by doubling inside a PowerShell literal
            let quoted = file.display().to_string().replace('\'', "''");
            command
                .arg("-c")
                .arg(format!("(New-Object Media.SoundPlayer '{quoted}').PlaySync()"));
        }
        _ => {
            command.arg(file);
        }
    }
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn args(command: &Command) -> Vec<String> {
        command
            .as_std()
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_player_program_per_os() {
        assert_eq!(player_program("macos"), Some("afplay"));
        assert_eq!(player_program("linux"), Some("aplay"));
        assert_eq!(player_program("windows"), Some("powershell"));
        assert_eq!(player_program("freebsd"), None);
    }

    #[test]
    fn test_player_command_linux() {
        let command = player_command("linux", Path::new("/tmp/cue.wav")).unwrap();
        assert_eq!(command.as_std().get_program(), OsStr::new("aplay"));
        assert_eq!(args(&command), vec!["-q", "/tmp/cue.wav"]);
    }

    #[test]
    fn test_player_command_macos() {
        let command = player_command("macos", Path::new("/tmp/cue.wav")).unwrap();
        assert_eq!(command.as_std().get_program(), OsStr::new("afplay"));
        assert_eq!(args(&command), vec!["/tmp/cue.wav"]);
    }

    #[test]
    fn test_player_command_windows_escapes_quotes() {
        let command = player_command("windows", Path::new("C:/Users/o'neil/cue.wav")).unwrap();
        assert_eq!(command.as_std().get_program(), OsStr::new("powershell"));
        assert_eq!(
            args(&command),
            vec![
                "-c",
                "(New-Object Media.SoundPlayer 'C:/Users/o''neil/cue.wav').PlaySync()"
            ]
        );
    }

    #[test]
    fn test_player_command_unsupported_os() {
        assert!(player_command("haiku", Path::new("cue.wav")).is_none());
    }

    #[test]
    fn test_unsupported_os_is_an_error() {
        assert!(matches!(
            ProcessPlayer::for_os("haiku"),
            Err(AudioError::UnsupportedOs("haiku"))
        ));
    }

    #[test]
    fn test_assets_extracted_and_cleaned_up() {
        let player = ProcessPlayer::for_os("linux").unwrap();
        let move_path = player.path_for(Cue::Move).to_path_buf();
        let ending_path = player.path_for(Cue::Ending).to_path_buf();

        assert_ne!(move_path, ending_path);
        assert_eq!(std::fs::read(&move_path).unwrap(), assets::MOVE_WAV);
        assert_eq!(std::fs::read(&ending_path).unwrap(), assets::ENDING_WAV);
        assert_eq!(player.name(), "aplay");

        drop(player);
        assert!(!move_path.exists());
        assert!(!ending_path.exists());
    }

    #[test]
    fn test_play_without_runtime_does_not_panic() {
        let player = ProcessPlayer::for_os("linux").unwrap();
        player.play(Cue::Move);
    }
}
