//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.term2048/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Term2048Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AudioConfig {
    pub enabled: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub board_scale: Option<f32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_AUDIO_ENABLED: bool = true;
pub const DEFAULT_BOARD_SCALE: f32 = 0.8;
pub const MIN_BOARD_SCALE: f32 = 0.2;
pub const MAX_BOARD_SCALE: f32 = 1.0;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub seed: Option<u64>,
    pub audio_enabled: bool,
    /// Fraction of the terminal the board may occupy, in each dimension.
    pub board_scale: f32,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            seed: None,
            audio_enabled: DEFAULT_AUDIO_ENABLED,
            board_scale: DEFAULT_BOARD_SCALE,
        }
    }
}

/// Overrides from CLI flags (None / false = not specified).
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub seed: Option<u64>,
    pub mute: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.term2048/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".term2048"))
}

/// Returns the path to `~/.term2048/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.term2048/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `Term2048Config::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<Term2048Config, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(Term2048Config::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<Term2048Config, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(Term2048Config::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: Term2048Config = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# term2048 Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# seed = 42              # Fixed RNG seed; same seed, same tiles. Or TERM2048_SEED / --seed

# [audio]
# enabled = true         # Sound cues on moves and game over. Or TERM2048_MUTE / --mute

# [display]
# board_scale = 0.8      # Fraction of the terminal the board may fill (0.2 - 1.0)
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &Term2048Config, cli: CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &Term2048Config,
    cli: CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Seed: CLI → env → config → none
    let seed = cli
        .seed
        .or_else(|| {
            env("TERM2048_SEED").and_then(|s| match s.trim().parse() {
                Ok(seed) => Some(seed),
                Err(e) => {
                    warn!("Ignoring TERM2048_SEED={:?}: {}", s, e);
                    None
                }
            })
        })
        .or(config.general.seed);

    // Audio: any mute source wins over the config file
    let muted = cli.mute || env("TERM2048_MUTE").is_some_and(|v| is_truthy(&v));
    let audio_enabled = !muted && config.audio.enabled.unwrap_or(DEFAULT_AUDIO_ENABLED);

    ResolvedConfig {
        seed,
        audio_enabled,
        board_scale: clamp_board_scale(config.display.board_scale),
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}

fn clamp_board_scale(scale: Option<f32>) -> f32 {
    match scale {
        Some(s) if s.is_finite() => {
            let clamped = s.clamp(MIN_BOARD_SCALE, MAX_BOARD_SCALE);
            if clamped != s {
                warn!("board_scale {} out of range, using {}", s, clamped);
            }
            clamped
        }
        Some(s) => {
            warn!("board_scale {} is not a number, using default", s);
            DEFAULT_BOARD_SCALE
        }
        None => DEFAULT_BOARD_SCALE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = Term2048Config::default();
        assert!(config.general.seed.is_none());
        assert!(config.audio.enabled.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&Term2048Config::default(), CliOverrides::default(), no_env);
        assert_eq!(resolved, ResolvedConfig::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = Term2048Config {
            general: GeneralConfig { seed: Some(9) },
            audio: AudioConfig {
                enabled: Some(false),
            },
            display: DisplayConfig {
                board_scale: Some(0.5),
            },
        };
        let resolved = resolve_with_env(&config, CliOverrides::default(), no_env);
        assert_eq!(resolved.seed, Some(9));
        assert!(!resolved.audio_enabled);
        assert_eq!(resolved.board_scale, 0.5);
    }

    #[test]
    fn test_resolve_precedence_cli_env_config() {
        let config = Term2048Config {
            general: GeneralConfig { seed: Some(1) },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "TERM2048_SEED" => Some("2".to_string()),
            _ => None,
        };

        let from_env = resolve_with_env(&config, CliOverrides::default(), env);
        assert_eq!(from_env.seed, Some(2));

        let cli = CliOverrides {
            seed: Some(3),
            mute: false,
        };
        let from_cli = resolve_with_env(&config, cli, env);
        assert_eq!(from_cli.seed, Some(3));
    }

    #[test]
    fn test_bad_env_seed_falls_through_to_config() {
        let config = Term2048Config {
            general: GeneralConfig { seed: Some(5) },
            ..Default::default()
        };
        let env = |key: &str| (key == "TERM2048_SEED").then(|| "not-a-number".to_string());
        let resolved = resolve_with_env(&config, CliOverrides::default(), env);
        assert_eq!(resolved.seed, Some(5));
    }

    #[test]
    fn test_mute_sources() {
        let config = Term2048Config {
            audio: AudioConfig {
                enabled: Some(true),
            },
            ..Default::default()
        };

        let cli = CliOverrides {
            seed: None,
            mute: true,
        };
        assert!(!resolve_with_env(&config, cli, no_env).audio_enabled);

        let env_mute = |key: &str| (key == "TERM2048_MUTE").then(|| "1".to_string());
        assert!(!resolve_with_env(&config, CliOverrides::default(), env_mute).audio_enabled);

        let env_unmute = |key: &str| (key == "TERM2048_MUTE").then(|| "false".to_string());
        assert!(resolve_with_env(&config, CliOverrides::default(), env_unmute).audio_enabled);
    }

    #[test]
    fn test_board_scale_is_clamped() {
        assert_eq!(clamp_board_scale(Some(3.0)), MAX_BOARD_SCALE);
        assert_eq!(clamp_board_scale(Some(0.01)), MIN_BOARD_SCALE);
        assert_eq!(clamp_board_scale(Some(f32::NAN)), DEFAULT_BOARD_SCALE);
        assert_eq!(clamp_board_scale(None), DEFAULT_BOARD_SCALE);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
seed = 1234

[audio]
enabled = false

[display]
board_scale = 0.6
"#;
        let config: Term2048Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.seed, Some(1234));
        assert_eq!(config.audio.enabled, Some(false));
        assert_eq!(config.display.board_scale, Some(0.6));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[audio]
enabled = false
"#;
        let config: Term2048Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.audio.enabled, Some(false));
        assert!(config.general.seed.is_none());
        assert!(config.display.board_scale.is_none());
    }

    #[test]
    fn test_generated_default_is_valid_toml() {
        let config: Term2048Config = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.general.seed.is_none());
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.general.seed.is_none());
        assert!(path.exists());

        // The generated file loads cleanly on the next run
        assert!(load_config_from(&path).is_ok());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[audio]\nenabled = \"loud\"\n").unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }
}
