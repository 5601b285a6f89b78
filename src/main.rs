use clap::Parser;
use log::{error, info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use term2048::core::config::{self, CliOverrides, Term2048Config};
use term2048::tui;

#[derive(Parser)]
#[command(name = "term2048", about = "The 2048 sliding-tile puzzle in your terminal")]
struct Args {
    /// Fixed RNG seed; the same seed replays the same tile spawns
    #[arg(short, long)]
    seed: Option<u64>,

    /// Disable sound cues
    #[arg(short, long)]
    mute: bool,
}

/// `~/.term2048/term2048.log`, or `term2048.log` in the working directory.
fn log_path() -> PathBuf {
    config::config_dir()
        .filter(|dir| fs::create_dir_all(dir).is_ok())
        .map(|dir| dir.join("term2048.log"))
        .unwrap_or_else(|| PathBuf::from("term2048.log"))
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // File logger: the terminal itself belongs to the game
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(log_path()) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    info!("term2048 {} starting up", env!("CARGO_PKG_VERSION"));

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{}, using defaults", e);
        Term2048Config::default()
    });
    let resolved = config::resolve(
        &file_config,
        CliOverrides {
            seed: args.seed,
            mute: args.mute,
        },
    );
    info!("Resolved config: {:?}", resolved);

    match tui::run(resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal terminal error: {}", e);
            eprintln!("term2048: terminal error: {e}");
            ExitCode::FAILURE
        }
    }
}
