//! Tile Brush - Headless Driver
//!
//! Drives a brush session against an in-memory scene from a script of key
//! chords, one per line, read from stdin. Blank lines and `#` comments are
//! skipped. The session finishes at end of input unless a cancel/finish
//! chord ends it earlier.
//!
//! Run with: `cargo run --bin tile_brush -- [--config brush.json] < script.txt`
//!
//! Example script:
//! ```text
//! Space        # place
//! D
//! Space
//! ctrl+WheelUp # grow to 4x4
//! Tab          # next face
//! ctrl+Z
//! Enter
//! ```
//!
//! Logging is controlled with `RUST_LOG` (default `info`).

use std::io::{self, BufRead};
use std::process::ExitCode;

use glam::Vec3;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tile_brush_engine::brush::{
    BrushConfig, MemoryScene, ProceduralTileAssets, SessionFlow, SessionStatus, TileBrushSession,
};
use tile_brush_engine::input::{KeyBindings, KeyPress};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match load_config() {
        Ok(config) => config,
        Err(message) => {
            error!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let assets = ProceduralTileAssets::new();
    let mut scene = MemoryScene::new();
    let mut session = match TileBrushSession::invoke(config, &assets, &mut scene, Vec3::ZERO) {
        Ok(session) => session,
        Err(err) => {
            error!("Cannot start tile brush: {err}");
            return ExitCode::FAILURE;
        }
    };
    session.set_status_sink(|status: &SessionStatus| info!("{status}"));

    let bindings = KeyBindings::new();
    let mut flow = SessionFlow::Continue;
    for (number, line) in io::stdin().lock().lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("Failed to read input: {err}");
                break;
            }
        };
        let chord = line.split('#').next().unwrap_or_default().trim();
        if chord.is_empty() {
            continue;
        }

        let press: KeyPress = match chord.parse() {
            Ok(press) => press,
            Err(err) => {
                warn!("line {}: {err}", number + 1);
                continue;
            }
        };
        let Some(intent) = bindings.resolve(press) else {
            warn!("line {}: {chord} is not bound", number + 1);
            continue;
        };

        match session.apply(intent) {
            Ok(SessionFlow::Continue) => {}
            Ok(exit) => {
                flow = exit;
                break;
            }
            Err(err) => warn!("{err}"),
        }
    }

    let summary = match flow {
        SessionFlow::Cancel => session.cancel(),
        SessionFlow::Continue | SessionFlow::Finish => session.finish(),
    };
    info!(
        "{:?}: {} tiles, {} scene objects",
        summary.state,
        summary.tiles,
        scene.len()
    );
    ExitCode::SUCCESS
}

/// Parse `--config <path>` from the command line.
fn load_config() -> Result<BrushConfig, String> {
    let mut args = std::env::args().skip(1);
    let mut config = BrushConfig::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                config = BrushConfig::load(&path).map_err(|e| format!("{path}: {e}"))?;
                info!("Loaded config from {path}");
            }
            other => return Err(format!("Unknown argument: {other}")),
        }
    }
    Ok(config)
}
