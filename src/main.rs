//! Fire Emitter demo entry point
//!
//! Headless stand-in for a windowed host: drives an emitter along a
//! synthetic pointer path with a 60 Hz clock and batches every frame.
//!
//! Usage: `fire-emitter [config.json | preset] [frames]`

use std::path::Path;

use glam::Vec2;

use fire_emitter::{FireConfig, FirePreset, QuadBatch};

/// Milliseconds per frame (~60 Hz)
const FRAME_MS: u64 = 16;
/// Frames to run when none are given
const DEFAULT_FRAMES: u64 = 600;
/// Seed for the emission roller
const SEED: u64 = 0x5EED_F1AE;

fn main() {
    env_logger::init();
    log::info!("Fire Emitter (native) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(arg) => match FirePreset::from_str(&arg) {
            Some(preset) => {
                log::info!("Using preset {}", preset.as_str());
                FireConfig::from_preset(preset)
            }
            None => FireConfig::load(Path::new(&arg)),
        },
        None => FireConfig::default(),
    };
    let frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    if let Err(e) = run(&config, frames) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

/// Pointer path: a slow circle around the configured base
fn pointer_at(center: Vec2, frame: u64) -> Vec2 {
    let t = frame as f32 * 0.02;
    center + Vec2::new(t.cos(), t.sin()) * 120.0
}

fn run(config: &FireConfig, frames: u64) -> fire_emitter::error::Result<()> {
    let mut fire = config.build()?;
    let mut roller = config.roller(SEED);
    let mut batch = QuadBatch::with_rect_limit(config.capacity);
    let center = config.base.pos();

    let mut peak = 0;
    let mut total_rects = 0;
    for frame in 0..frames {
        let tick = frame * FRAME_MS;
        fire.update(pointer_at(center, frame), tick, roller.roll());

        batch.clear();
        fire.draw(&mut batch)?;

        peak = peak.max(batch.rect_count());
        total_rects += batch.rect_count();
        if frame % 60 == 0 {
            log::info!(
                "frame {frame}: {} active, {} vertices ({} bytes)",
                fire.active_count(),
                batch.vertices().len(),
                batch.as_bytes().len()
            );
        }
    }

    println!(
        "Simulated {frames} frames: peak {peak} particles, {total_rects} rects drawn, capacity {}",
        fire.capacity()
    );
    fire_emitter::api::destroy_fire(Some(fire));
    Ok(())
}
