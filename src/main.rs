//! Table Pong headless driver
//!
//! Plays a match between the computer and a pointer sweeping up and down,
//! logging events as they happen. An optional first argument names a
//! settings JSON file; `RUST_LOG=debug` shows every hit, miss and serve.

use std::f32::consts::TAU;

use table_pong::Settings;
use table_pong::consts::POINTER_RATIO;
use table_pong::sim::{Cue, EventSink, GameState, PointerSource, tick};

/// Give up on a match after ten minutes of simulated play
const MAX_SECONDS: u64 = 600;

/// Pointer oscillating across the calibrated band
struct SweepPointer {
    center: f32,
    amplitude: f32,
    phase: f32,
    phase_step: f32,
}

impl SweepPointer {
    fn new(settings: &Settings, period_secs: f32) -> Self {
        let low = POINTER_RATIO * settings.desktop_height;
        let high = (1.0 - POINTER_RATIO) * settings.desktop_height;
        Self {
            center: 0.5 * (low + high),
            amplitude: 0.5 * (high - low),
            phase: 0.0,
            phase_step: TAU / (period_secs * settings.refresh_rate.max(1) as f32),
        }
    }

    fn advance(&mut self) {
        self.phase = (self.phase + self.phase_step) % TAU;
    }
}

impl PointerSource for SweepPointer {
    fn pointer_y(&self) -> f32 {
        self.center + self.amplitude * self.phase.sin()
    }
}

/// Tallies cues in place of playing sounds
#[derive(Debug, Default)]
struct CueTally {
    walls: u32,
    paddles: u32,
    misses: u32,
}

impl EventSink for CueTally {
    fn cue(&mut self, cue: Cue) {
        match cue {
            Cue::WallHit => self.walls += 1,
            Cue::PaddleHit => self.paddles += 1,
            Cue::Miss => self.misses += 1,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    let mut state = GameState::new(&settings);
    let mut pointer = SweepPointer::new(&settings, 1.7);
    let mut tally = CueTally::default();
    let max_frames = MAX_SECONDS * settings.refresh_rate.max(1) as u64;

    while !state.is_over() && state.frame < max_frames {
        pointer.advance();
        tick(&mut state, &pointer, &mut tally);
    }

    if !state.is_over() {
        log::warn!("No winner after {max_frames} frames");
    }
    println!(
        "Final score {}-{} in {} frames ({} paddle hits, {} wall hits, {} misses)",
        state.score.left,
        state.score.right,
        state.frame,
        tally.paddles,
        tally.walls,
        tally.misses
    );
}
