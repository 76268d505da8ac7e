//! Table Pong - a two-paddle table game simulation
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (ball motion, paddle collision, AI, pauses, score)
//! - `settings`: Table geometry and display configuration

pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Microseconds per second, the unit pause durations are expressed in
    pub const MICROS_PER_SECOND: f32 = 1_000_000.0;
    /// Speed increment is this many units per second of display frames
    pub const SPEED_INCREMENT_NUMERATOR: f32 = 60.0;
    /// Serve speed as a multiple of the per-hit speed increment
    pub const SERVE_SPEED_FACTOR: f32 = 10.0;

    /// Standard deviation of the angle noise added on a wall bounce (radians)
    pub const WALL_NOISE_SD: f32 = 0.0125;
    /// Standard deviation of the angle noise added on a paddle return (radians)
    pub const PADDLE_NOISE_SD: f32 = 0.025;
    /// Angle deflection per sector away from the paddle center (radians)
    pub const SECTOR_DEFLECTION: f32 = 0.075;
    /// Returns never come closer than this to horizontal-through-the-paddle or vertical
    pub const RETURN_ANGLE_MARGIN: f32 = 0.01 * PI;

    /// Fraction of the paddle length (each way) in which the computer considers the ball caught
    pub const CATCH_WINDOW: f32 = 0.4;
    /// Computer paddle step per frame
    pub const COMPUTER_STEP: f32 = 9.0;
    /// Uniform jitter on the computer step, as a fraction of the step
    pub const COMPUTER_JITTER: f32 = 7.0 / 15.0;

    /// Paddle travel is inset from the table top/bottom by this fraction of the table height
    pub const PADDLE_TRAVEL_INSET: f32 = 0.075;
    /// Pointer calibration window: [ratio, 1 - ratio] of the desktop height
    pub const POINTER_RATIO: f32 = 0.4125;

    /// Ball pause after a miss (µs)
    pub const MISS_PAUSE_US: f32 = 500_000.0;
    /// Opposing paddle pause after a hit (µs)
    pub const HIT_PAUSE_US: f32 = 333_333.3;
    /// Computer paddle pause after a miss while the ball moved left (µs)
    pub const SERVE_PAUSE_US: f32 = MISS_PAUSE_US + HIT_PAUSE_US / 2.0;

    /// A player wins once their score exceeds this
    pub const WINNING_MARGIN: u32 = 10;
}

/// Tolerance for treating two coordinates as equal
pub const COORD_EPSILON: f32 = 4.0 * f32::EPSILON;

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_radians(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(std::f32::consts::TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= std::f32::consts::TAU {
        0.0
    } else {
        wrapped
    }
}

/// Unit motion vector for an angle, 0 pointing along +y and increasing toward +x
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.sin(), angle.cos())
}

/// Whether two coordinates are equal within [`COORD_EPSILON`]
#[inline]
pub fn coord_eq(a: f32, b: f32) -> bool {
    (b - a).abs() < COORD_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{PI, TAU};

    #[test]
    fn test_wrap_radians() {
        assert_eq!(wrap_radians(0.0), 0.0);
        assert!((wrap_radians(-0.5 * PI) - 1.5 * PI).abs() < 1e-5);
        assert!((wrap_radians(2.5 * PI) - 0.5 * PI).abs() < 1e-5);
        let tiny = wrap_radians(-1e-9);
        assert!((0.0..TAU).contains(&tiny));
    }

    #[test]
    fn test_heading() {
        let down = heading(0.0);
        assert!(down.x.abs() < 1e-6 && (down.y - 1.0).abs() < 1e-6);
        let right = heading(0.5 * PI);
        assert!((right.x - 1.0).abs() < 1e-6 && right.y.abs() < 1e-6);
    }

    #[test]
    fn test_coord_eq() {
        assert!(coord_eq(1.0, 1.0));
        assert!(!coord_eq(0.0, 0.001));
    }
}
