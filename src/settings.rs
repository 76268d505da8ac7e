//! Table and display settings
//!
//! Loaded from a JSON file. Missing fields take their defaults; a file that
//! cannot be read, parsed or validated is replaced wholesale by the defaults,
//! which reproduce the classic 1200x900 table.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MICROS_PER_SECOND, SERVE_SPEED_FACTOR, SPEED_INCREMENT_NUMERATOR};
use crate::sim::TableBox;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    /// Display refresh rate (Hz); one simulation step per frame
    pub refresh_rate: u32,
    /// Window width in pixels
    pub window_width: f32,
    /// Window height in pixels
    pub window_height: f32,
    /// Desktop height in pixels (pointer calibration)
    pub desktop_height: f32,

    // === Table ===
    /// Width of the decorative rim around the table
    pub rim_size: f32,
    /// Drop-shadow offset applied to the table box
    pub shadow_offset: f32,

    // === Entities ===
    /// Ball edge length
    pub ball_size: f32,
    /// Paddle thickness
    pub paddle_width: f32,
    /// Paddle length
    pub paddle_length: f32,
    /// Distance from the table's side edge to the paddle center
    pub paddle_rim_offset: f32,
    /// Number of hit sectors along the paddle (must be odd)
    pub paddle_sectors: u32,

    /// Base seed for the per-entity generators; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            refresh_rate: 60,
            window_width: 1200.0,
            window_height: 900.0,
            desktop_height: 1080.0,

            rim_size: 100.0,
            shadow_offset: -5.0,

            ball_size: 15.0,
            paddle_width: 11.0,
            paddle_length: 67.0,
            paddle_rim_offset: 61.0,
            paddle_sectors: 15,

            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON (missing fields take their defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        settings
            .validate()
            .map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(settings)
    }

    /// Reject values the table geometry cannot be built from
    pub fn validate(&self) -> Result<(), String> {
        if self.refresh_rate == 0 {
            return Err("refresh_rate must be positive".into());
        }
        for (name, value) in [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("desktop_height", self.desktop_height),
            ("ball_size", self.ball_size),
            ("paddle_width", self.paddle_width),
            ("paddle_length", self.paddle_length),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{name} must be positive, got {value}"));
            }
        }
        for (name, value) in [
            ("rim_size", self.rim_size),
            ("paddle_rim_offset", self.paddle_rim_offset),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{name} must not be negative, got {value}"));
            }
        }
        if !self.shadow_offset.is_finite() {
            return Err(format!("shadow_offset must be finite, got {}", self.shadow_offset));
        }
        if self.paddle_sectors % 2 == 0 {
            return Err(format!(
                "paddle_sectors must be odd, got {}",
                self.paddle_sectors
            ));
        }
        let table_width = self.window_width - 2.0 * self.rim_size;
        let table_height = self.window_height - 2.0 * self.rim_size;
        if table_width <= 0.0 || table_height <= 0.0 {
            return Err(format!(
                "window {}x{} leaves no table inside a rim of {}",
                self.window_width, self.window_height, self.rim_size
            ));
        }
        if 2.0 * self.paddle_rim_offset >= table_width {
            return Err(format!(
                "paddle_rim_offset {} puts the paddles past each other on a table {table_width} wide",
                self.paddle_rim_offset
            ));
        }
        Ok(())
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults if it is unreadable or invalid
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Playable table area inside the rim
    pub fn table_box(&self) -> TableBox {
        TableBox::from_window(
            self.window_width,
            self.window_height,
            self.rim_size,
            self.shadow_offset,
        )
    }

    /// Time that passes per frame, in microseconds
    pub fn frame_quantum_us(&self) -> f32 {
        MICROS_PER_SECOND / self.refresh_rate.max(1) as f32
    }

    /// Speed gained per paddle hit; keeps speed growth frame-rate independent
    pub fn speed_increment(&self) -> f32 {
        SPEED_INCREMENT_NUMERATOR / self.refresh_rate.max(1) as f32
    }

    /// Speed of a fresh serve
    pub fn serve_speed(&self) -> f32 {
        SERVE_SPEED_FACTOR * self.speed_increment()
    }
}
