//! Game parameters and the JSON config file they are read from.

use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use super::geometry::Bounds;
use super::movement::{DEFAULT_MAX_DELTA_MS, DEFAULT_SPEED, MovementConfig};

/// Config file read when `ROAMER_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "roamer.json";
/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "ROAMER_CONFIG";

/// Game parameters that control the window, the player and movement.
///
/// Every field has a default, so a config file only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Window title.
    pub title: String,
    /// Canvas width in pixels.
    pub canvas_width: f64,
    /// Canvas height in pixels.
    pub canvas_height: f64,
    /// Background colour as `0xRRGGBB`.
    pub background_color: u32,
    /// Player circle radius.
    pub player_radius: f64,
    /// Player fill colour as `0xRRGGBB`.
    pub player_color: u32,
    /// Movement speed in canvas units per second.
    pub speed: f64,
    /// Longest frame delta, in milliseconds, applied in one update.
    pub max_delta_ms: f64,
    /// Keep the player inside the canvas.
    pub clamp_to_canvas: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            title: "Roamer".to_string(),
            canvas_width: 800.0,
            canvas_height: 600.0,
            background_color: 0x11_11_11,
            player_radius: 20.0,
            player_color: 0x4f_c3_f7,
            speed: DEFAULT_SPEED,
            max_delta_ms: DEFAULT_MAX_DELTA_MS,
            clamp_to_canvas: true,
        }
    }
}

impl Params {
    /// Loads and validates parameters from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads parameters from `path`, falling back to defaults.
    ///
    /// A missing file is expected and only noted; any other failure is
    /// reported as a warning.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(params) => {
                info!("loaded config from {}", path.display());
                params
            }
            Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("no config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("ignoring config at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Returns the config path from the environment, or [`DEFAULT_CONFIG_PATH`].
    pub fn config_path() -> String {
        std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }

    /// Checks that every numeric parameter is in range.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("max_delta_ms", self.max_delta_ms),
        ];
        let non_negative = [("player_radius", self.player_radius), ("speed", self.speed)];

        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidParam { name, value });
            }
        }
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidParam { name, value });
            }
        }
        Ok(())
    }

    /// Returns the movement settings.
    pub fn movement_config(&self) -> MovementConfig {
        MovementConfig {
            speed: self.speed,
            max_delta_ms: self.max_delta_ms,
        }
    }

    /// Returns the full canvas extent.
    pub fn canvas(&self) -> Bounds {
        Bounds::new(self.canvas_width, self.canvas_height)
    }

    /// Overrides the canvas size, returning `true` when it differed.
    ///
    /// The window cannot be resized after startup, so a reloaded config
    /// keeps the canvas of the running window.
    pub fn keep_canvas(&mut self, canvas: Bounds) -> bool {
        let changed = self.canvas() != canvas;
        self.canvas_width = canvas.width;
        self.canvas_height = canvas.height;
        changed
    }

    /// Returns the bounds movement is clamped to, `None` when clamping is off.
    pub fn bounds(&self) -> Option<Bounds> {
        self.clamp_to_canvas.then(|| self.canvas())
    }

    /// Splits the background colour into `(r, g, b)`.
    pub fn background_rgb(&self) -> (u8, u8, u8) {
        split_rgb(self.background_color)
    }
}

/// Splits a `0xRRGGBB` colour into its channels.
pub fn split_rgb(color: u32) -> (u8, u8, u8) {
    let [_, r, g, b] = color.to_be_bytes();
    (r, g, b)
}
