//! # Roamer - Arrow-Key Circle Demo
//!
//! A single circle moved around a bounded canvas with the arrow keys.
//! The library holds the frame-independent game logic; the `roamer` binary
//! wires it to a macroquad window.
//!
//! ## Features
//!
//! - Delta-time movement with a per-frame cap on elapsed time
//! - Diagonal movement normalized to the same speed as axis movement
//! - Clamping to the canvas, accounting for the circle radius
//! - JSON configuration with defaults for every field
//!
//! ## Core Modules
//!
//! - [`game::movement`] - Per-frame movement update
//! - [`game::scene`] - Main scene driving the player each frame
//! - [`game::params`] - Game parameters and config file handling

/// Game logic and data structures.
pub mod game {
    /// Error type for configuration loading and validation.
    pub mod error;
    /// Positions, bounds and the vector helpers used by movement.
    pub mod geometry;
    /// Directional keyboard state snapshot.
    pub mod input;
    /// Per-frame movement update.
    pub mod movement;
    /// Game parameters.
    pub mod params;
    /// The player entity and the trait movement operates through.
    ///
    /// The [`player::Movable`] trait is implemented by anything with a
    /// position and an optional radius that the movement update can drive.
    pub mod player;
    /// Main scene holding the player.
    pub mod scene;
}
