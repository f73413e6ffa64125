//! Main scene: owns the player and advances it once per frame.

use log::debug;

use super::geometry::{self, Bounds, Position};
use super::input::DirectionalInput;
use super::movement::{self, MovementConfig};
use super::params::Params;
use super::player::{Movable, Player};

/// The single scene of the demo.
#[derive(Debug, Clone)]
pub struct Scene {
    /// The arrow-key controlled circle.
    pub player: Player,
    /// Movement settings applied each frame.
    pub movement: MovementConfig,
    /// Area the player is clamped to, if any.
    pub bounds: Option<Bounds>,
    /// Canvas extent, used to place the player on spawn.
    canvas: Bounds,
    /// Simulated time in seconds, after per-frame capping.
    pub time: f64,
    /// Number of frames that advanced the scene.
    pub frames: u64,
    skipping: bool,
}

impl Scene {
    /// Creates the scene with the player at the canvas centre.
    pub fn new(params: &Params) -> Self {
        let canvas = params.canvas();
        Self {
            player: Player::new(
                canvas.center(),
                Some(params.player_radius),
                params.player_color,
            ),
            movement: params.movement_config(),
            bounds: params.bounds(),
            canvas,
            time: 0.0,
            frames: 0,
            skipping: false,
        }
    }

    /// Advances the scene by one frame.
    ///
    /// # Arguments
    ///
    /// * `input` - Arrow key snapshot, `None` while input is unavailable
    /// * `delta_ms` - Time since the previous frame in milliseconds
    pub fn update(&mut self, input: Option<&DirectionalInput>, delta_ms: f64) {
        let Some(dt) = input.and(self.movement.frame_seconds(delta_ms)) else {
            if !self.skipping {
                debug!("skipping frame: delta={delta_ms}ms, input={}", input.is_some());
                self.skipping = true;
            }
            return;
        };
        self.skipping = false;

        movement::move_player(
            Some(&mut self.player),
            input,
            delta_ms,
            &self.movement,
            self.bounds.as_ref(),
        );

        self.time += dt;
        self.frames += 1;
    }

    /// Returns the player position.
    pub fn player_pos(&self) -> Position {
        *self.player.pos()
    }

    /// Re-centres the player and clears the frame counters.
    pub fn reset(&mut self, params: &Params) {
        *self = Self::new(params);
    }

    /// Applies new parameters without re-spawning the player.
    ///
    /// The player is clamped into the new bounds right away so it never
    /// starts a frame outside a smaller canvas.
    pub fn apply_params(&mut self, params: &Params) {
        self.movement = params.movement_config();
        self.bounds = params.bounds();
        self.canvas = params.canvas();
        self.player.radius = Some(params.player_radius);
        self.player.color = params.player_color;

        if let Some(bounds) = &self.bounds {
            let radius = geometry::effective_radius(self.player.radius());
            geometry::clamp_to_bounds(self.player.pos_mut(), bounds, radius);
        }
    }

    /// Returns the canvas extent.
    pub fn canvas(&self) -> Bounds {
        self.canvas
    }
}
