//! Per-frame movement update for arrow-key controlled entities.
//!
//! The update is tolerant of missing state: an absent entity, absent input,
//! or a non-positive or non-finite frame delta leaves the entity untouched
//! instead of failing. Scenes call it during startup and teardown when
//! some of that state may not exist yet. A non-finite speed or frame cap is
//! treated the same way.

use super::geometry::{self, Bounds};
use super::input::DirectionalInput;
use super::player::Movable;

/// Default movement speed in canvas units per second.
pub const DEFAULT_SPEED: f64 = 200.0;
/// Default cap on a single frame's elapsed time in milliseconds.
pub const DEFAULT_MAX_DELTA_MS: f64 = 50.0;

/// Speed and frame-time cap used by [`move_player`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementConfig {
    /// Movement speed in canvas units per second.
    pub speed: f64,
    /// Longest frame delta, in milliseconds, applied in one update.
    pub max_delta_ms: f64,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            max_delta_ms: DEFAULT_MAX_DELTA_MS,
        }
    }
}

impl MovementConfig {
    /// Converts a frame delta into the capped number of seconds to simulate.
    ///
    /// # Returns
    ///
    /// `None` when the frame should not move anything: the delta is not a
    /// finite positive number, or the cap leaves no positive finite time.
    pub fn frame_seconds(&self, delta_ms: f64) -> Option<f64> {
        if !delta_ms.is_finite() || delta_ms <= 0.0 {
            return None;
        }
        let capped = delta_ms.min(self.max_delta_ms);
        (capped.is_finite() && capped > 0.0).then(|| capped / 1000.0)
    }
}

/// Moves an entity according to the held arrow keys.
///
/// The displacement is `speed * min(delta_ms, max_delta_ms) / 1000` along the
/// normalized input direction, so diagonal movement is as fast as axis
/// movement. With `bounds`, the entity centre is then clamped so the whole
/// circle stays inside the area.
///
/// # Arguments
///
/// * `entity` - Entity to move; `None` makes this a no-op
/// * `input` - Arrow key snapshot for this frame; `None` makes this a no-op
/// * `delta_ms` - Time since the previous frame in milliseconds
/// * `config` - Speed and frame-time cap
/// * `bounds` - Playable area to clamp to, if any
pub fn move_player<M: Movable + ?Sized>(
    entity: Option<&mut M>,
    input: Option<&DirectionalInput>,
    delta_ms: f64,
    config: &MovementConfig,
    bounds: Option<&Bounds>,
) {
    let (Some(entity), Some(input)) = (entity, input) else {
        return;
    };
    if !config.speed.is_finite() {
        return;
    }
    let Some(dt) = config.frame_seconds(delta_ms) else {
        return;
    };

    let (horizontal, vertical) = input.axis();
    let Some((vx, vy)) = geometry::normalize(horizontal, vertical) else {
        return;
    };

    let pos = entity.pos_mut();
    pos.x += vx * config.speed * dt;
    pos.y += vy * config.speed * dt;

    let Some(bounds) = bounds else {
        return;
    };

    let radius = geometry::effective_radius(entity.radius());
    geometry::clamp_to_bounds(entity.pos_mut(), bounds, radius);
}
