//! The player circle and the trait the movement update drives it through.

use super::geometry::Position;

/// Trait for entities the movement update can move.
///
/// Any type that implements this trait:
/// - Has a position in canvas space
/// - May have a radius used when clamping to bounds
pub trait Movable {
    /// Returns the entity's position.
    fn pos(&self) -> &Position;

    /// Returns a mutable reference to the entity's position.
    fn pos_mut(&mut self) -> &mut Position;

    /// Returns the entity's radius, if it has one.
    ///
    /// Non-finite values are treated as 0 by the movement update.
    fn radius(&self) -> Option<f64>;
}

/// The circle controlled by the arrow keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Centre of the circle.
    pub pos: Position,
    /// Circle radius.
    pub radius: Option<f64>,
    /// Fill colour as `0xRRGGBB`.
    pub color: u32,
}

impl Player {
    /// Creates a new player.
    pub fn new(pos: Position, radius: Option<f64>, color: u32) -> Self {
        Self { pos, radius, color }
    }
}

impl Movable for Player {
    fn pos(&self) -> &Position {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Position {
        &mut self.pos
    }

    fn radius(&self) -> Option<f64> {
        self.radius
    }
}

/// A bare position moves without a radius.
impl Movable for Position {
    fn pos(&self) -> &Position {
        self
    }

    fn pos_mut(&mut self) -> &mut Position {
        self
    }

    fn radius(&self) -> Option<f64> {
        None
    }
}
