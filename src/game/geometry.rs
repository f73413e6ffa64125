//! Geometric helpers for movement: vector normalization and bounds clamping.

/// A point in canvas space, origin at the top-left corner, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Position {
    /// Creates a new position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Extent of the playable area, measured from the top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Width of the area.
    pub width: f64,
    /// Height of the area.
    pub height: f64,
}

impl Bounds {
    /// Creates new bounds.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the centre point of the area.
    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Scales a direction vector to unit length.
///
/// # Returns
///
/// `None` for the zero vector, otherwise the normalized `(x, y)` pair.
pub fn normalize(x: f64, y: f64) -> Option<(f64, f64)> {
    if x == 0.0 && y == 0.0 {
        return None;
    }
    let length = x.hypot(y);
    Some((x / length, y / length))
}

/// Returns the radius to clamp with: the given radius when finite, 0 otherwise.
pub fn effective_radius(radius: Option<f64>) -> f64 {
    match radius {
        Some(r) if r.is_finite() => r,
        _ => 0.0,
    }
}

/// Clamps a position so a circle of `radius` stays inside `bounds`.
///
/// When the circle is wider than the area the lower edge wins, so the
/// result is `radius` on that axis. A NaN coordinate ends up on the upper
/// edge, since `f64::min` ignores NaN.
///
/// # Arguments
///
/// * `pos` - Position to clamp in place
/// * `bounds` - Playable area
/// * `radius` - Circle radius, already resolved via [`effective_radius`]
pub fn clamp_to_bounds(pos: &mut Position, bounds: &Bounds, radius: f64) {
    pos.x = radius.max((bounds.width - radius).min(pos.x));
    pos.y = radius.max((bounds.height - radius).min(pos.y));
}
