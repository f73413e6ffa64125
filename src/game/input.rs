//! Directional keyboard state for a single frame.

/// Snapshot of the four arrow keys, taken once per frame.
///
/// Each flag is independent; opposing keys may be held at the same time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct DirectionalInput {
    /// Up arrow held.
    pub up: bool,
    /// Down arrow held.
    pub down: bool,
    /// Left arrow held.
    pub left: bool,
    /// Right arrow held.
    pub right: bool,
}

impl DirectionalInput {
    /// Returns the `(horizontal, vertical)` intent, each in `{-1, 0, 1}`.
    ///
    /// Right and down are positive. Opposing keys cancel out.
    pub fn axis(&self) -> (f64, f64) {
        let horizontal = f64::from(u8::from(self.right)) - f64::from(u8::from(self.left));
        let vertical = f64::from(u8::from(self.down)) - f64::from(u8::from(self.up));
        (horizontal, vertical)
    }

    /// Returns `true` when the held keys produce no movement.
    pub fn is_idle(&self) -> bool {
        self.axis() == (0.0, 0.0)
    }
}
