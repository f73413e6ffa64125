use macroquad::prelude::*;
use roamer::game::input::DirectionalInput;

/// Reads the arrow keys for this frame.
pub fn poll() -> DirectionalInput {
    DirectionalInput {
        up: is_key_down(KeyCode::Up),
        down: is_key_down(KeyCode::Down),
        left: is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::Right),
    }
}
