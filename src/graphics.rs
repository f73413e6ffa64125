use macroquad::prelude::*;
use roamer::game::params::{Params, split_rgb};
use roamer::game::player::Movable;
use roamer::game::scene::Scene;

trait ToColor {
    fn to_color(&self) -> Color;
}

impl ToColor for u32 {
    fn to_color(&self) -> Color {
        let (r, g, b) = split_rgb(*self);
        Color::from_rgba(r, g, b, 255)
    }
}

pub fn draw_scene(scene: &Scene, params: &Params) {
    let (r, g, b) = params.background_rgb();
    clear_background(Color::from_rgba(r, g, b, 255));

    // canvas outline when clamping is off, so it is visible where the edge was
    if scene.bounds.is_none() {
        let canvas = scene.canvas();
        draw_rectangle_lines(
            0.0,
            0.0,
            canvas.width as f32,
            canvas.height as f32,
            1.0,
            Color::from_rgba(80, 80, 80, 255),
        );
    }

    let player = &scene.player;
    let pos = player.pos();
    let radius = roamer::game::geometry::effective_radius(player.radius());
    draw_circle(
        pos.x as f32,
        pos.y as f32,
        radius as f32,
        player.color.to_color(),
    );
}
