#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use roamer::game::geometry::Position;
use roamer::game::input::DirectionalInput;
use roamer::game::params::Params;
use roamer::game::scene::Scene;

fn right() -> DirectionalInput {
    DirectionalInput {
        right: true,
        ..Default::default()
    }
}

#[test]
fn test_scene_spawns_player_at_center() {
    let params = Params::default();
    let scene = Scene::new(&params);

    assert_eq!(scene.player_pos(), Position::new(400.0, 300.0));
    assert_eq!(scene.player.radius, Some(20.0));
    assert_eq!(scene.player.color, 0x4f_c3_f7);
    assert_eq!(scene.frames, 0);
}

#[test]
fn test_scene_update_moves_player() {
    let params = Params::default();
    let mut scene = Scene::new(&params);

    scene.update(Some(&right()), 50.0);

    assert_eq!(scene.player_pos(), Position::new(410.0, 300.0));
    assert_eq!(scene.frames, 1);
    assert!((scene.time - 0.05).abs() < 1e-12);
}

#[test]
fn test_scene_time_uses_capped_delta() {
    let params = Params::default();
    let mut scene = Scene::new(&params);

    scene.update(Some(&DirectionalInput::default()), 1000.0);

    assert!((scene.time - 0.05).abs() < 1e-12);
    assert_eq!(scene.player_pos(), Position::new(400.0, 300.0));
}

#[test]
fn test_scene_skips_invalid_frames() {
    let params = Params::default();
    let mut scene = Scene::new(&params);

    scene.update(None, 16.0);
    scene.update(Some(&right()), 0.0);
    scene.update(Some(&right()), f64::NAN);

    assert_eq!(scene.player_pos(), Position::new(400.0, 300.0));
    assert_eq!(scene.frames, 0);
    assert_eq!(scene.time, 0.0);
}

#[test]
fn test_scene_clamps_to_canvas() {
    let params = Params::default();
    let mut scene = Scene::new(&params);

    for _ in 0..200 {
        scene.update(Some(&right()), 50.0);
    }

    assert_eq!(scene.player_pos(), Position::new(780.0, 300.0));
}

#[test]
fn test_scene_without_clamping_leaves_canvas() {
    let params = Params {
        clamp_to_canvas: false,
        ..Params::default()
    };
    let mut scene = Scene::new(&params);

    for _ in 0..200 {
        scene.update(Some(&right()), 50.0);
    }

    assert!(scene.player_pos().x > 800.0);
}

#[test]
fn test_scene_reset_recenters_player() {
    let params = Params::default();
    let mut scene = Scene::new(&params);

    for _ in 0..10 {
        scene.update(Some(&right()), 16.0);
    }
    scene.reset(&params);

    assert_eq!(scene.player_pos(), Position::new(400.0, 300.0));
    assert_eq!(scene.frames, 0);
    assert_eq!(scene.time, 0.0);
}

#[test]
fn test_apply_params_keeps_position_and_updates_speed() {
    let params = Params::default();
    let mut scene = Scene::new(&params);

    let faster = Params {
        speed: 400.0,
        ..Params::default()
    };
    scene.apply_params(&faster);
    assert_eq!(scene.player_pos(), Position::new(400.0, 300.0));

    scene.update(Some(&right()), 50.0);
    assert_eq!(scene.player_pos(), Position::new(420.0, 300.0));
}

#[test]
fn test_apply_params_clamps_into_smaller_canvas() {
    let params = Params::default();
    let mut scene = Scene::new(&params);

    let small = Params {
        canvas_width: 200.0,
        canvas_height: 100.0,
        player_radius: 10.0,
        ..Params::default()
    };
    scene.apply_params(&small);

    assert_eq!(scene.player_pos(), Position::new(190.0, 90.0));
    assert_eq!(scene.player.radius, Some(10.0));
}

#[test]
fn test_scene_time_matches_applied_movement() {
    let params = Params::default();
    let mut scene = Scene::new(&params);

    for delta in [16.0, 500.0, 33.0, 0.0, f64::NAN, 10.0] {
        scene.update(Some(&right()), delta);
    }

    // 200 units per second over every simulated second
    let travelled = scene.player_pos().x - 400.0;
    assert!((travelled - scene.time * 200.0).abs() < 1e-9);
    assert_eq!(scene.frames, 4);
}

#[test]
fn test_reloaded_canvas_keeps_window_bounds() {
    let startup = Params::default();
    let mut scene = Scene::new(&startup);

    let mut reloaded = Params {
        canvas_width: 1600.0,
        speed: 300.0,
        ..Params::default()
    };
    assert!(reloaded.keep_canvas(startup.canvas()));
    scene.apply_params(&reloaded);

    for _ in 0..200 {
        scene.update(Some(&right()), 50.0);
    }

    assert_eq!(scene.canvas(), startup.canvas());
    assert_eq!(scene.player_pos(), Position::new(780.0, 300.0));
}
