use std::sync::OnceLock;

use log::{info, warn};
use macroquad::prelude::*;
use roamer::game::params::Params;
use roamer::game::scene::Scene;

mod graphics;
mod keyboard;
mod ui;

static STARTUP_PARAMS: OnceLock<Params> = OnceLock::new();

/// Loads the config once; the window config needs it before `main` runs.
fn startup_params() -> &'static Params {
    STARTUP_PARAMS.get_or_init(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        Params::load_or_default(Params::config_path())
    })
}

fn window_conf() -> Conf {
    let params = startup_params();
    Conf {
        window_title: params.title.clone(),
        window_width: params.canvas_width as i32,
        window_height: params.canvas_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut params = startup_params().clone();
    let mut scene = Scene::new(&params);
    let mut ui_state = ui::UIState::new();

    info!(
        "starting {}x{} canvas, speed {}, max delta {}ms",
        params.canvas_width, params.canvas_height, params.speed, params.max_delta_ms
    );
    info!("press F1 to toggle the debug overlay");

    loop {
        if is_key_pressed(KeyCode::F1) {
            ui_state.visible = !ui_state.visible;
        }

        let delta_ms = f64::from(get_frame_time()) * 1000.0;
        let input = keyboard::poll();
        scene.update(Some(&input), delta_ms);
        ui_state.record_frame(delta_ms);

        graphics::draw_scene(&scene, &params);
        ui::draw_ui(&mut ui_state, &scene, &mut params);

        if ui_state.params_changed {
            ui_state.params_changed = false;
            scene.apply_params(&params);
        }

        if ui_state.reset_requested {
            ui_state.reset_requested = false;
            scene.reset(&params);
            ui_state.status_message = Some("Scene reset".to_string());
            info!("scene reset");
        }

        if ui_state.reload_requested {
            ui_state.reload_requested = false;
            let path = Params::config_path();
            match Params::load_from_file(&path) {
                Ok(mut loaded) => {
                    let window = startup_params().canvas();
                    if loaded.keep_canvas(window) {
                        warn!(
                            "ignoring canvas size from {path}, keeping {}x{}",
                            window.width, window.height
                        );
                    }
                    params = loaded;
                    scene.apply_params(&params);
                    ui_state.status_message = Some(format!("Reloaded {path}"));
                    info!("reloaded config from {path}");
                }
                Err(e) => {
                    ui_state.status_message = Some(format!("Reload failed: {e}"));
                    warn!("failed to reload config from {path}: {e}");
                }
            }
        }

        ui::process_egui();
        next_frame().await;
    }
}
