use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use roamer::game::params::Params;
use roamer::game::scene::Scene;
use std::collections::VecDeque;

const MAX_HISTORY_POINTS: usize = 300;

pub struct UIState {
    pub visible: bool,
    pub frame_delta_history: VecDeque<(f64, f64)>,
    pub last_delta_ms: f64,
    pub reset_requested: bool,
    pub reload_requested: bool,
    pub params_changed: bool,
    pub status_message: Option<String>,
    frame_counter: f64,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            visible: false,
            frame_delta_history: VecDeque::new(),
            last_delta_ms: 0.0,
            reset_requested: false,
            reload_requested: false,
            params_changed: false,
            status_message: None,
            frame_counter: 0.0,
        }
    }

    pub fn record_frame(&mut self, delta_ms: f64) {
        self.last_delta_ms = delta_ms;
        self.frame_counter += 1.0;
        self.frame_delta_history.push_back((self.frame_counter, delta_ms));
        if self.frame_delta_history.len() > MAX_HISTORY_POINTS {
            self.frame_delta_history.pop_front();
        }
    }
}

pub fn draw_ui(state: &mut UIState, scene: &Scene, params: &mut Params) {
    if !state.visible {
        return;
    }

    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        egui_ctx.set_visuals(visuals);

        egui::Window::new("Debug")
            .default_pos(egui::pos2(10.0, 10.0))
            .default_width(260.0)
            .frame(
                egui::Frame::window(&egui_ctx.style())
                    .fill(egui::Color32::from_rgba_premultiplied(20, 20, 30, 200)),
            )
            .show(egui_ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("🔄 Reset").clicked() {
                        state.reset_requested = true;
                    }
                    if ui.button("📂 Reload config").clicked() {
                        state.reload_requested = true;
                    }
                });

                if let Some(ref msg) = state.status_message {
                    ui.label(msg);
                }

                ui.separator();

                let pos = scene.player_pos();
                ui.label(format!("Position: ({:.1}, {:.1})", pos.x, pos.y));
                ui.label(format!("Time: {:.1}s", scene.time));
                ui.label(format!("Frames: {}", scene.frames));
                ui.label(format!("Frame delta: {:.2}ms", state.last_delta_ms));

                ui.separator();

                let mut changed = false;
                ui.label("Speed");
                changed |= ui
                    .add(egui::Slider::new(&mut params.speed, 0.0..=1000.0).text("px/s"))
                    .changed();
                ui.label("Max frame delta");
                changed |= ui
                    .add(egui::Slider::new(&mut params.max_delta_ms, 1.0..=250.0).text("ms"))
                    .changed();
                ui.label("Radius");
                changed |= ui
                    .add(egui::Slider::new(&mut params.player_radius, 0.0..=100.0).text("px"))
                    .changed();
                changed |= ui
                    .checkbox(&mut params.clamp_to_canvas, "Clamp to canvas")
                    .changed();
                state.params_changed |= changed;

                ui.separator();
                draw_frame_delta_plot(ui, &state.frame_delta_history, params.max_delta_ms);
            });
    });
}

fn draw_frame_delta_plot(ui: &mut egui::Ui, data: &VecDeque<(f64, f64)>, cap_ms: f64) {
    if data.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    Plot::new("frame_delta_plot")
        .height(120.0)
        .show_axes([false, true])
        .legend(egui_plot::Legend::default())
        .show(ui, |plot_ui| {
            let points: PlotPoints = data.iter().map(|&(x, y)| [x, y]).collect();
            let line = Line::new(points)
                .color(egui::Color32::from_rgb(100, 150, 255))
                .name("Frame delta (ms)");
            plot_ui.line(line);

            let first = data.front().map_or(0.0, |&(x, _)| x);
            let last = data.back().map_or(0.0, |&(x, _)| x);
            let cap_points: PlotPoints = [[first, cap_ms], [last, cap_ms]].into_iter().collect();
            let cap = Line::new(cap_points)
                .color(egui::Color32::from_rgb(255, 100, 100))
                .name("Cap");
            plot_ui.line(cap);
        });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
