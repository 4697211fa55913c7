use eframe::egui;

use crate::config::ScopeConfig;
use crate::consts;

pub fn render_config_panel(ui: &mut egui::Ui, config: &mut ScopeConfig) {
    ui.label(egui::RichText::new("Configuration").size(16.0));
    ui.add_space(8.0);

    render_display_settings(ui, config);

    ui.add_space(8.0);

    render_engine_settings(ui, config);

    ui.add_space(20.0);
}

fn render_display_settings(ui: &mut egui::Ui, config: &mut ScopeConfig) {
    egui::CollapsingHeader::new("Display")
        .default_open(true)
        .show(ui, |ui| {
            ui.add_space(4.0);
            egui::Grid::new("display_settings_grid")
                .num_columns(2)
                .spacing([20.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Refresh Interval:")
                        .on_hover_text("How often the waveform is polled (lower = smoother)");
                    ui.add(
                        egui::Slider::new(&mut config.poll_interval_ms, consts::POLL_INTERVAL_RANGE)
                            .suffix(" ms"),
                    );
                    ui.end_row();

                    ui.label("Canvas Height:");
                    ui.add(egui::Slider::new(
                        &mut config.canvas_height,
                        consts::CANVAS_HEIGHT_RANGE,
                    ));
                    ui.end_row();

                    ui.label("Line Width:");
                    ui.add(egui::Slider::new(
                        &mut config.stroke_width,
                        consts::STROKE_WIDTH_RANGE,
                    ));
                    ui.end_row();
                });
        });
}

fn render_engine_settings(ui: &mut egui::Ui, config: &mut ScopeConfig) {
    egui::CollapsingHeader::new("Input Monitor")
        .default_open(true)
        .show(ui, |ui| {
            ui.add_space(4.0);
            egui::Grid::new("engine_settings_grid")
                .num_columns(2)
                .spacing([20.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Capture Window:")
                        .on_hover_text("Samples shown across the canvas - higher = more time on screen");
                    ui.add(
                        egui::Slider::new(&mut config.capture_window, consts::CAPTURE_WINDOW_RANGE)
                            .suffix(" samples"),
                    );
                    ui.end_row();
                });
        });
}
