use crate::engine::{TransportQueue, TransportState};
use eframe::egui;

pub fn render_transport_controls(ui: &mut egui::Ui, transport: &TransportQueue) {
    let state = transport.state();

    ui.horizontal(|ui| {
        if ui.button("▶ Play").clicked() {
            transport.play();
        }
        if ui.button("⏸ Pause").clicked() {
            transport.pause();
        }
        if ui.button("⏹ Stop").clicked() {
            transport.stop();
        }

        ui.separator();

        match state {
            TransportState::Playing => ui.colored_label(egui::Color32::GREEN, "Playing"),
            TransportState::Paused => ui.colored_label(egui::Color32::YELLOW, "Paused"),
            TransportState::Stopped => ui.colored_label(egui::Color32::GRAY, "Stopped"),
        };
    });
}
