use crate::config::{APP_VERSION, ScopeConfig};
use crate::display::{DisplayState, Phase};
use crate::engine::{CaptureBuffer, TransportQueue, TransportState};
use eframe::egui;
use log::{debug, info};
use parking_lot::Mutex;
use std::sync::Arc;

use super::components::{render_config_panel, render_transport_controls, render_waveform};

pub struct AppState {
    active_config: Arc<Mutex<ScopeConfig>>,
    pending_config: ScopeConfig, // Local copy for sliders
    display: Arc<DisplayState>,
    capture: CaptureBuffer,
    transport: TransportQueue,
}

impl eframe::App for AppState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_top_panel(ctx);
        self.render_bottom_panel(ctx);
        self.render_central_panel(ctx);

        ctx.request_repaint();
    }
}

impl AppState {
    pub fn new(
        config: Arc<Mutex<ScopeConfig>>,
        display: Arc<DisplayState>,
        capture: CaptureBuffer,
        transport: TransportQueue,
    ) -> Self {
        debug!("Initializing GUI state...");

        let pending_config = config.lock().clone();
        debug!(
            "Initial config loaded: poll_interval={}ms, capture_window={}",
            pending_config.poll_interval_ms, pending_config.capture_window
        );

        Self {
            active_config: config,
            pending_config,
            display,
            capture,
            transport,
        }
    }

    fn apply_settings(&mut self) {
        let config = self.pending_config.sanitized();
        debug!("Applying settings: {config:?}");

        if self.capture.capacity() != config.capture_window {
            debug!(
                "Resizing capture window from {} to {} samples",
                self.capture.capacity(),
                config.capture_window
            );
            self.capture.set_capacity(config.capture_window);
        }
        *self.active_config.lock() = config.clone();
        self.pending_config = config;

        info!("Settings applied successfully");
    }

    fn reset_to_default(&mut self) {
        debug!("Resetting config to defaults");
        self.pending_config = ScopeConfig::default();
    }

    fn disable_apply_button(&self) -> bool {
        self.pending_config == *self.active_config.lock()
    }

    fn render_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading(format!("SynthScope {APP_VERSION}"));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if is_live(self.display.phase(), self.transport.state()) {
                        ui.colored_label(egui::Color32::GREEN, "Live");
                    } else {
                        ui.colored_label(egui::Color32::GRAY, "No Signal");
                    }
                });
            });
            ui.add_space(4.0);
            ui.separator();
            ui.add_space(4.0);

            render_transport_controls(ui, &self.transport);
            ui.add_space(4.0);
        });
    }

    fn render_bottom_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.add_space(4.0);

                ui.add_enabled_ui(!self.disable_apply_button(), |ui| {
                    if ui.button("Apply Settings").clicked() {
                        self.apply_settings();
                    }
                });

                if ui.button("↺ Reset to Default").clicked() {
                    self.reset_to_default();
                }
            });
            ui.add_space(8.0);
        });
    }

    fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add_space(8.0);

                    let config = self.active_config.lock().clone();
                    render_waveform(ui, &self.display, &config);

                    ui.add_space(20.0);

                    render_config_panel(ui, &mut self.pending_config);
                });
        });
    }
}

/// A stale trace stays on screen after Stop, so the phase alone is not enough.
fn is_live(phase: Phase, transport: TransportState) -> bool {
    phase == Phase::Populated && transport == TransportState::Playing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_only_while_playing_with_a_trace() {
        assert!(is_live(Phase::Populated, TransportState::Playing));
        assert!(!is_live(Phase::Populated, TransportState::Stopped));
        assert!(!is_live(Phase::Populated, TransportState::Paused));
        assert!(!is_live(Phase::Empty, TransportState::Playing));
    }
}
