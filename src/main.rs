mod config;
mod consts;
mod display;
mod engine;
mod gui;
mod sampler;

use config::ScopeConfig;
use display::DisplayState;
use engine::{CaptureBuffer, CaptureEngine, TransportQueue};
use log::{debug, info};
use parking_lot::Mutex;
use sampler::WaveformSampler;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting up...");

    // === Shared State ===
    let config = Arc::new(Mutex::new(ScopeConfig::default()));
    let display = DisplayState::new();
    let capture = CaptureBuffer::new(config.lock().capture_window);
    let shutdown = Arc::new(AtomicBool::new(false));

    // === Poller Thread ===
    debug!("Spawning poller thread...");
    let poller_thread = sampler::spawn_poller(
        WaveformSampler::new(capture.clone(), display.clone()),
        config.clone(),
        shutdown.clone(),
    );

    // === Transport Thread ===
    debug!("Spawning transport thread...");
    let transport = {
        let capture = capture.clone();
        TransportQueue::spawn(move || CaptureEngine::new(capture))
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 480.0])
            .with_title("SynthScope"),
        ..Default::default()
    };

    debug!("Launching GUI...");
    let result = eframe::run_native(
        "SynthScope",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(gui::AppState::new(
                config, display, capture, transport,
            )))
        }),
    );

    debug!("Signaling poller to shut down...");
    shutdown.store(true, Ordering::Relaxed);

    debug!("Waiting for poller thread to finish...");
    poller_thread.join().expect("Failed to join poller thread");
    debug!("Poller thread joined");

    info!("Clean shutdown complete");

    result
}
