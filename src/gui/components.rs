mod config_panel;
mod transport_controls;
mod waveform;

pub use config_panel::render_config_panel;
pub use transport_controls::render_transport_controls;
pub use waveform::render_waveform;
