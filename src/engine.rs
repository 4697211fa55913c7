pub mod capture;
pub mod transport;

pub use capture::{CaptureBuffer, CaptureEngine};
pub use transport::{TransportQueue, TransportState};

/// Read side of an audio engine.
///
/// Implementations hand out an owned copy of their most recent buffer so
/// callers never hold on to engine memory past the call.
pub trait AudioSource: Send + Sync {
    /// Latest samples, or `None` when the engine has nothing to show yet.
    /// An empty vector means the same thing.
    fn audio_data(&self) -> Option<Vec<f32>>;
}

/// Control side of an audio engine. Commands carry no acknowledgement.
pub trait Transport {
    fn play(&mut self) -> anyhow::Result<()>;
    fn pause(&mut self) -> anyhow::Result<()>;
    fn stop(&mut self) -> anyhow::Result<()>;
}
