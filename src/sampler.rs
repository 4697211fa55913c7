use crate::config::ScopeConfig;
use crate::consts;
use crate::display::{DisplayState, Phase};
use crate::engine::AudioSource;
use log::{debug, trace};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Linearly resamples `raw` into `out`, one output value per pixel column.
///
/// Column `i` reads source position `s = i / W * (N - 1)` and blends the two
/// neighbouring samples, the upper index clamped to `N - 1`. Every value is
/// scaled by [`consts::DISPLAY_GAIN`]. Does nothing if either side is empty.
pub fn resample_into(raw: &[f32], out: &mut [f32]) {
    if raw.is_empty() || out.is_empty() {
        return;
    }

    let last = raw.len() - 1;
    let columns = out.len() as f32;

    for (i, value) in out.iter_mut().enumerate() {
        let position = i as f32 / columns * last as f32;
        let lower = (position.floor() as usize).min(last);
        let upper = (lower + 1).min(last);
        let frac = position - lower as f32;

        let blended = (1.0 - frac) * raw[lower] + frac * raw[upper];
        *value = consts::DISPLAY_GAIN * blended;
    }
}

/// Pulls audio from an engine and keeps a display-width copy of it published.
pub struct WaveformSampler<S> {
    source: S,
    display: Arc<DisplayState>,
    shadow: Vec<f32>,
}

impl<S: AudioSource> WaveformSampler<S> {
    pub fn new(source: S, display: Arc<DisplayState>) -> Self {
        Self {
            source,
            display,
            shadow: Vec::new(),
        }
    }

    /// One refresh: fetch, resample to the current width, publish.
    ///
    /// Skipped without touching the published buffer when the width is zero
    /// or the engine has no samples.
    pub fn tick(&mut self) {
        let columns = self.display.width().columns();
        if columns == 0 {
            trace!("Skipping tick: no display width yet");
            return;
        }

        let Some(raw) = self.source.audio_data().filter(|raw| !raw.is_empty()) else {
            trace!("Skipping tick: engine has no audio data");
            return;
        };

        if self.shadow.len() != columns {
            debug!(
                "Resizing display buffer from {} to {columns} samples",
                self.shadow.len()
            );
            self.shadow = vec![0.0; columns];
        }

        resample_into(&raw, &mut self.shadow);
        self.display.publish(&self.shadow);
    }

    pub fn state(&self) -> Phase {
        self.display.phase()
    }
}

/// Runs `sampler.tick()` every `poll_interval_ms` until `shutdown` is set.
pub fn spawn_poller<S>(
    mut sampler: WaveformSampler<S>,
    config: Arc<Mutex<ScopeConfig>>,
    shutdown: Arc<AtomicBool>,
) -> JoinHandle<()>
where
    S: AudioSource + 'static,
{
    thread::spawn(move || {
        debug!("Poller thread started");
        let mut phase = sampler.state();
        while !shutdown.load(Ordering::Relaxed) {
            let interval = config.lock().poll_interval_ms;
            thread::sleep(Duration::from_millis(interval));

            if !shutdown.load(Ordering::Relaxed) {
                sampler.tick();

                let current = sampler.state();
                if current != phase {
                    debug!("Waveform {phase:?} -> {current:?}");
                    phase = current;
                }
            }
        }
        debug!("Poller thread shutting down");
    })
}
