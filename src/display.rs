use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// Whether the published trace matches the current width.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Empty,
    Populated,
}

/// Canvas width last measured by the renderer, stored as `f32` bits.
pub struct DisplayWidth(AtomicU32);

impl DisplayWidth {
    pub fn new(width: f32) -> Self {
        Self(AtomicU32::new(width.to_bits()))
    }

    pub fn set(&self, width: f32) {
        self.0.store(width.to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    /// Whole pixel columns available for the trace.
    pub fn columns(&self) -> usize {
        let width = self.get();
        if width.is_finite() && width > 0.0 {
            width.floor() as usize
        } else {
            0
        }
    }
}

/// State shared between the poller (writer) and the renderer (reader).
///
/// The sample buffer is published as an immutable snapshot; the lock is only
/// held while the pointer is swapped or cloned.
pub struct DisplayState {
    samples: Mutex<Arc<[f32]>>,
    width: DisplayWidth,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            samples: Mutex::new(Arc::from(Vec::<f32>::new())),
            width: DisplayWidth::new(0.0),
        }
    }
}

impl DisplayState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn snapshot(&self) -> Arc<[f32]> {
        self.samples.lock().clone()
    }

    pub fn publish(&self, samples: &[f32]) {
        let snapshot: Arc<[f32]> = Arc::from(samples);
        *self.samples.lock() = snapshot;
    }

    pub fn width(&self) -> &DisplayWidth {
        &self.width
    }

    pub fn phase(&self) -> Phase {
        let columns = self.width.columns();
        let len = self.samples.lock().len();
        if columns > 0 && len == columns {
            Phase::Populated
        } else {
            Phase::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_columns_floor_and_reject_garbage() {
        let width = DisplayWidth::new(320.7);
        assert_eq!(width.columns(), 320);

        width.set(-4.0);
        assert_eq!(width.columns(), 0);

        width.set(f32::NAN);
        assert_eq!(width.columns(), 0);

        width.set(f32::INFINITY);
        assert_eq!(width.columns(), 0);
    }

    #[test]
    fn snapshots_survive_later_publishes() {
        let state = DisplayState::new();
        state.publish(&[0.1, 0.2]);
        let first = state.snapshot();

        state.publish(&[0.3, 0.4, 0.5]);

        assert_eq!(&*first, &[0.1, 0.2]);
        assert_eq!(&*state.snapshot(), &[0.3, 0.4, 0.5]);
    }

    #[test]
    fn phase_tracks_width_changes() {
        let state = DisplayState::new();
        assert_eq!(state.phase(), Phase::Empty);

        state.width().set(3.0);
        state.publish(&[0.0; 3]);
        assert_eq!(state.phase(), Phase::Populated);

        state.width().set(4.0);
        assert_eq!(state.phase(), Phase::Empty);
    }
}
