use crate::consts;

pub const APP_VERSION: &str = "v0.1.0";

#[derive(Clone, PartialEq, Debug)]
pub struct ScopeConfig {
    /// Delay between two polls of the engine, in milliseconds.
    /// Lower = smoother trace but more work on the poller thread.
    pub poll_interval_ms: u64,

    /// Height of the waveform canvas in points.
    pub canvas_height: f32,

    /// Thickness of the waveform line.
    pub stroke_width: f32,

    /// Number of mono samples retained by the capture engine.
    /// Larger = more audio squeezed into the same canvas width.
    pub capture_window: usize,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: consts::POLL_INTERVAL_MS,
            canvas_height: consts::CANVAS_HEIGHT,
            stroke_width: consts::STROKE_WIDTH,
            capture_window: consts::CAPTURE_WINDOW,
        }
    }
}

impl ScopeConfig {
    /// Returns a copy with every field clamped into its accepted range.
    pub fn sanitized(&self) -> Self {
        Self {
            poll_interval_ms: self.poll_interval_ms.clamp(
                *consts::POLL_INTERVAL_RANGE.start(),
                *consts::POLL_INTERVAL_RANGE.end(),
            ),
            canvas_height: clamp_f32(self.canvas_height, &consts::CANVAS_HEIGHT_RANGE),
            stroke_width: clamp_f32(self.stroke_width, &consts::STROKE_WIDTH_RANGE),
            capture_window: self.capture_window.clamp(
                *consts::CAPTURE_WINDOW_RANGE.start(),
                *consts::CAPTURE_WINDOW_RANGE.end(),
            ),
        }
    }
}

fn clamp_f32(value: f32, range: &std::ops::RangeInclusive<f32>) -> f32 {
    if value.is_nan() {
        return *range.start();
    }
    value.clamp(*range.start(), *range.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_already_sane() {
        let config = ScopeConfig::default();
        assert_eq!(config.sanitized(), config);
        assert_eq!(config.poll_interval_ms, 100);
    }

    #[test]
    fn sanitized_clamps_out_of_range_values() {
        let config = ScopeConfig {
            poll_interval_ms: 0,
            canvas_height: 10_000.0,
            stroke_width: f32::NAN,
            capture_window: 1,
        }
        .sanitized();

        assert_eq!(config.poll_interval_ms, 16);
        assert_eq!(config.canvas_height, 400.0);
        assert_eq!(config.stroke_width, 0.5);
        assert_eq!(config.capture_window, 256);
    }
}
