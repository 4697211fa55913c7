/// Default delay between two waveform polls, in milliseconds.
/// 100ms matches a 10Hz refresh of the trace.
pub const POLL_INTERVAL_MS: u64 = 100;

/// Accepted range for the poll interval.
pub const POLL_INTERVAL_RANGE: std::ops::RangeInclusive<u64> = 16..=500;

/// Default height of the waveform canvas in points.
pub const CANVAS_HEIGHT: f32 = 160.0;

pub const CANVAS_HEIGHT_RANGE: std::ops::RangeInclusive<f32> = 60.0..=400.0;

/// Default thickness of the waveform stroke.
pub const STROKE_WIDTH: f32 = 1.5;

pub const STROKE_WIDTH_RANGE: std::ops::RangeInclusive<f32> = 0.5..=4.0;

/// Number of mono samples the capture engine keeps around.
/// 2048 samples at 44.1kHz = ~46ms of audio
pub const CAPTURE_WINDOW: usize = 2048;

pub const CAPTURE_WINDOW_RANGE: std::ops::RangeInclusive<usize> = 256..=8192;

/// Scale applied to every resampled value.
pub const DISPLAY_GAIN: f32 = 0.5;
