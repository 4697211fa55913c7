use super::{AudioSource, Transport};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat};
use log::{info, warn};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

struct Window {
    samples: VecDeque<f32>,
    capacity: usize,
}

/// Rolling window of the most recent mono input samples.
///
/// Cloning yields another handle to the same window.
#[derive(Clone)]
pub struct CaptureBuffer {
    inner: Arc<Mutex<Window>>,
}

impl CaptureBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Window {
                samples: VecDeque::with_capacity(capacity),
                capacity,
            })),
        }
    }

    /// Appends interleaved frames, averaging each frame down to one sample.
    pub fn push_frames(&self, data: &[f32], channels: usize) {
        let channels = channels.max(1);
        let mut window = self.inner.lock();

        for frame in data.chunks(channels) {
            let mono = frame.iter().sum::<f32>() / frame.len() as f32;
            window.samples.push_back(mono);
        }

        // Keep only the most recent samples
        let excess = window.samples.len().saturating_sub(window.capacity);
        window.samples.drain(..excess);
    }

    pub fn set_capacity(&self, capacity: usize) {
        let mut window = self.inner.lock();
        window.capacity = capacity;
        let excess = window.samples.len().saturating_sub(capacity);
        window.samples.drain(..excess);
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity
    }

    pub fn clear(&self) {
        self.inner.lock().samples.clear();
    }
}

impl AudioSource for CaptureBuffer {
    fn audio_data(&self) -> Option<Vec<f32>> {
        let window = self.inner.lock();
        if window.samples.is_empty() {
            return None;
        }
        Some(window.samples.iter().copied().collect())
    }
}

/// Engine that monitors the default input device.
///
/// The stream is opened lazily on the first `play` and dropped on `stop`.
pub struct CaptureEngine {
    buffer: CaptureBuffer,
    stream: Option<cpal::Stream>,
}

impl CaptureEngine {
    pub fn new(buffer: CaptureBuffer) -> Self {
        Self {
            buffer,
            stream: None,
        }
    }
}

impl Transport for CaptureEngine {
    fn play(&mut self) -> anyhow::Result<()> {
        if self.stream.is_none() {
            self.stream = Some(open_default_stream(self.buffer.clone())?);
        }
        if let Some(stream) = &self.stream {
            stream.play()?;
        }
        Ok(())
    }

    fn pause(&mut self) -> anyhow::Result<()> {
        let Some(stream) = &self.stream else {
            anyhow::bail!("Nothing to pause: input stream is not open");
        };
        stream.pause()?;
        Ok(())
    }

    fn stop(&mut self) -> anyhow::Result<()> {
        self.stream = None;
        self.buffer.clear();
        Ok(())
    }
}

fn open_default_stream(buffer: CaptureBuffer) -> anyhow::Result<cpal::Stream> {
    let host = cpal::default_host();
    let device = host
        .default_input_device()
        .ok_or_else(|| anyhow::anyhow!("No default input device"))?;

    let device_name = device.name().unwrap_or_else(|_| "Unknown".to_string());
    info!("Opening input device: {device_name}");

    let supported_config = device.default_input_config()?;
    let sample_format = supported_config.sample_format();
    let stream_config: cpal::StreamConfig = supported_config.into();

    match sample_format {
        SampleFormat::F32 => build_stream::<f32>(&device, &stream_config, buffer),
        SampleFormat::I16 => build_stream::<i16>(&device, &stream_config, buffer),
        SampleFormat::U16 => build_stream::<u16>(&device, &stream_config, buffer),
        other => Err(anyhow::anyhow!("Unsupported sample format: {other}")),
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    buffer: CaptureBuffer,
) -> anyhow::Result<cpal::Stream>
where
    T: Sample + cpal::SizedSample,
    f32: FromSample<T>,
{
    let channels = config.channels as usize;
    let stream = device.build_input_stream(
        config,
        move |data: &[T], _: &cpal::InputCallbackInfo| {
            let samples: Vec<f32> = data.iter().map(|&s| s.to_sample()).collect();
            buffer.push_frames(&samples, channels);
        },
        |err| warn!("Input stream error: {err}"),
        None,
    )?;

    Ok(stream)
}
