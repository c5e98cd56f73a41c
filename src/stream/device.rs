//! Realtime output through the default audio device.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use log::{error, info};
use rtrb::{Consumer, Producer, RingBuffer};

use crate::stream::sink::{StreamError, StreamSink};
use crate::{Position, BUFFER_SIZE, SAMPLE_RATE};

/// Device-side buffer depth in blocks. Deep enough to ride out tick jitter,
/// shallow enough to keep latency in the tens of milliseconds.
const RING_BLOCKS: usize = 4;

/// [`StreamSink`] over the default cpal output device.
///
/// Written samples land in a bounded SPSC ring buffer; the device callback
/// pops them, converts to float, duplicates across output channels, and
/// zero-fills when the ring runs dry. `queued_count`/`max_writable_count`
/// probe the ring, so the drainer's headroom check maps directly onto the
/// real device buffer.
///
/// The stream is built on `open` but stays paused until `activate`. The
/// spatial position is carried for the host's benefit; this sink renders
/// mono to every channel and performs no spatialization.
pub struct DeviceSink {
    ring: Producer<i16>,
    capacity: usize,
    stream: cpal::Stream,
    started: bool,
    position: Position,
}

impl DeviceSink {
    /// Open the default output device and build a paused stream on it.
    pub fn open() -> Result<Self, StreamError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(StreamError::NoDevice)?;
        let default_config = device.default_output_config()?;
        let channels = default_config.channels() as usize;

        let config = cpal::StreamConfig {
            channels: default_config.channels(),
            sample_rate: cpal::SampleRate(SAMPLE_RATE),
            buffer_size: cpal::BufferSize::Default,
        };

        let capacity = RING_BLOCKS * BUFFER_SIZE;
        let (ring, consumer) = RingBuffer::<i16>::new(capacity);

        let stream = device.build_output_stream(
            &config,
            callback(consumer, channels),
            |err| error!("output stream error: {err}"),
            None,
        )?;
        // Built streams start playing on some backends; hold until activate.
        let _ = stream.pause();

        info!(
            "opened output device '{}' at {} Hz, {} channels, {} sample ring",
            device.name().unwrap_or_else(|_| "unknown".into()),
            SAMPLE_RATE,
            channels,
            capacity,
        );

        Ok(Self {
            ring,
            capacity,
            stream,
            started: false,
            position: [0.0; 3],
        })
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

fn callback(mut ring: Consumer<i16>, channels: usize) -> impl FnMut(&mut [f32], &cpal::OutputCallbackInfo) {
    move |data: &mut [f32], _| {
        for frame in data.chunks_mut(channels) {
            let sample = ring
                .pop()
                .map(|s| s as f32 / i16::MAX as f32)
                .unwrap_or(0.0);
            frame.fill(sample);
        }
    }
}

impl StreamSink for DeviceSink {
    fn queued_count(&self) -> usize {
        self.capacity - self.ring.slots()
    }

    fn max_writable_count(&self) -> usize {
        self.capacity
    }

    fn write(&mut self, samples: &[i16]) {
        for &sample in samples {
            // The drainer probes headroom first, so a full ring here means a
            // concurrent writer raced us; dropping the tail is the non-blocking
            // fallback.
            if self.ring.push(sample).is_err() {
                break;
            }
        }
    }

    fn activate(&mut self, position: Position) -> Result<(), StreamError> {
        if !self.started {
            self.stream.play()?;
            self.started = true;
            self.position = position;
            info!("output stream started at position {position:?}");
        }
        Ok(())
    }

    fn set_position(&mut self, position: Position) {
        if self.started {
            self.position = position;
        }
    }
}
