//! The device-facing sink contract.

use crate::Position;

/// Errors surfaced while opening or starting an output stream.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("no default output device available")]
    NoDevice,
    #[error("failed to query output config: {0}")]
    Config(#[from] cpal::DefaultStreamConfigError),
    #[error("failed to build output stream: {0}")]
    Build(#[from] cpal::BuildStreamError),
    #[error("failed to start output stream: {0}")]
    Play(#[from] cpal::PlayStreamError),
}

/// A hardware-abstracted audio output accepting finished PCM blocks.
///
/// Callers must never write more than
/// `max_writable_count() - queued_count()` samples in one call; the drainer
/// probes exactly that headroom before building a block.
pub trait StreamSink {
    /// Samples already buffered downstream and not yet played.
    fn queued_count(&self) -> usize;

    /// Total downstream buffer capacity in samples.
    fn max_writable_count(&self) -> usize;

    /// Append a finished PCM block. Order is playback order.
    fn write(&mut self, samples: &[i16]);

    /// Ensure the stream is running and positioned. Idempotent.
    fn activate(&mut self, position: Position) -> Result<(), StreamError>;

    /// Move the emitter. Ignored while the stream is inactive.
    fn set_position(&mut self, position: Position);
}

/// In-memory sink with simulated device capacity.
///
/// Captures everything written, for offline rendering and tests. The
/// "device" never consumes on its own; call [`BufferSink::consume`] to
/// simulate playback progress.
pub struct BufferSink {
    capacity: usize,
    queued: usize,
    written: Vec<i16>,
    active: bool,
    position: Position,
}

impl BufferSink {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queued: 0,
            written: Vec::new(),
            active: false,
            position: [0.0; 3],
        }
    }

    /// Everything written so far, in playback order.
    pub fn written(&self) -> &[i16] {
        &self.written
    }

    /// Simulate the device playing `n` queued samples.
    pub fn consume(&mut self, n: usize) {
        self.queued = self.queued.saturating_sub(n);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

impl StreamSink for BufferSink {
    fn queued_count(&self) -> usize {
        self.queued
    }

    fn max_writable_count(&self) -> usize {
        self.capacity
    }

    fn write(&mut self, samples: &[i16]) {
        self.queued += samples.len();
        self.written.extend_from_slice(samples);
    }

    fn activate(&mut self, position: Position) -> Result<(), StreamError> {
        if !self.active {
            self.active = true;
            self.position = position;
        }
        Ok(())
    }

    fn set_position(&mut self, position: Position) {
        if self.active {
            self.position = position;
        }
    }
}
