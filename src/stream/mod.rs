//! PCM delivery: queue, drainer, and device-facing sinks.
//!
//! The queue decouples the producer cadence (per-tick synthesis) from the
//! consumer cadence (the audio device). The drainer moves queued samples
//! into a [`StreamSink`] without ever exceeding the sink's probed headroom,
//! substituting silence on underrun.

/// Realtime output through the default audio device (cpal).
pub mod device;
/// Moves queued samples into a sink at device cadence.
pub mod drain;
/// Unbounded thread-safe FIFO of quantized samples.
pub mod queue;
/// The sink contract and an in-memory implementation.
pub mod sink;

pub use drain::StreamDrainer;
pub use queue::PcmQueue;
pub use sink::{BufferSink, StreamError, StreamSink};
