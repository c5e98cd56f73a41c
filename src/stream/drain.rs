//! Queue-to-sink drainer.

use crate::stream::queue::PcmQueue;
use crate::stream::sink::StreamSink;
use crate::BUFFER_SIZE;

/// Pulls quantized samples from a [`PcmQueue`] and pushes fixed-size blocks
/// into a sink at device cadence.
///
/// There is no dedicated drain timer. Correctness comes from over-polling:
/// the orchestration invokes the drainer several times on every external
/// trigger (play, write, explicit tick), which keeps the device fed as long
/// as triggers arrive at least as often as the device consumes audio.
pub struct StreamDrainer {
    queue: PcmQueue,
    scratch: Vec<i16>,
}

impl StreamDrainer {
    pub fn new(queue: PcmQueue) -> Self {
        Self {
            queue,
            scratch: Vec::with_capacity(BUFFER_SIZE),
        }
    }

    /// Move up to one block of samples into the sink.
    ///
    /// Writes `n = min(BUFFER_SIZE, max_writable - queued)` samples in a
    /// single call, substituting silence for every sample the queue could
    /// not supply. Underrun is normal operation, not an error. Never blocks.
    pub fn drain<S: StreamSink>(&mut self, sink: &mut S) {
        let headroom = sink
            .max_writable_count()
            .saturating_sub(sink.queued_count());
        let n = headroom.min(BUFFER_SIZE);
        if n == 0 {
            return;
        }

        self.scratch.clear();
        self.scratch
            .extend((0..n).map(|_| self.queue.try_dequeue().unwrap_or(0)));
        sink.write(&self.scratch);
    }

    /// Repeat [`drain`](Self::drain) `times` times.
    pub fn drain_times<S: StreamSink>(&mut self, sink: &mut S, times: usize) {
        for _ in 0..times {
            self.drain(sink);
        }
    }
}
