//! Unbounded FIFO of quantized samples.

use crossbeam_channel::{unbounded, Receiver, Sender};

/// Thread-safe unbounded queue of device-ready `i16` samples.
///
/// Insertion order is playback order. `enqueue` never fails, never blocks,
/// and has no backpressure: a producer may run arbitrarily far ahead of the
/// consumer, and the resulting memory growth is an accepted risk. Underrun
/// is the consumer's concern (the drainer substitutes silence).
///
/// Clones share the same queue, so any number of producer contexts may
/// enqueue concurrently while one consumer dequeues.
#[derive(Clone)]
pub struct PcmQueue {
    tx: Sender<i16>,
    rx: Receiver<i16>,
}

impl PcmQueue {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    /// Append one sample. Never fails or blocks.
    pub fn enqueue(&self, sample: i16) {
        // The queue owns its receiver, so the channel can never disconnect.
        let _ = self.tx.send(sample);
    }

    /// Remove and return the oldest sample, or `None` if the queue is empty.
    /// Never blocks.
    pub fn try_dequeue(&self) -> Option<i16> {
        self.rx.try_recv().ok()
    }

    /// Number of samples currently queued.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

impl Default for PcmQueue {
    fn default() -> Self {
        Self::new()
    }
}
