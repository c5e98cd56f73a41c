//! Filter -> queue -> drain orchestration.

use log::debug;

use crate::dsp::filter::OutputFilter;
use crate::stream::{PcmQueue, StreamDrainer, StreamError, StreamSink};
use crate::{Position, BUFFER_SIZE, DRAIN_PASSES};

/// One complete synthesis output: windowed filter, PCM queue, drainer, and
/// the sink they feed.
///
/// Every piece of state lives here, owned explicitly - no process-wide
/// singletons - so independent synthesizer instances can coexist and be
/// tested in isolation. The host drives it per tick: `set_gain` and
/// `set_position` with current control values, `write` with each finished
/// block, `process` as an explicit drain tick.
pub struct Synthesizer<S: StreamSink> {
    sink: S,
    filter: OutputFilter,
    queue: PcmQueue,
    drainer: StreamDrainer,
    scratch: Vec<i16>,
    gain: f32,
}

impl<S: StreamSink> Synthesizer<S> {
    pub fn new(sink: S) -> Self {
        let queue = PcmQueue::new();
        let drainer = StreamDrainer::new(queue.clone());
        Self {
            sink,
            filter: OutputFilter::new(),
            queue,
            drainer,
            scratch: vec![0; BUFFER_SIZE],
            gain: 1.0,
        }
    }

    /// Set the output gain. Unclamped; only the filtered product is clamped.
    pub fn set_gain(&mut self, gain: f32) {
        self.gain = gain;
    }

    /// Ensure the output stream is running, then drain aggressively.
    pub fn play(&mut self, position: Position) -> Result<(), StreamError> {
        self.sink.activate(position)?;
        self.drainer.drain_times(&mut self.sink, DRAIN_PASSES);
        Ok(())
    }

    /// Move the emitter on an already-active stream.
    pub fn set_position(&mut self, position: Position) {
        self.sink.set_position(position);
    }

    /// Filter one block with the current gain, enqueue every quantized
    /// sample, and drain.
    ///
    /// # Panics
    /// Panics if `block` is not exactly `BUFFER_SIZE` samples long - a
    /// mis-sized block is a programming error upstream, not a recoverable
    /// condition.
    pub fn write(&mut self, block: &[f32]) {
        assert_eq!(
            block.len(),
            BUFFER_SIZE,
            "waveform block must be exactly {BUFFER_SIZE} samples"
        );

        self.filter.process(block, self.gain, &mut self.scratch);
        for &sample in &self.scratch {
            self.queue.enqueue(sample);
        }
        self.drainer.drain_times(&mut self.sink, DRAIN_PASSES);
    }

    /// One explicit drain pass (host tick with no new audio).
    pub fn process(&mut self) {
        self.drainer.drain(&mut self.sink);
    }

    /// Orchestration entry point: activate, write, drain. Fire-and-forget -
    /// nothing is returned to the host on the audio path.
    pub fn output(&mut self, block: &[f32], position: Position) {
        if let Err(err) = self.play(position) {
            debug!("output stream unavailable, dropping block: {err}");
            return;
        }
        self.write(block);
        self.process();
    }

    /// Samples produced but not yet handed to the sink.
    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::BufferSink;

    #[test]
    fn write_filters_enqueues_and_drains() {
        let mut synth = Synthesizer::new(BufferSink::new(BUFFER_SIZE));
        let block = vec![0.5f32; BUFFER_SIZE];

        synth.write(&block);

        // One block of headroom: the first drain pass fills the sink, the
        // rest are no-ops until the device consumes.
        assert_eq!(synth.sink().written().len(), BUFFER_SIZE);
        assert_eq!(synth.queued_len(), 0);
    }

    #[test]
    fn play_activates_sink_once() {
        let mut synth = Synthesizer::new(BufferSink::new(BUFFER_SIZE));

        synth.play([1.0, 2.0, 3.0]).unwrap();
        assert!(synth.sink().is_active());
        assert_eq!(synth.sink().position(), [1.0, 2.0, 3.0]);

        // Already active: position is not re-seated by play.
        synth.play([9.0, 9.0, 9.0]).unwrap();
        assert_eq!(synth.sink().position(), [1.0, 2.0, 3.0]);

        synth.set_position([4.0, 5.0, 6.0]);
        assert_eq!(synth.sink().position(), [4.0, 5.0, 6.0]);
    }

    #[test]
    #[should_panic(expected = "must be exactly")]
    fn mis_sized_block_panics() {
        let mut synth = Synthesizer::new(BufferSink::new(BUFFER_SIZE));
        synth.write(&[0.0; 100]);
    }

    #[test]
    fn output_is_fire_and_forget() {
        let mut synth = Synthesizer::new(BufferSink::new(4 * BUFFER_SIZE));
        let block = vec![0.25f32; BUFFER_SIZE];

        synth.output(&block, [0.0; 3]);

        assert!(synth.sink().is_active());
        // play() drains silence first (queue still empty), then write()
        // queues the filtered block and drains it through.
        assert!(synth.sink().written().len() >= BUFFER_SIZE);
        assert_eq!(synth.queued_len(), 0);
    }

    #[test]
    fn gain_is_applied_at_write_time() {
        let mut synth = Synthesizer::new(BufferSink::new(BUFFER_SIZE));
        synth.set_gain(0.0);
        let block = vec![1.0f32; BUFFER_SIZE];

        synth.write(&block);

        assert!(synth.sink().written().iter().all(|&s| s == 0));
    }
}
