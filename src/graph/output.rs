//! Fire-and-forget audio output node.

use crate::graph::node::check_block;
use crate::stream::StreamSink;
use crate::synth::Synthesizer;
use crate::Position;

/// Terminal node of the graph: hands finished waveform blocks to a
/// [`Synthesizer`].
///
/// `output` is fire-and-forget - the host gets nothing back on the audio
/// path. Each node owns its synthesizer outright, so separate output nodes
/// are fully independent instances.
pub struct OutputNode<S: StreamSink> {
    synth: Synthesizer<S>,
}

impl<S: StreamSink> OutputNode<S> {
    pub fn new(sink: S) -> Self {
        Self {
            synth: Synthesizer::new(sink),
        }
    }

    /// Play the block at the given emitter position.
    pub fn output(&mut self, block: &[f32], position: Position) {
        check_block(block);
        self.synth.output(block, position);
    }

    /// Per-tick gain control (unclamped).
    pub fn set_gain(&mut self, gain: f32) {
        self.synth.set_gain(gain);
    }

    /// Per-tick position control for an already-active stream.
    pub fn set_position(&mut self, position: Position) {
        self.synth.set_position(position);
    }

    pub fn synth(&self) -> &Synthesizer<S> {
        &self.synth
    }

    pub fn synth_mut(&mut self) -> &mut Synthesizer<S> {
        &mut self.synth
    }
}
