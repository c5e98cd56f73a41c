//! Sine wave node.

use crate::dsp::oscillator::{SharedPhase, SineOscillator};
use crate::graph::node::check_block;
use crate::graph::Block;
use crate::BUFFER_SIZE;

/// Stateful sine generator driven by a per-sample frequency block.
///
/// Each node owns its own phase by default. [`SineNode::with_shared_phase`]
/// opts into the legacy process-wide accumulator, where every node sharing
/// the handle advances the same phase (audible cross-talk between logically
/// independent oscillators - see [`SharedPhase`]).
pub struct SineNode {
    osc: SineOscillator,
}

impl SineNode {
    pub fn new() -> Self {
        Self {
            osc: SineOscillator::new(),
        }
    }

    pub fn with_shared_phase(shared: SharedPhase) -> Self {
        Self {
            osc: SineOscillator::with_shared_phase(shared),
        }
    }

    /// Generate one block of sine samples at the given per-sample
    /// frequencies (Hz).
    pub fn generate(&mut self, frequency: &[f32]) -> Block {
        check_block(frequency);

        let mut out = vec![0.0; BUFFER_SIZE];
        self.osc.render(frequency, &mut out);
        out
    }
}

impl Default for SineNode {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ops;

    #[test]
    fn generates_unit_amplitude_sine() {
        let mut node = SineNode::new();
        let freq = ops::fill(440.0);

        let out = node.generate(&freq);

        assert_eq!(out.len(), BUFFER_SIZE);
        assert!(out.iter().all(|&s| s.abs() <= 1.0));
        assert!(out.iter().any(|&s| s.abs() > 0.9), "expected a full swing");
    }

    #[test]
    #[should_panic(expected = "must be exactly")]
    fn rejects_mis_sized_frequency_block() {
        let mut node = SineNode::new();
        node.generate(&[440.0; 10]);
    }
}
