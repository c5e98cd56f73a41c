//! Gate-driven ADSR node.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::envelope::{AdsrEnvelope, EnvelopeState};
use crate::graph::node::check_block;
use crate::graph::Block;

/// Envelope timings in seconds plus the sustain level.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrParams {
    pub attack: f32,
    pub decay: f32,
    pub sustain: f32,
    pub release: f32,
}

/// ADSR node evaluated once per tick with the current gate level.
///
/// Gate high retriggers the envelope with the tick's parameters; gate low
/// requests a release (which the envelope honors only from Sustain). Either
/// way the envelope then shapes exactly one block, so per-tick evaluation
/// cadence must match block playback cadence.
pub struct AdsrNode {
    env: AdsrEnvelope,
}

impl AdsrNode {
    pub fn new() -> Self {
        Self {
            env: AdsrEnvelope::new(),
        }
    }

    pub fn apply(&mut self, gate: bool, waveform: &[f32], params: AdsrParams) -> Block {
        check_block(waveform);

        if gate {
            self.env
                .trigger(params.attack, params.decay, params.sustain, params.release);
        } else {
            self.env.release();
        }
        self.env.apply(waveform)
    }

    pub fn is_active(&self) -> bool {
        self.env.is_active()
    }

    pub fn state(&self) -> EnvelopeState {
        self.env.state()
    }
}

impl Default for AdsrNode {
    fn default() -> Self {
        Self::new()
    }
}
