//! Sample-accurate ADSR amplitude envelope.

use crate::{BUFFER_SIZE, SAMPLE_RATE};

/*
ADSR State Machine
==================

Five stages, advanced exactly one sample per output sample:

    ┌──────┐ trigger() ┌────────┐ index=A  ┌───────┐ index=D  ┌─────────┐
    │ Idle │ ────────→ │ Attack │ ───────→ │ Decay │ ───────→ │ Sustain │
    └──────┘           └────────┘          └───────┘          └─────────┘
        ↑                                                          │
        │                 ┌─────────┐         release()            │
        └──────────────── │ Release │ ←────────────────────────────┘
          index=R         └─────────┘

  Attack    value = index / attack_samples         (linear 0 → 1)
  Decay     value = 1 - (index/decay_samples)(1 - sustain)
                                                   (linear 1 → sustain)
  Sustain   value = sustain, held until release()
  Release   value *= 1 - index/release_samples     (multiplicative fade
                                                    from the current value)

Stage lengths are fixed in samples at trigger time (seconds x sample rate).
Two deliberate asymmetries:

  - trigger() restarts the attack from ANY stage (legato retrigger policy);
  - release() only acts in Sustain. A gate-off during Attack or Decay is
    silently ignored.

`apply` advances the machine by exactly one block per call, so envelope time
is coupled to block cadence: call it once per block actually played, or the
envelope will run fast or slow relative to the audio.
*/

/// The current stage of the envelope state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeState {
    Idle,
    Attack,
    Decay,
    Sustain,
    Release,
}

pub struct AdsrEnvelope {
    state: EnvelopeState,
    /// Samples elapsed in the current stage.
    sample_index: u32,
    /// Current output value, 0.0 to 1.0.
    value: f32,

    // Fixed at trigger time.
    attack_samples: u32,
    decay_samples: u32,
    release_samples: u32,
    sustain_level: f32,
}

impl AdsrEnvelope {
    pub fn new() -> Self {
        Self {
            state: EnvelopeState::Idle,
            sample_index: 0,
            value: 0.0,
            attack_samples: 0,
            decay_samples: 0,
            release_samples: 0,
            sustain_level: 0.0,
        }
    }

    /// Gate high: restart the attack from zero.
    ///
    /// Callable from any stage - retriggering mid-envelope starts a fresh
    /// attack rather than being ignored. Durations are in seconds and are
    /// converted to sample counts here, at the current build-time rate.
    pub fn trigger(&mut self, attack: f32, decay: f32, sustain: f32, release: f32) {
        self.state = EnvelopeState::Attack;
        self.sample_index = 0;
        self.value = 0.0;
        self.attack_samples = (attack * SAMPLE_RATE as f32) as u32;
        self.decay_samples = (decay * SAMPLE_RATE as f32) as u32;
        self.release_samples = (release * SAMPLE_RATE as f32) as u32;
        self.sustain_level = sustain;
    }

    /// Gate low: begin the release fade.
    ///
    /// A no-op in every stage except Sustain.
    pub fn release(&mut self) {
        if self.state == EnvelopeState::Sustain {
            self.state = EnvelopeState::Release;
            self.sample_index = 0;
        }
    }

    /// Shape one block, advancing the envelope by exactly `BUFFER_SIZE`
    /// samples of envelope time.
    pub fn apply(&mut self, waveform: &[f32]) -> Vec<f32> {
        debug_assert_eq!(waveform.len(), BUFFER_SIZE);

        let mut result = vec![0.0f32; BUFFER_SIZE];
        for (out, &sample) in result.iter_mut().zip(waveform.iter()) {
            *out = sample * self.next_value();
        }
        result
    }

    /// Advance one sample and return the envelope value for it.
    ///
    /// Zero-length stages fall straight through to the next stage.
    fn next_value(&mut self) -> f32 {
        loop {
            match self.state {
                EnvelopeState::Idle => return 0.0,

                EnvelopeState::Attack => {
                    if self.sample_index >= self.attack_samples {
                        self.state = EnvelopeState::Decay;
                        self.sample_index = 0;
                        continue;
                    }
                    self.value = self.sample_index as f32 / self.attack_samples as f32;
                    self.sample_index += 1;
                    return self.value;
                }

                EnvelopeState::Decay => {
                    if self.sample_index >= self.decay_samples {
                        self.state = EnvelopeState::Sustain;
                        self.sample_index = 0;
                        continue;
                    }
                    let progress = self.sample_index as f32 / self.decay_samples as f32;
                    self.value = 1.0 - progress * (1.0 - self.sustain_level);
                    self.sample_index += 1;
                    return self.value;
                }

                EnvelopeState::Sustain => {
                    self.value = self.sustain_level;
                    return self.value;
                }

                EnvelopeState::Release => {
                    if self.sample_index >= self.release_samples {
                        self.state = EnvelopeState::Idle;
                        self.sample_index = 0;
                        self.value = 0.0;
                        continue;
                    }
                    let progress = self.sample_index as f32 / self.release_samples as f32;
                    self.value *= 1.0 - progress;
                    self.sample_index += 1;
                    return self.value;
                }
            }
        }
    }

    /// Returns true while the envelope is producing output (not Idle).
    pub fn is_active(&self) -> bool {
        self.state != EnvelopeState::Idle
    }

    /// Current output value, 0.0 to 1.0.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current stage of the state machine.
    pub fn state(&self) -> EnvelopeState {
        self.state
    }
}

impl Default for AdsrEnvelope {
    fn default() -> Self {
        Self::new()
    }
}
