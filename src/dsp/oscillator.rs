//! Sine oscillator with per-instance or explicitly shared phase.

use std::f64::consts::TAU;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::SAMPLE_RATE;

/// A phase accumulator deliberately shared between several oscillators.
///
/// Sharing one accumulator reproduces the original engine's process-wide
/// phase: every oscillator reading it advances the same counter, so two
/// logically independent sine nodes evaluated in the same graph cross-talk
/// (each hears the other's phase advance). That is a flagged behavior, kept
/// available as an explicit opt-in; independent voices should use
/// [`SineOscillator::new`] instead.
#[derive(Clone, Default)]
pub struct SharedPhase(Arc<AtomicU64>);

impl SharedPhase {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    fn set(&self, phase: f64) {
        self.0.store(phase.to_bits(), Ordering::Relaxed);
    }
}

enum PhaseStore {
    Local(f64),
    Shared(SharedPhase),
}

pub struct SineOscillator {
    phase: PhaseStore,
}

impl SineOscillator {
    /// Oscillator with its own phase accumulator (independent voice).
    pub fn new() -> Self {
        Self {
            phase: PhaseStore::Local(0.0),
        }
    }

    /// Oscillator reading and advancing a shared phase accumulator.
    pub fn with_shared_phase(shared: SharedPhase) -> Self {
        Self {
            phase: PhaseStore::Shared(shared),
        }
    }

    /// Render one block of sine samples driven by a per-sample frequency
    /// block (Hz).
    ///
    /// The output is sin(phase) sampled *before* the increment, so a
    /// frequency change at index i is first audible at sample i + 1. Phase
    /// advances by 2π·f[i]/SAMPLE_RATE per sample and wraps into [0, 2π).
    pub fn render(&mut self, frequency: &[f32], out: &mut [f32]) {
        debug_assert_eq!(frequency.len(), out.len());

        let mut phase = match &self.phase {
            PhaseStore::Local(p) => *p,
            PhaseStore::Shared(s) => s.get(),
        };

        for (o, &freq) in out.iter_mut().zip(frequency.iter()) {
            *o = phase.sin() as f32;
            phase += TAU * freq as f64 / SAMPLE_RATE as f64;
            if phase >= TAU {
                phase -= TAU;
            }
        }

        match &mut self.phase {
            PhaseStore::Local(p) => *p = phase,
            PhaseStore::Shared(s) => s.set(phase),
        }
    }
}

impl Default for SineOscillator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BUFFER_SIZE;

    #[test]
    fn renders_expected_sine_samples() {
        let mut osc = SineOscillator::new();
        let freq = vec![440.0f32; BUFFER_SIZE];
        let mut out = vec![0.0f32; BUFFER_SIZE];

        osc.render(&freq, &mut out);

        // sample n = sin(2π·440·n / 44100), phase read before increment
        for n in [0usize, 1, 12, 500] {
            let expected = (TAU * 440.0 * n as f64 / SAMPLE_RATE as f64).sin() as f32;
            assert!(
                (out[n] - expected).abs() < 1e-5,
                "sample {n}: expected {expected}, got {}",
                out[n]
            );
        }
    }

    #[test]
    fn phase_continues_across_blocks() {
        let mut osc = SineOscillator::new();
        let freq = vec![440.0f32; BUFFER_SIZE];
        let mut first = vec![0.0f32; BUFFER_SIZE];
        let mut second = vec![0.0f32; BUFFER_SIZE];

        osc.render(&freq, &mut first);
        osc.render(&freq, &mut second);

        let n = BUFFER_SIZE as f64;
        let increment = TAU * 440.0 / SAMPLE_RATE as f64;
        let expected = ((n * increment) % TAU).sin() as f32;
        assert!((second[0] - expected).abs() < 1e-4);
    }

    #[test]
    fn independent_oscillators_do_not_interact() {
        let mut a = SineOscillator::new();
        let mut b = SineOscillator::new();
        let freq = vec![440.0f32; BUFFER_SIZE];
        let mut out_a = vec![0.0f32; BUFFER_SIZE];
        let mut out_b = vec![0.0f32; BUFFER_SIZE];

        a.render(&freq, &mut out_a);
        b.render(&freq, &mut out_b);

        assert_eq!(out_a, out_b, "per-instance phase must be isolated");
    }

    #[test]
    fn shared_phase_couples_oscillators() {
        let shared = SharedPhase::new();
        let mut a = SineOscillator::with_shared_phase(shared.clone());
        let mut b = SineOscillator::with_shared_phase(shared);
        let freq = vec![440.0f32; BUFFER_SIZE];
        let mut out_a = vec![0.0f32; BUFFER_SIZE];
        let mut out_b = vec![0.0f32; BUFFER_SIZE];

        a.render(&freq, &mut out_a);
        b.render(&freq, &mut out_b);

        // b starts where a left off: cross-talk, the documented legacy
        // behavior of a process-wide accumulator.
        assert_ne!(out_a, out_b);
        let n = BUFFER_SIZE as f64;
        let increment = TAU * 440.0 / SAMPLE_RATE as f64;
        let expected = ((n * increment) % TAU).sin() as f32;
        assert!((out_b[0] - expected).abs() < 1e-4);
    }
}
