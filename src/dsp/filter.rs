//! Output shaping: windowing, smoothing, gain, and int16 quantization.

use crate::dsp::window::hanning;
use crate::BUFFER_SIZE;

/*
Output Filter
=============

The last float-domain stage before samples become device PCM. Four steps per
sample, in order:

  window      sample * hanning[i]
              Tapers each block to silence at its edges. Blocks arrive from
              the node graph with arbitrary amplitudes at index 0 and 1023;
              without tapering, the jump between one block's tail and the
              next block's head is an audible click. The taper attenuates
              real signal energy too - an accepted trade-off.

  smooth      (previous + windowed) / 2
              A one-pole IIR low-pass with coefficient 0.5, applied
              unconditionally. `previous` persists across blocks, so this is
              also what carries continuity over the block boundary.

  gain+clamp  clamp(smoothed * gain, -1, 1)
              Gain itself is not clamped - only the product is. Any float
              gain is legal.

  quantize    round(clamped * 32767) as i16
              Device-ready PCM.

The smoothing scalar is the only persistent state. It is exclusively owned by
one filter instance; there are no concurrent writers.
*/

pub struct OutputFilter {
    window: Vec<f32>,
    previous_sample: f32,
}

impl OutputFilter {
    pub fn new() -> Self {
        Self {
            window: hanning(BUFFER_SIZE),
            previous_sample: 0.0,
        }
    }

    /// Window, smooth, apply gain, clamp, and quantize one block.
    ///
    /// One output per input sample, same order.
    pub fn process(&mut self, block: &[f32], gain: f32, out: &mut [i16]) {
        debug_assert_eq!(block.len(), self.window.len());
        debug_assert_eq!(block.len(), out.len());

        for ((o, &sample), &w) in out.iter_mut().zip(block.iter()).zip(self.window.iter()) {
            let windowed = sample * w;
            let smoothed = (self.previous_sample + windowed) / 2.0;
            self.previous_sample = smoothed;

            let clamped = (smoothed * gain).clamp(-1.0, 1.0);
            *o = (clamped * i16::MAX as f32).round() as i16;
        }
    }

    /// Reset smoothing state, e.g. when a stream restarts from silence.
    pub fn reset(&mut self) {
        self.previous_sample = 0.0;
    }
}

impl Default for OutputFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_toward_positive_full_scale() {
        let mut filter = OutputFilter::new();
        let block = vec![1.0f32; BUFFER_SIZE];
        let mut out = vec![0i16; BUFFER_SIZE];

        filter.process(&block, 1.0, &mut out);

        // Mid-block the window is ~1.0 and smoothing has converged, so the
        // quantized output approaches i16::MAX.
        assert!(out[512] > 32_700, "expected near full scale, got {}", out[512]);
    }

    #[test]
    fn converges_toward_negative_full_scale() {
        let mut filter = OutputFilter::new();
        let block = vec![-1.0f32; BUFFER_SIZE];
        let mut out = vec![0i16; BUFFER_SIZE];

        filter.process(&block, 1.0, &mut out);

        assert!(out[512] < -32_700, "expected near full scale, got {}", out[512]);
    }

    #[test]
    fn clamp_bounds_output_for_any_gain() {
        let mut filter = OutputFilter::new();
        let block = vec![1.0f32; BUFFER_SIZE];
        let mut out = vec![0i16; BUFFER_SIZE];

        filter.process(&block, 1_000.0, &mut out);

        assert!(out.iter().all(|&s| s.unsigned_abs() <= 32_767));
    }

    #[test]
    fn window_silences_block_edges() {
        let mut filter = OutputFilter::new();
        let block = vec![1.0f32; BUFFER_SIZE];
        let mut out = vec![0i16; BUFFER_SIZE];

        filter.process(&block, 1.0, &mut out);

        // First sample: window is 0, previous is 0 -> exact silence.
        assert_eq!(out[0], 0);
    }

    #[test]
    fn smoothing_halves_step_toward_input() {
        let mut filter = OutputFilter::new();
        let block = vec![1.0f32; BUFFER_SIZE];
        let mut out = vec![0i16; BUFFER_SIZE];

        filter.process(&block, 1.0, &mut out);

        // Second sample: windowed input is ~0 at the block edge, so the
        // smoothed value is half the first sample's (near-zero) output.
        // Deep in the block the IIR has converged to the windowed input.
        let mid = out[512] as f32 / i16::MAX as f32;
        let expected = 0.5 * (1.0 - (core::f32::consts::TAU * 512.0 / 1023.0).cos());
        assert!((mid - expected).abs() < 0.01, "expected ~{expected}, got {mid}");
    }

    #[test]
    fn reset_clears_smoothing_state() {
        let mut filter = OutputFilter::new();
        let loud = vec![1.0f32; BUFFER_SIZE];
        let silent = vec![0.0f32; BUFFER_SIZE];
        let mut out = vec![0i16; BUFFER_SIZE];

        filter.process(&loud, 1.0, &mut out);
        filter.reset();
        filter.process(&silent, 1.0, &mut out);

        assert!(out.iter().all(|&s| s == 0));
    }
}
