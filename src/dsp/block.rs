//! Stateless element-wise operations over sample blocks.

/*
Block Arithmetic
================

These are the pure combinators of the node graph. Each output sample depends
only on the input samples at the same index - no memory, no phase, no state.

  multiply    output[i] = a[i] * b[i]
              Amplitude control: envelope x oscillator, tremolo, ring mod.

  mean_mix    output[i] = (a[i] + b[i]) / 2
              Combines two signals at half level each. A straight sum of two
              full-scale signals can reach 2.0 and clip downstream; averaging
              keeps the result inside [-1.0, +1.0] whenever both inputs are.
              The cost is that a signal mixed with silence drops 6 dB. This
              is a deliberate headroom policy, not an oversight.

  fill        output[i] = v for every i
              Broadcasts a scalar control value (a knob position, a constant
              frequency) into a full block so it can feed block-rate inputs.
*/

/// Multiply two signal buffers sample-by-sample.
///
/// # Panics
/// Debug builds assert that all three slices have the same length.
#[inline]
pub fn multiply(a: &[f32], b: &[f32], out: &mut [f32]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());

    for ((o, &sa), &sb) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
        *o = sa * sb;
    }
}

/// Mix two signals by averaging them sample-by-sample.
///
/// output = (a + b) / 2 - halves combined amplitude rather than summing,
/// so two in-range inputs always produce an in-range output.
#[inline]
pub fn mean_mix(a: &[f32], b: &[f32], out: &mut [f32]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());

    for ((o, &sa), &sb) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
        *o = (sa + sb) / 2.0;
    }
}

/// Broadcast a scalar into every sample of the buffer.
#[inline]
pub fn fill(out: &mut [f32], value: f32) {
    for sample in out.iter_mut() {
        *sample = value;
    }
}
