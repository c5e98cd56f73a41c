//! Pure element-wise waveform operators.

use crate::dsp::block;
use crate::graph::node::check_block;
use crate::graph::Block;
use crate::BUFFER_SIZE;

/// Multiply two waveforms element-wise.
pub fn multiply(a: &[f32], b: &[f32]) -> Block {
    check_block(a);
    check_block(b);

    let mut out = vec![0.0; BUFFER_SIZE];
    block::multiply(a, b, &mut out);
    out
}

/// Combine two waveforms by taking the element-wise mean.
///
/// Halves the combined amplitude instead of summing, so mixed full-scale
/// signals stay inside [-1, 1]. This headroom policy is intentional; use it
/// knowing a signal mixed with silence comes out 6 dB quieter.
pub fn add(a: &[f32], b: &[f32]) -> Block {
    check_block(a);
    check_block(b);

    let mut out = vec![0.0; BUFFER_SIZE];
    block::mean_mix(a, b, &mut out);
    out
}

/// Broadcast a scalar into a full waveform block.
pub fn fill(value: f32) -> Block {
    let mut out = vec![0.0; BUFFER_SIZE];
    block::fill(&mut out, value);
    out
}
