//! Hanning window generation.

use std::f32::consts::TAU;

/// Generate a Hanning window of the given size.
///
/// w[i] = 0.5 * (1 - cos(2π·i / (size - 1)))
///
/// The window is zero at both endpoints and peaks at 1.0 in the center.
/// Applied per block it tapers the edges so consecutive blocks meet at
/// silence instead of an arbitrary amplitude, trading true signal level
/// for fewer pops and clicks at block boundaries.
pub fn hanning(size: usize) -> Vec<f32> {
    let denom = (size - 1) as f32;
    (0..size)
        .map(|i| 0.5 * (1.0 - (TAU * i as f32 / denom).cos()))
        .collect()
}
