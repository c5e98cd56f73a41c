//! Per-tick waveform node surface consumed by the host's graph evaluation.
//!
//! Nodes wrap the low-level DSP primitives with the conventions the host
//! expects: every block argument is validated to be exactly `BUFFER_SIZE`
//! samples, and every waveform output is a freshly allocated block.

/// ADSR node driven by a per-tick gate boolean.
pub mod envelope;
/// Block length validation shared by all nodes.
pub mod node;
/// Pure element-wise operators: multiply, add (mean mix), fill.
pub mod ops;
/// Stateful sine wave node.
pub mod oscillator;
/// Fire-and-forget audio output node.
pub mod output;

/// A waveform block: `BUFFER_SIZE` mono float samples.
pub type Block = Vec<f32>;
