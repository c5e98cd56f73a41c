//! Low-level DSP primitives used by the higher level graph nodes.
//!
//! These components are allocation-free and realtime-safe. They stay focused
//! on the signal-processing math; the `graph` module layers block validation
//! and per-tick ergonomics on top.

/// Stateless element-wise block arithmetic.
pub mod block;
/// Attack/decay/sustain/release envelope generator.
pub mod envelope;
/// Windowing, smoothing, gain, and int16 quantization.
pub mod filter;
/// Sine oscillator with per-instance or shared phase.
pub mod oscillator;
/// Hanning window generation.
pub mod window;

pub use envelope::EnvelopeState;
