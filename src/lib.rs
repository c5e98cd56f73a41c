pub mod dsp;
pub mod graph; // Per-tick waveform node surface
pub mod stream; // PCM queue, drainer, device sink
pub mod synth; // Filter -> queue -> drain orchestration

/// Samples per block, the unit of data passed between nodes.
pub const BUFFER_SIZE: usize = 1024;
/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44_100;
/// Drain passes performed on every play/write/tick trigger.
pub const DRAIN_PASSES: usize = 3;

/// Spatial position of the emitter, carried to the sink but not rendered here.
pub type Position = [f32; 3];
