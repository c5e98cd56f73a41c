//! blocksynth demo - plays one enveloped sine note on the default device.
//!
//! Run with: cargo run --bin blocksynth-demo

use std::thread;
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};

use blocksynth::graph::envelope::{AdsrNode, AdsrParams};
use blocksynth::graph::ops;
use blocksynth::graph::oscillator::SineNode;
use blocksynth::graph::output::OutputNode;
use blocksynth::stream::device::DeviceSink;
use blocksynth::{BUFFER_SIZE, SAMPLE_RATE};

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let sink = DeviceSink::open().wrap_err("could not open the default output device")?;
    let mut out = OutputNode::new(sink);
    let mut osc = SineNode::new();
    let mut env = AdsrNode::new();

    let params = AdsrParams {
        attack: 0.05,
        decay: 0.15,
        sustain: 0.6,
        release: 0.6,
    };

    let block_duration = Duration::from_secs_f64(BUFFER_SIZE as f64 / SAMPLE_RATE as f64);
    let blocks_per_second = SAMPLE_RATE as usize / BUFFER_SIZE;

    println!("Playing A4...");

    // One trigger pulse on the first tick, gate low afterwards: the envelope
    // runs attack and decay, and the first gate-low tick that finds it in
    // Sustain starts the release. Each iteration is one host tick - evaluate
    // the graph, hand the block to the output, sleep one block of wall time.
    for tick in 0..(2 * blocks_per_second) {
        let freq = ops::fill(440.0);
        let wave = osc.generate(&freq);
        let shaped = env.apply(tick == 0, &wave, params);
        out.output(&shaped, [0.0, 0.0, 0.0]);

        thread::sleep(block_duration);
    }

    println!("Done.");
    Ok(())
}
