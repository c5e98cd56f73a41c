use crate::BUFFER_SIZE;

/// Reject blocks that are not exactly `BUFFER_SIZE` samples long.
///
/// Cooperating nodes all produce and consume fixed-length blocks; a
/// mismatch is a programming error in the graph wiring, caught here at the
/// boundary rather than propagated as a recoverable error.
#[inline]
pub fn check_block(block: &[f32]) {
    assert_eq!(
        block.len(),
        BUFFER_SIZE,
        "waveform block must be exactly {BUFFER_SIZE} samples, got {}",
        block.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_block() {
        check_block(&vec![0.0; BUFFER_SIZE]);
    }

    #[test]
    #[should_panic(expected = "must be exactly")]
    fn rejects_short_block() {
        check_block(&[0.0; 512]);
    }
}
