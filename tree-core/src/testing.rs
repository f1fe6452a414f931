//! Deterministic random sources for tests.

use rand::RngCore;

/// A generator whose every output is zero, so every uniform draw lands on
/// the bottom of its range.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

/// A generator whose every output is all ones, so every uniform draw
/// lands on the top of its range.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxRng;

impl RngCore for MaxRng {
    fn next_u32(&mut self) -> u32 {
        u32::MAX
    }

    fn next_u64(&mut self) -> u64 {
        u64::MAX
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0xff);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn zero_rng_draws_range_minimum() {
        let mut rng = ZeroRng;
        assert_eq!(rng.random_range(0..=10u64), 0);
        assert_eq!(rng.random_range(3..=10u64), 3);
    }

    #[test]
    fn max_rng_draws_range_maximum() {
        let mut rng = MaxRng;
        assert_eq!(rng.random_range(0..=10u64), 10);
        assert_eq!(rng.random_range(0..=0u64), 0);
    }
}
