// crates/hb_core/src/rng.rs
//
// Deterministic, integer-only RNG for demo occupancy generation.
// Focus: unbiased range generation, stable seeding, word accounting.
//
// The allocation engine never draws from this stream; only the occupancy
// generator in hb_pipeline does. Same seed, same rooms occupied.

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

/// Seeded RNG for occupancy draws.
///
/// Internally uses ChaCha20 with an explicit 32-byte seed derived from the
/// 64-bit seed (little-endian bytes in the first 8 positions; the rest 0).
/// This keeps the mapping stable across platforms.
#[derive(Debug, Clone)]
pub struct OccupancyRng {
    rng: ChaCha20Rng,
    words_consumed: u128,
}

impl OccupancyRng {
    #[inline]
    pub fn from_seed_u64(seed: u64) -> Self {
        let mut seed32 = [0u8; 32];
        seed32[..8].copy_from_slice(&seed.to_le_bytes());
        Self {
            rng: ChaCha20Rng::from_seed(seed32),
            words_consumed: 0,
        }
    }

    /// Total number of 64-bit words drawn so far (saturating).
    #[inline]
    pub fn words_consumed(&self) -> u128 {
        self.words_consumed
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.words_consumed = self.words_consumed.saturating_add(1);
        self.rng.next_u64()
    }

    /// Unbiased integer in `[0, n)`; `None` if `n == 0`.
    ///
    /// Let `threshold = 2^64 mod n`. Accept `x` if `x >= threshold`; then
    /// `x % n` is uniformly distributed.
    #[inline]
    pub fn gen_range(&mut self, n: u64) -> Option<u64> {
        if n == 0 {
            return None;
        }
        let threshold = n.wrapping_neg() % n;
        loop {
            let x = self.next_u64();
            if x >= threshold {
                return Some(x % n);
            }
        }
    }

    /// Unbiased integer in `[lo, hi]`; `None` if `lo > hi`.
    #[inline]
    pub fn gen_range_inclusive(&mut self, lo: u64, hi: u64) -> Option<u64> {
        if lo > hi {
            return None;
        }
        let span = hi - lo;
        if span == u64::MAX {
            return Some(self.next_u64());
        }
        self.gen_range(span + 1).map(|v| lo + v)
    }

    /// Fisher–Yates: for i in (1..len).rev() { j ~ U{0..=i}; swap(i, j) }
    pub fn shuffle_in_place<T>(&mut self, slice: &mut [T]) {
        let len = slice.len();
        if len <= 1 {
            return;
        }
        for i in (1..len).rev() {
            if let Some(j) = self.gen_range(i as u64 + 1) {
                slice.swap(i, j as usize);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gen_range_zero_none() {
        let mut rng = OccupancyRng::from_seed_u64(0xDEAD_BEEF_CAFE_BABE);
        assert_eq!(rng.gen_range(0), None);
        assert_eq!(rng.words_consumed(), 0);
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = OccupancyRng::from_seed_u64(123_456_789);
        let mut b = OccupancyRng::from_seed_u64(123_456_789);
        let seq_a: Vec<u64> = (0..16).map(|_| a.gen_range(10).unwrap()).collect();
        let seq_b: Vec<u64> = (0..16).map(|_| b.gen_range(10).unwrap()).collect();
        assert_eq!(seq_a, seq_b);
        assert!(seq_a.iter().all(|&v| v < 10));
    }

    #[test]
    fn inclusive_range_bounds() {
        let mut rng = OccupancyRng::from_seed_u64(7);
        assert_eq!(rng.gen_range_inclusive(5, 4), None);
        assert_eq!(rng.gen_range_inclusive(9, 9), Some(9));
        for _ in 0..64 {
            let v = rng.gen_range_inclusive(30, 60).unwrap();
            assert!((30..=60).contains(&v));
        }
    }

    #[test]
    fn shuffle_is_deterministic_permutation() {
        let mut a = OccupancyRng::from_seed_u64(42);
        let mut b = OccupancyRng::from_seed_u64(42);
        let mut xs: Vec<u32> = (0..16).collect();
        let mut ys: Vec<u32> = (0..16).collect();
        a.shuffle_in_place(&mut xs);
        b.shuffle_in_place(&mut ys);
        assert_eq!(xs, ys);

        let mut sorted = xs.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..16).collect::<Vec<u32>>());
    }
}
