//! Number generators that supply die values.
//!
//! The engine never owns randomness. Every resolution receives a
//! [`NumberGenerator`] and draws from it exactly as many values as the
//! resolution needs (two per contested roll, none otherwise).
//!
//! - [`StreamNumberGenerator`] replays a scripted sequence verbatim (tests,
//!   replays of recorded battles).
//! - [`SeededNumberGenerator`] is a deterministic PCG stream keyed by a seed.
//! - [`RandomNumberGenerator`] draws from the operating system's entropy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::combat::CombatError;

/// Source of die values.
pub trait NumberGenerator {
    /// Draw the next value, nominally in `[min, max]` inclusive.
    ///
    /// Scripted implementations may return out-of-range values; the roll
    /// resolver rejects those as faults.
    fn next(&mut self, min: u32, max: u32) -> Result<u32, CombatError>;
}

/// Replays a pre-scripted sequence of values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StreamNumberGenerator {
    values: Vec<u32>,
    cursor: usize,
}

impl StreamNumberGenerator {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Values handed out so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }

    /// Values still waiting to be drawn.
    pub fn remaining(&self) -> usize {
        self.values.len() - self.cursor
    }
}

impl NumberGenerator for StreamNumberGenerator {
    fn next(&mut self, _min: u32, _max: u32) -> Result<u32, CombatError> {
        let value = self
            .values
            .get(self.cursor)
            .copied()
            .ok_or(CombatError::NumberStreamExhausted {
                drawn: self.cursor,
            })?;
        self.cursor += 1;
        Ok(value)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses PCG-XSH-RR, producing 32-bit output from 64-bit state. Same seed,
/// same sequence of die values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeededNumberGenerator {
    state: u64,
}

impl SeededNumberGenerator {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

impl NumberGenerator for SeededNumberGenerator {
    fn next(&mut self, min: u32, max: u32) -> Result<u32, CombatError> {
        if min >= max {
            return Ok(min);
        }
        let range = max - min + 1;
        Ok(min + (self.next_u32() % range))
    }
}

/// Genuinely random generator for live play.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    rng: StdRng,
}

impl RandomNumberGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberGenerator for RandomNumberGenerator {
    fn next(&mut self, min: u32, max: u32) -> Result<u32, CombatError> {
        if min >= max {
            return Ok(min);
        }
        Ok(self.rng.gen_range(min..=max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_replays_values_in_order_then_faults() {
        let mut stream = StreamNumberGenerator::new([1, 6, 9]);
        assert_eq!(stream.next(1, 6), Ok(1));
        assert_eq!(stream.next(1, 6), Ok(6));
        // Out-of-range values are replayed verbatim; the resolver rejects them.
        assert_eq!(stream.next(1, 6), Ok(9));
        assert_eq!(stream.remaining(), 0);
        assert_eq!(
            stream.next(1, 6),
            Err(CombatError::NumberStreamExhausted { drawn: 3 })
        );
    }

    #[test]
    fn seeded_generator_is_deterministic_and_in_range() {
        let mut first = SeededNumberGenerator::new(42);
        let mut second = SeededNumberGenerator::new(42);
        for _ in 0..200 {
            let a = first.next(1, 6);
            assert_eq!(a, second.next(1, 6));
            let value = a.unwrap_or(0);
            assert!((1..=6).contains(&value));
        }
    }

    #[test]
    fn seeded_generator_covers_every_face() {
        let mut generator = SeededNumberGenerator::new(7);
        let mut seen = [false; 6];
        for _ in 0..500 {
            if let Ok(value) = generator.next(1, 6) {
                seen[(value - 1) as usize] = true;
            }
        }
        assert!(seen.iter().all(|&face| face));
    }

    #[test]
    fn random_generator_stays_in_range() {
        let mut generator = RandomNumberGenerator::new();
        for _ in 0..200 {
            let value = generator.next(1, 6).unwrap_or(0);
            assert!((1..=6).contains(&value));
        }
    }

    #[test]
    fn degenerate_range_returns_min() {
        assert_eq!(RandomNumberGenerator::new().next(3, 3), Ok(3));
        assert_eq!(SeededNumberGenerator::new(1).next(4, 2), Ok(4));
    }
}
