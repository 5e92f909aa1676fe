//! Mutation operators for byte genomes.
//!
//! Mutation is the one operator that works in place: it receives the child
//! just produced by recombination and may flip bits in it directly.

use crate::random::draw_below;
use rand::Rng;

/// Perturbs a genome in place.
pub trait Mutator {
    fn mutate<R: Rng + ?Sized>(&self, rng: &mut R, genome: &mut [u8]);
}

/// Flips one bit of `genome` at `int % len`, bit `int % 9`.
///
/// Bit 8 produces an empty mask, so one draw in nine is a no-op flip.
fn flip_random_bit<R: Rng + ?Sized>(rng: &mut R, genome: &mut [u8]) {
    let pivot_byte = draw_below(rng, genome.len());
    let pivot_bit = draw_below(rng, 9);
    genome[pivot_byte] ^= 1u8.checked_shl(pivot_bit as u32).unwrap_or(0);
}

/// Geometric cascade of single-bit flips.
///
/// Each round first tosses a coin (`int % 2 != 0` stops). Otherwise one
/// random bit is flipped and the next round starts, so the number of flips
/// per call is geometrically distributed with mean 1. The sparse variant
/// tosses a second coin per round and only flips on odd, halving the
/// expected number of flips.
///
/// The cascade is capped at `max_flips` rounds; by default the cap equals
/// the genome length.
///
/// # Examples
///
/// ```
/// use genepool::ga::{BitFlipMutation, Mutator};
/// use genepool::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let mut genome = vec![0u8; 16];
/// BitFlipMutation::new().mutate(&mut rng, &mut genome);
/// assert_eq!(genome.len(), 16);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitFlipMutation {
    sparse: bool,
    max_flips: Option<usize>,
}

impl BitFlipMutation {
    pub fn new() -> Self {
        Self::default()
    }

    /// The variant that skips the flip on half of the continuing rounds.
    pub fn sparse() -> Self {
        Self {
            sparse: true,
            ..Self::default()
        }
    }

    /// Caps the cascade at `max_flips` rounds instead of the genome length.
    pub fn with_max_flips(mut self, max_flips: usize) -> Self {
        self.max_flips = Some(max_flips);
        self
    }

    pub fn is_sparse(&self) -> bool {
        self.sparse
    }
}

impl Mutator for BitFlipMutation {
    fn mutate<R: Rng + ?Sized>(&self, rng: &mut R, genome: &mut [u8]) {
        if genome.is_empty() {
            return;
        }

        let rounds = self.max_flips.unwrap_or(genome.len());
        for _ in 0..rounds {
            if draw_below(rng, 2) != 0 {
                return;
            }
            if self.sparse && draw_below(rng, 2) == 0 {
                continue;
            }
            flip_random_bit(rng, genome);
        }
    }
}

/// Leaves every genome untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoMutation;

impl Mutator for NoMutation {
    fn mutate<R: Rng + ?Sized>(&self, _rng: &mut R, _genome: &mut [u8]) {}
}
