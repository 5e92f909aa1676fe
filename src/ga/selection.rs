//! Parent selection.
//!
//! Selection decides which individuals of the current generation become
//! parents. All strategies assume **maximization** of normalized fitness.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Lifeform;
use crate::random::{draw_below, draw_unit};
use rand::Rng;

/// Chooses a parent index from a scored population.
///
/// `total_fitness` is the population's fitness sum, computed once per
/// generation by the caller rather than on every call.
///
/// Implementations must return a valid index and must not consume entropy
/// from anywhere but `rng`.
pub trait ParentSelector {
    fn select<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        total_fitness: f64,
        population: &[Lifeform],
    ) -> usize;
}

/// Fitness-proportionate (roulette wheel) selection.
///
/// Draws `offset = u * total_fitness` with `u` uniform in `[0, 1)`, then walks
/// the population in order subtracting each fitness until the offset turns
/// negative. Floating-point leftovers fall through to the last index.
///
/// When `total_fitness` is not a positive finite number, e.g. a generation in
/// which every evaluation is equal, the wheel has no area and the index is
/// drawn uniformly instead.
///
/// # Complexity
/// O(n) per selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouletteWheel;

impl ParentSelector for RouletteWheel {
    /// # Panics
    /// Panics if `population` is empty.
    fn select<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        total_fitness: f64,
        population: &[Lifeform],
    ) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        if !(total_fitness > 0.0 && total_fitness.is_finite()) {
            return draw_below(rng, population.len());
        }

        let mut offset = draw_unit(rng) * total_fitness;
        for (i, lf) in population.iter().enumerate() {
            offset -= lf.fitness;
            if offset < 0.0 {
                return i;
            }
        }

        population.len() - 1
    }
}
