//! Fitness normalization.
//!
//! Fitness is always relative to one generation: the transform sees each
//! raw evaluation together with the minimum and maximum evaluation of the
//! same generation.

use super::types::{FitnessTransform, Lifeform};

/// Minimum and maximum evaluation over `lifeforms` in one scan.
///
/// Returns `(+inf, -inf)` for an empty slice.
pub fn evaluation_bounds(lifeforms: &[Lifeform]) -> (f64, f64) {
    lifeforms
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), lf| {
            (min.min(lf.evaluation), max.max(lf.evaluation))
        })
}

/// Assigns `fitness = transform(evaluation, min, max)` to every lifeform.
///
/// When all evaluations are equal, `min == max` and every individual gets
/// the same fitness.
pub fn normalize<T: FitnessTransform + ?Sized>(lifeforms: &mut [Lifeform], transform: &T) {
    let (min, max) = evaluation_bounds(lifeforms);
    for lf in lifeforms.iter_mut() {
        lf.fitness = transform.fitness(lf.evaluation, min, max);
    }
}

/// Sum of fitness in population order.
pub fn total_fitness(lifeforms: &[Lifeform]) -> f64 {
    lifeforms.iter().map(|lf| lf.fitness).sum()
}
