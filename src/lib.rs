//! Generic evolutionary engine over fixed-length byte genomes.
//!
//! - **Codec**: Little-endian reader and writer cursors for `u8`, `u16` and
//!   `f64` fields, plus [`GeneLayout`](codec::GeneLayout) for describing
//!   repeated field groups.
//! - **GA**: Fitness normalization, roulette-wheel selection, bit-pivot and
//!   feature-group crossover, geometric bit-flip mutation, and a
//!   generational population with a run driver.
//!
//! # Architecture
//!
//! The engine knows nothing about what a genome means. Domain logic enters
//! through two seams, [`ga::Evaluator`] and [`ga::FitnessTransform`], and
//! every random decision is drawn from one caller-owned `rand::Rng`, so a
//! seeded run is reproducible end to end.

pub mod codec;
pub mod error;
pub mod ga;
pub mod random;
