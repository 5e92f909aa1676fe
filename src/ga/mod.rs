//! Genetic algorithm over fixed-length byte genomes.
//!
//! A generational GA in which every individual is a byte string of the same
//! length. The engine never interprets those bytes: consumers score them
//! through an [`Evaluator`] (usually by decoding fields with a
//! [`GenomeReader`](crate::codec::GenomeReader)) and map raw evaluations to
//! fitness with a [`FitnessTransform`].
//!
//! # Core Traits
//!
//! - [`Evaluator`]: Genome → raw evaluation
//! - [`FitnessTransform`]: Raw evaluation → fitness relative to the generation
//! - [`ParentSelector`], [`Recombinator`], [`Mutator`]: Genetic operators
//!
//! # Key Types
//!
//! - [`EvolutionConfig`]: Run parameters (sizes, generations, seed, presets)
//! - [`Breeder`]: Operator bundle plus the rejection-sampling retry cap
//! - [`Population`]: One generation; [`Population::evolve`] produces the next
//! - [`EvolutionRunner`]: Executes the evolutionary loop
//! - [`EvolutionResult`]: Final population, champions and statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod breeder;
mod config;
mod crossover;
pub mod fitness;
mod mutation;
mod population;
mod runner;
mod selection;
mod types;

pub use breeder::{Breeder, DEFAULT_RETRY_LIMIT};
pub use config::{EvolutionConfig, MIN_POPULATION_SIZE};
pub use crossover::{FeatureCrossover, PivotCrossover, Recombinator};
pub use mutation::{BitFlipMutation, Mutator, NoMutation};
pub use population::Population;
pub use runner::{EvolutionResult, EvolutionRunner, GenerationStats};
pub use selection::{ParentSelector, RouletteWheel};
pub use types::{
    Evaluator, FitnessTransform, Genome, InvertedEvaluation, Lifeform, ShiftedEvaluation,
};
