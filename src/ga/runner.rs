//! Evolutionary loop execution.
//!
//! [`EvolutionRunner`] drives a run from generation 0 to
//! `max_generations`: random initialization → evaluation → normalization →
//! (selection → crossover → mutation → evaluation → normalization) → repeat.

use super::breeder::Breeder;
use super::config::EvolutionConfig;
use super::crossover::Recombinator;
use super::mutation::Mutator;
use super::population::Population;
use super::selection::ParentSelector;
use super::types::{Evaluator, FitnessTransform, Lifeform};
use crate::error::{EvolutionError, Result};
use crate::random::create_rng;
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Summary of one generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation number; 0 is the initial population.
    pub generation: usize,

    /// Raw evaluation of the fittest individual.
    pub champion_evaluation: f64,

    /// Normalized fitness of the fittest individual.
    pub champion_fitness: f64,

    pub mean_evaluation: f64,
    pub min_evaluation: f64,
    pub max_evaluation: f64,
    pub total_fitness: f64,
}

/// Result of an evolutionary run.
///
/// A run that fails after generation 0 still yields a result: everything up
/// to the last completed generation is kept and `error` holds the failure.
#[derive(Debug)]
pub struct EvolutionResult {
    /// The last generation completed.
    pub population: Population,

    /// Fittest individual of every generation, initial population first.
    pub champions: Vec<Lifeform>,

    /// Statistics of every generation, initial population first.
    pub history: Vec<GenerationStats>,

    /// Number of generational transitions performed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Failure that stopped the run before `max_generations`.
    pub error: Option<EvolutionError>,
}

impl EvolutionResult {
    /// Fittest individual of the last generation.
    pub fn champion(&self) -> &Lifeform {
        self.population.fittest()
    }

    /// Whether the run went through all generations or was cancelled
    /// without failing.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Turns a failed run into its error, dropping the partial results.
    pub fn into_result(self) -> Result<Self> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use genepool::codec::GenomeReader;
/// use genepool::error::BoxError;
/// use genepool::ga::{Breeder, EvolutionConfig, EvolutionRunner, InvertedEvaluation};
///
/// // Distance of every byte from 0xAA; lower is better.
/// let evaluator = |reader: &mut GenomeReader<'_>| -> Result<f64, BoxError> {
///     Ok(reader
///         .genome()
///         .iter()
///         .map(|&b| (b as f64 - 170.0).abs())
///         .sum())
/// };
/// let config = EvolutionConfig::quick().with_genome_length(4).with_seed(42);
/// let result = EvolutionRunner::run(
///     &config,
///     &Breeder::default(),
///     &evaluator,
///     &InvertedEvaluation,
/// )
/// .unwrap();
/// assert!(result.is_ok());
/// assert_eq!(result.generations, 10);
/// assert_eq!(result.history.len(), 11);
/// ```
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Runs a full evolution.
    ///
    /// The RNG is seeded from `config.seed`, or from the operating system
    /// when no seed is set.
    ///
    /// Returns `Err` only when nothing was completed: an invalid
    /// configuration or a failure while building generation 0. Later
    /// failures are reported in [`EvolutionResult::error`].
    pub fn run<S, X, M, E, T>(
        config: &EvolutionConfig,
        breeder: &Breeder<S, X, M>,
        evaluator: &E,
        transform: &T,
    ) -> Result<EvolutionResult>
    where
        S: ParentSelector,
        X: Recombinator,
        M: Mutator,
        E: Evaluator + ?Sized,
        T: FitnessTransform + ?Sized,
    {
        Self::run_with_cancel(config, breeder, evaluator, transform, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before starting the next generation and returns what it has so far.
    pub fn run_with_cancel<S, X, M, E, T>(
        config: &EvolutionConfig,
        breeder: &Breeder<S, X, M>,
        evaluator: &E,
        transform: &T,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<EvolutionResult>
    where
        S: ParentSelector,
        X: Recombinator,
        M: Mutator,
        E: Evaluator + ?Sized,
        T: FitnessTransform + ?Sized,
    {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => StdRng::from_os_rng(),
        };
        Self::run_with_rng(
            &mut rng,
            config,
            breeder,
            evaluator,
            transform,
            cancel.as_deref(),
        )
    }

    /// Runs with a caller-owned random source; `config.seed` is ignored.
    pub fn run_with_rng<R, S, X, M, E, T>(
        rng: &mut R,
        config: &EvolutionConfig,
        breeder: &Breeder<S, X, M>,
        evaluator: &E,
        transform: &T,
        cancel: Option<&AtomicBool>,
    ) -> Result<EvolutionResult>
    where
        R: Rng + ?Sized,
        S: ParentSelector,
        X: Recombinator,
        M: Mutator,
        E: Evaluator + ?Sized,
        T: FitnessTransform + ?Sized,
    {
        config.validate()?;
        breeder.validate(config.genome_length)?;

        let mut population = Population::random(rng, config, evaluator, transform)?;
        let mut champions = Vec::with_capacity(config.max_generations + 1);
        let mut history = Vec::with_capacity(config.max_generations + 1);
        record(&population, &mut champions, &mut history);

        let mut cancelled = false;
        let mut failure = None;
        for _ in 0..config.max_generations {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                warn!(
                    "evolution cancelled after {} generations",
                    population.generation()
                );
                cancelled = true;
                break;
            }

            match population.evolve(rng, breeder, evaluator, transform) {
                Ok(next) => population = next,
                Err(err) => {
                    error!(
                        "evolution stopped after {} generations: {err}",
                        population.generation()
                    );
                    failure = Some(err);
                    break;
                }
            }
            record(&population, &mut champions, &mut history);
        }

        Ok(EvolutionResult {
            generations: population.generation(),
            population,
            champions,
            history,
            cancelled,
            error: failure,
        })
    }
}

fn record(
    population: &Population,
    champions: &mut Vec<Lifeform>,
    history: &mut Vec<GenerationStats>,
) {
    let stats = population.stats();
    info!(
        "generation {}: champion evaluation={} fitness={} mean evaluation={}",
        stats.generation, stats.champion_evaluation, stats.champion_fitness, stats.mean_evaluation
    );
    champions.push(population.fittest().clone());
    history.push(stats);
}
