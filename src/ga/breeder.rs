//! Offspring production.
//!
//! [`Breeder`] bundles the three genetic operators with the retry cap that
//! bounds their rejection-sampling loops.

use super::crossover::{PivotCrossover, Recombinator};
use super::mutation::{BitFlipMutation, Mutator};
use super::selection::{ParentSelector, RouletteWheel};
use super::types::{Genome, Lifeform};
use crate::error::{EvolutionError, Result};
use rand::Rng;

/// Default cap on draws per child.
pub const DEFAULT_RETRY_LIMIT: usize = 10_000;

/// Selection, recombination and mutation for one run.
///
/// Producing a child involves two rejection-sampling loops:
///
/// 1. The father is redrawn until it is a different individual than the
///    mother.
/// 2. Recombination followed by mutation is redrawn until the child differs
///    byte for byte from both parents.
///
/// Both loops give up after `retry_limit` draws and report
/// [`EvolutionError::Stagnated`]. That happens when fewer than two individuals
/// have positive fitness, or when the population has collapsed onto (nearly)
/// one genome.
///
/// # Examples
///
/// ```
/// use genepool::codec::{FieldKind, GeneLayout};
/// use genepool::ga::{BitFlipMutation, Breeder, FeatureCrossover, RouletteWheel};
///
/// let triangle = GeneLayout::new()
///     .with_fields(FieldKind::U8, 3)
///     .with_fields(FieldKind::U16, 6);
/// let breeder = Breeder::new(
///     RouletteWheel,
///     FeatureCrossover::new(triangle),
///     BitFlipMutation::new(),
/// )
/// .with_retry_limit(500);
/// assert!(breeder.validate(150).is_ok());
/// assert!(breeder.validate(151).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breeder<S, X, M> {
    pub selector: S,
    pub recombinator: X,
    pub mutator: M,
    pub retry_limit: usize,
}

impl Default for Breeder<RouletteWheel, PivotCrossover, BitFlipMutation> {
    fn default() -> Self {
        Self::new(RouletteWheel, PivotCrossover, BitFlipMutation::new())
    }
}

impl<S, X, M> Breeder<S, X, M>
where
    S: ParentSelector,
    X: Recombinator,
    M: Mutator,
{
    pub fn new(selector: S, recombinator: X, mutator: M) -> Self {
        Self {
            selector,
            recombinator,
            mutator,
            retry_limit: DEFAULT_RETRY_LIMIT,
        }
    }

    pub fn with_retry_limit(mut self, n: usize) -> Self {
        self.retry_limit = n;
        self
    }

    /// Checks the retry cap and that the recombinator accepts `genome_length`.
    pub fn validate(&self, genome_length: usize) -> Result<()> {
        if self.retry_limit == 0 {
            return Err(EvolutionError::InvalidConfig(
                "retry_limit must be at least 1".into(),
            ));
        }
        self.recombinator.check_length(genome_length)
    }

    /// Picks a mother and a distinct father.
    ///
    /// `generation` and `individual` only label the error.
    pub fn select_parents<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        total_fitness: f64,
        population: &[Lifeform],
        generation: usize,
        individual: usize,
    ) -> Result<(usize, usize)> {
        let mother = self.selector.select(rng, total_fitness, population);
        for _ in 0..self.retry_limit {
            let father = self.selector.select(rng, total_fitness, population);
            if father != mother {
                return Ok((mother, father));
            }
        }
        Err(EvolutionError::Stagnated {
            generation,
            individual,
            attempts: self.retry_limit,
        })
    }

    /// Recombines and mutates until the child differs from both parents.
    pub fn breed<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        mother: &[u8],
        father: &[u8],
        generation: usize,
        individual: usize,
    ) -> Result<Genome> {
        for _ in 0..self.retry_limit {
            let mut child = self.recombinator.recombine(rng, mother, father)?;
            if child.len() != mother.len() {
                return Err(EvolutionError::InvalidConfig(format!(
                    "recombination changed genome length from {} to {}",
                    mother.len(),
                    child.len()
                )));
            }
            self.mutator.mutate(rng, &mut child);
            if child != mother && child != father {
                return Ok(child);
            }
        }
        Err(EvolutionError::Stagnated {
            generation,
            individual,
            attempts: self.retry_limit,
        })
    }
}
