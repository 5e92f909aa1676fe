//! Core type and trait definitions for the evolutionary engine.
//!
//! [`Lifeform`] is the unit of a population. [`Evaluator`] and
//! [`FitnessTransform`] are the two seams through which a consumer plugs
//! domain logic into the otherwise layout-agnostic engine.

use crate::codec::GenomeReader;
use crate::error::BoxError;

/// Fixed-length byte genome.
pub type Genome = Vec<u8>;

/// A scored individual.
///
/// `evaluation` is the raw score returned by the [`Evaluator`]. `fitness` is
/// derived from it by the population's [`FitnessTransform`] relative to the
/// evaluation bounds of its own generation, and is never set by callers.
#[derive(Debug, Clone, PartialEq)]
pub struct Lifeform {
    pub(crate) genes: Genome,
    pub(crate) evaluation: f64,
    pub(crate) fitness: f64,
    pub(crate) parents: Option<(usize, usize)>,
}

impl Lifeform {
    pub(crate) fn unscored(genes: Genome, evaluation: f64) -> Self {
        Self {
            genes,
            evaluation,
            fitness: 0.0,
            parents: None,
        }
    }

    pub fn genes(&self) -> &[u8] {
        &self.genes
    }

    /// A fresh read cursor over this individual's genome.
    pub fn reader(&self) -> GenomeReader<'_> {
        GenomeReader::new(&self.genes)
    }

    /// Raw score from the evaluator.
    pub fn evaluation(&self) -> f64 {
        self.evaluation
    }

    /// Normalized fitness; higher means more likely to reproduce.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Indices of mother and father in the previous generation.
    ///
    /// `None` for individuals of an initial population.
    pub fn parents(&self) -> Option<(usize, usize)> {
        self.parents
    }

    /// Consumes the lifeform and returns its genome.
    pub fn into_genes(self) -> Genome {
        self.genes
    }
}

/// Scores a genome.
///
/// Must be deterministic and must not depend on anything but the genome, so
/// that a seeded run is reproducible. Errors abort the run; the engine never
/// retries or substitutes a default score.
///
/// Implemented for closures of the same shape:
///
/// ```
/// use genepool::codec::GenomeReader;
/// use genepool::error::BoxError;
/// use genepool::ga::Evaluator;
///
/// let sum_of_bytes = |reader: &mut GenomeReader<'_>| -> Result<f64, BoxError> {
///     Ok(reader.genome().iter().map(|&b| b as f64).sum())
/// };
/// let genome = [1u8, 2, 3];
/// assert_eq!(sum_of_bytes.evaluate(&mut GenomeReader::new(&genome)).unwrap(), 6.0);
/// ```
pub trait Evaluator {
    /// Returns the raw evaluation of the genome behind `reader`.
    fn evaluate(&self, reader: &mut GenomeReader<'_>) -> Result<f64, BoxError>;
}

impl<F> Evaluator for F
where
    F: Fn(&mut GenomeReader<'_>) -> Result<f64, BoxError>,
{
    fn evaluate(&self, reader: &mut GenomeReader<'_>) -> Result<f64, BoxError> {
        self(reader)
    }
}

/// Maps a raw evaluation to fitness given the generation's evaluation bounds.
///
/// Must be monotonic so that better individuals get higher fitness, and must
/// return finite values for finite inputs. Selection assumes non-negative
/// fitness.
pub trait FitnessTransform {
    fn fitness(&self, evaluation: f64, min: f64, max: f64) -> f64;
}

impl<F> FitnessTransform for F
where
    F: Fn(f64, f64, f64) -> f64,
{
    fn fitness(&self, evaluation: f64, min: f64, max: f64) -> f64 {
        self(evaluation, min, max)
    }
}

/// `fitness = max - evaluation`.
///
/// The transform for lower-is-better evaluations such as an error metric:
/// the best individual of a generation gets `max - min`, the worst gets 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvertedEvaluation;

impl FitnessTransform for InvertedEvaluation {
    fn fitness(&self, evaluation: f64, _min: f64, max: f64) -> f64 {
        max - evaluation
    }
}

/// `fitness = evaluation - min`.
///
/// The transform for higher-is-better evaluations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftedEvaluation;

impl FitnessTransform for ShiftedEvaluation {
    fn fitness(&self, evaluation: f64, min: f64, _max: f64) -> f64 {
        evaluation - min
    }
}
