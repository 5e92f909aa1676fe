//! Populations and the generational transition.

use super::breeder::Breeder;
use super::config::{check_population_size, EvolutionConfig};
use super::crossover::Recombinator;
use super::fitness::{evaluation_bounds, normalize, total_fitness};
use super::mutation::Mutator;
use super::runner::GenerationStats;
use super::selection::ParentSelector;
use super::types::{Evaluator, FitnessTransform, Genome, Lifeform};
use crate::codec::GenomeReader;
use crate::error::{EvolutionError, Result};
use log::debug;
use rand::Rng;

/// One generation of scored individuals.
///
/// A population is an immutable snapshot: [`evolve`](Population::evolve)
/// returns a new population and leaves `self` untouched, so callers can keep
/// any earlier generation around. All genomes share one length and every
/// individual's fitness is normalized against this generation's evaluation
/// bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    lifeforms: Vec<Lifeform>,
    generation: usize,
}

/// Evaluates `genes` and wraps them into an unnormalized lifeform.
fn score<E: Evaluator + ?Sized>(
    evaluator: &E,
    genes: Genome,
    generation: usize,
    individual: usize,
) -> Result<Lifeform> {
    let evaluation = evaluator
        .evaluate(&mut GenomeReader::new(&genes))
        .map_err(|source| EvolutionError::Evaluation {
            generation,
            individual,
            source,
        })?;
    if !evaluation.is_finite() {
        return Err(EvolutionError::NonFiniteEvaluation {
            generation,
            individual,
            value: evaluation,
        });
    }
    Ok(Lifeform::unscored(genes, evaluation))
}

impl Population {
    /// Creates generation 0 from uniformly random genomes.
    ///
    /// Uses `config.genome_length` and `config.population_size`, which are
    /// validated first. The generation count is not consulted.
    pub fn random<R, E, T>(
        rng: &mut R,
        config: &EvolutionConfig,
        evaluator: &E,
        transform: &T,
    ) -> Result<Self>
    where
        R: Rng + ?Sized,
        E: Evaluator + ?Sized,
        T: FitnessTransform + ?Sized,
    {
        config.validate_shape()?;

        let mut lifeforms = Vec::with_capacity(config.population_size);
        for individual in 0..config.population_size {
            let mut genes = vec![0u8; config.genome_length];
            rng.fill_bytes(&mut genes);
            let lifeform = score(evaluator, genes, 0, individual)?;
            debug!(
                "generation 0: lifeform {individual} evaluation={}",
                lifeform.evaluation
            );
            lifeforms.push(lifeform);
        }
        normalize(&mut lifeforms, transform);

        Ok(Self {
            lifeforms,
            generation: 0,
        })
    }

    /// Creates generation 0 from caller-supplied genomes.
    ///
    /// Needs at least [`MIN_POPULATION_SIZE`](super::MIN_POPULATION_SIZE)
    /// genomes, all of the same non-zero length.
    pub fn from_genomes<E, T>(genomes: Vec<Genome>, evaluator: &E, transform: &T) -> Result<Self>
    where
        E: Evaluator + ?Sized,
        T: FitnessTransform + ?Sized,
    {
        check_population_size(genomes.len())?;
        let genome_length = genomes[0].len();
        if genome_length == 0 {
            return Err(EvolutionError::InvalidConfig(
                "genome_length must be at least 1".into(),
            ));
        }
        if let Some(i) = genomes.iter().position(|g| g.len() != genome_length) {
            return Err(EvolutionError::InvalidConfig(format!(
                "genome {i} has length {}, expected {genome_length}",
                genomes[i].len()
            )));
        }

        let mut lifeforms = genomes
            .into_iter()
            .enumerate()
            .map(|(i, genes)| score(evaluator, genes, 0, i))
            .collect::<Result<Vec<_>>>()?;
        normalize(&mut lifeforms, transform);

        Ok(Self {
            lifeforms,
            generation: 0,
        })
    }

    /// Produces the next generation.
    ///
    /// 1. Total fitness of `self` is computed once.
    /// 2. For each child slot: select a mother and a distinct father,
    ///    recombine and mutate until the child differs from both parents,
    ///    then evaluate it.
    /// 3. Once every child is evaluated, fitness is normalized against the
    ///    new generation's own evaluation bounds.
    ///
    /// Any evaluator failure, non-finite evaluation, codec error or retry
    /// exhaustion aborts the transition; `self` stays valid.
    pub fn evolve<R, S, X, M, E, T>(
        &self,
        rng: &mut R,
        breeder: &Breeder<S, X, M>,
        evaluator: &E,
        transform: &T,
    ) -> Result<Self>
    where
        R: Rng + ?Sized,
        S: ParentSelector,
        X: Recombinator,
        M: Mutator,
        E: Evaluator + ?Sized,
        T: FitnessTransform + ?Sized,
    {
        breeder.validate(self.genome_length())?;

        let generation = self.generation + 1;
        let total = self.total_fitness();
        let mut children = Vec::with_capacity(self.lifeforms.len());

        for individual in 0..self.lifeforms.len() {
            let (mother, father) =
                breeder.select_parents(rng, total, &self.lifeforms, generation, individual)?;
            let genes = breeder.breed(
                rng,
                &self.lifeforms[mother].genes,
                &self.lifeforms[father].genes,
                generation,
                individual,
            )?;

            let mut child = score(evaluator, genes, generation, individual)?;
            child.parents = Some((mother, father));
            debug!(
                "generation {generation}: lifeform {individual} from ({mother}, {father}) evaluation={}",
                child.evaluation
            );
            children.push(child);
        }

        normalize(&mut children, transform);

        Ok(Self {
            lifeforms: children,
            generation,
        })
    }

    /// The individual with the highest fitness; the first one wins ties.
    pub fn fittest(&self) -> &Lifeform {
        let mut best = &self.lifeforms[0];
        for lf in &self.lifeforms[1..] {
            if lf.fitness > best.fitness {
                best = lf;
            }
        }
        best
    }

    /// Sum of fitness, accumulated in population order.
    pub fn total_fitness(&self) -> f64 {
        total_fitness(&self.lifeforms)
    }

    /// `(min, max)` raw evaluation of this generation.
    pub fn evaluation_bounds(&self) -> (f64, f64) {
        evaluation_bounds(&self.lifeforms)
    }

    /// Summary of this generation.
    pub fn stats(&self) -> GenerationStats {
        let champion = self.fittest();
        let (min_evaluation, max_evaluation) = self.evaluation_bounds();
        let mean_evaluation = self.lifeforms.iter().map(|lf| lf.evaluation).sum::<f64>()
            / self.lifeforms.len() as f64;

        GenerationStats {
            generation: self.generation,
            champion_evaluation: champion.evaluation,
            champion_fitness: champion.fitness,
            mean_evaluation,
            min_evaluation,
            max_evaluation,
            total_fitness: self.total_fitness(),
        }
    }

    /// Generation number; 0 for an initial population.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn genome_length(&self) -> usize {
        self.lifeforms[0].genes.len()
    }

    pub fn len(&self) -> usize {
        self.lifeforms.len()
    }

    /// Always `false`; a population is never smaller than
    /// [`MIN_POPULATION_SIZE`](super::MIN_POPULATION_SIZE).
    pub fn is_empty(&self) -> bool {
        self.lifeforms.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Lifeform> {
        self.lifeforms.get(index)
    }

    pub fn lifeforms(&self) -> &[Lifeform] {
        &self.lifeforms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Lifeform> {
        self.lifeforms.iter()
    }

    pub fn into_lifeforms(self) -> Vec<Lifeform> {
        self.lifeforms
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Lifeform;
    type IntoIter = std::slice::Iter<'a, Lifeform>;

    fn into_iter(self) -> Self::IntoIter {
        self.lifeforms.iter()
    }
}
