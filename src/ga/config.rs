//! Run configuration.
//!
//! [`EvolutionConfig`] holds the shape of a run: genome and population sizes,
//! number of generations and the random seed. Operator choices and the
//! retry cap live on [`Breeder`](super::Breeder).

use crate::error::{EvolutionError, Result};

/// Smallest population that can breed.
///
/// Every child needs two distinct parents with positive fitness, and the
/// built-in transforms give the worst individual of a generation fitness 0.
/// With two individuals only one of them can ever be drawn.
pub const MIN_POPULATION_SIZE: usize = 3;

/// Configuration for an evolutionary run.
///
/// # Defaults
///
/// ```
/// use genepool::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.max_generations, 30);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use genepool::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_genome_length(150)
///     .with_population_size(50)
///     .with_max_generations(200)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Genome length in bytes, shared by every individual of a run.
    pub genome_length: usize,

    /// Number of individuals per generation.
    ///
    /// At least [`MIN_POPULATION_SIZE`]. Breeding further needs two
    /// individuals with positive fitness in every generation; a generation
    /// where all but one share the worst evaluation stagnates.
    pub population_size: usize,

    /// Number of generational transitions performed by a run.
    pub max_generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            genome_length: 150,
            population_size: 20,
            max_generations: 30,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    pub fn with_genome_length(mut self, n: usize) -> Self {
        self.genome_length = n;
        self
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for smoke runs: 10 individuals, 10 generations.
    pub fn quick() -> Self {
        Self {
            population_size: 10,
            max_generations: 10,
            ..Self::default()
        }
    }

    /// Preset for the triangle reconstruction driver: 10 triangles of
    /// 3 colour bytes plus 6 little-endian `u16` coordinates, 20 individuals,
    /// 30 generations.
    pub fn reference() -> Self {
        Self {
            genome_length: 10 * (3 + 6 * 2),
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.validate_shape()?;
        if self.max_generations == 0 {
            return Err(EvolutionError::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Validates only the genome and population sizes.
    ///
    /// Enough to build an initial population; a run also needs
    /// [`validate`](Self::validate).
    pub fn validate_shape(&self) -> Result<()> {
        if self.genome_length == 0 {
            return Err(EvolutionError::InvalidConfig(
                "genome_length must be at least 1".into(),
            ));
        }
        check_population_size(self.population_size)
    }
}

pub(crate) fn check_population_size(n: usize) -> Result<()> {
    if n < MIN_POPULATION_SIZE {
        return Err(EvolutionError::InvalidConfig(format!(
            "population_size must be at least {MIN_POPULATION_SIZE}, got {n}"
        )));
    }
    Ok(())
}
