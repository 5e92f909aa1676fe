//! Error types shared across the crate.

use thiserror::Error;

/// Boxed error returned by consumer-supplied evaluators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of a genome codec read or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A field of `width` bytes at `offset` does not fit into a genome of `len` bytes.
    #[error("field of {width} bytes at offset {offset} exceeds genome length {len}")]
    OutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },
}

/// Errors raised while building or evolving a population.
///
/// Every variant except [`InvalidConfig`](EvolutionError::InvalidConfig) aborts
/// the generation that raised it. Previously completed generations stay valid.
#[derive(Debug, Error)]
pub enum EvolutionError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("genome codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("evaluation failed in generation {generation} for individual {individual}: {source}")]
    Evaluation {
        generation: usize,
        individual: usize,
        #[source]
        source: BoxError,
    },

    #[error("evaluation of individual {individual} in generation {generation} is not finite: {value}")]
    NonFiniteEvaluation {
        generation: usize,
        individual: usize,
        value: f64,
    },

    /// The retry cap for distinct parents or a novel child was exhausted.
    ///
    /// Means fewer than two individuals can be drawn as parents, or the
    /// population has collapsed onto (nearly) one genome.
    #[error("population stagnated in generation {generation} at individual {individual} after {attempts} attempts")]
    Stagnated {
        generation: usize,
        individual: usize,
        attempts: usize,
    },
}

pub type Result<T> = std::result::Result<T, EvolutionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_error_converts() {
        let err: EvolutionError = CodecError::OutOfBounds {
            offset: 4,
            width: 2,
            len: 5,
        }
        .into();
        assert!(matches!(err, EvolutionError::Codec(_)));
        assert_eq!(
            err.to_string(),
            "genome codec error: field of 2 bytes at offset 4 exceeds genome length 5"
        );
    }

    #[test]
    fn test_evaluation_error_keeps_source() {
        use std::error::Error as _;

        let err = EvolutionError::Evaluation {
            generation: 3,
            individual: 7,
            source: "target size mismatch".into(),
        };
        assert!(err.to_string().contains("generation 3"));
        assert!(err.to_string().contains("individual 7"));
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("target size mismatch".to_string())
        );
    }
}
