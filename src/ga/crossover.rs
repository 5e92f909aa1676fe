//! Recombination operators for byte genomes.
//!
//! Both operators return a freshly allocated child of the parents' length and
//! never write to parent storage.
//!
//! - [`PivotCrossover`]: single contiguous crossover point with bit-level
//!   granularity at the boundary. Layout-agnostic.
//! - [`FeatureCrossover`]: whole feature groups taken from one parent or the
//!   other, copied through the genome codec. Never splits a group.

use super::types::Genome;
use crate::codec::{GeneLayout, GenomeReader, GenomeWriter};
use crate::error::{EvolutionError, Result};
use crate::random::draw_below;
use rand::Rng;

/// Produces a child genome from two parents.
pub trait Recombinator {
    /// Recombines `mother` and `father`, which have equal length.
    fn recombine<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        mother: &[u8],
        father: &[u8],
    ) -> Result<Genome>;

    /// Rejects genome lengths this operator cannot handle.
    ///
    /// Called once when a run is set up so that layout mismatches surface as
    /// configuration errors instead of failing mid-generation.
    fn check_length(&self, _genome_length: usize) -> Result<()> {
        Ok(())
    }
}

/// Mask keeping the high `8 - pivot_bit` bits of a byte.
///
/// `pivot_bit` ranges over `0..=8`; 8 yields an empty mask.
fn high_mask(pivot_bit: usize) -> u8 {
    0xffu8.checked_shl(pivot_bit as u32).unwrap_or(0)
}

/// Single-pivot crossover with bit granularity.
///
/// # Algorithm
///
/// 1. `pivot_byte = int % len`, `pivot_bit = int % 9`
/// 2. Bytes before `pivot_byte` come from the mother, bytes after it from
///    the father
/// 3. The pivot byte blends both: `(mother & mask) | (father & !mask)` with
///    `mask = 0xFF << pivot_bit`
///
/// The modulus 9 lets the mask range from `0xFF` (pivot byte entirely from
/// the mother) down to `0x00` (entirely from the father).
///
/// # Examples
///
/// ```
/// use genepool::ga::{PivotCrossover, Recombinator};
/// use genepool::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let child = PivotCrossover
///     .recombine(&mut rng, &[0, 0, 0, 0], &[255, 255, 255, 255])
///     .unwrap();
/// assert_eq!(child.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PivotCrossover;

impl PivotCrossover {
    /// Builds the child for explicit pivots.
    ///
    /// # Panics
    /// Panics if the parents differ in length or `pivot_byte` is out of range.
    pub fn cross_at(mother: &[u8], father: &[u8], pivot_byte: usize, pivot_bit: usize) -> Genome {
        assert_eq!(mother.len(), father.len(), "parents must have equal length");

        let mask = high_mask(pivot_bit);
        let mut child = Vec::with_capacity(mother.len());
        child.extend_from_slice(&mother[..pivot_byte]);
        child.push((mother[pivot_byte] & mask) | (father[pivot_byte] & !mask));
        child.extend_from_slice(&father[pivot_byte + 1..]);
        child
    }
}

impl Recombinator for PivotCrossover {
    fn recombine<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        mother: &[u8],
        father: &[u8],
    ) -> Result<Genome> {
        if mother.is_empty() {
            return Ok(Vec::new());
        }
        let pivot_byte = draw_below(rng, mother.len());
        let pivot_bit = draw_below(rng, 9);
        Ok(Self::cross_at(mother, father, pivot_byte, pivot_bit))
    }
}

/// Feature-granular crossover.
///
/// The genome is read as consecutive groups described by a [`GeneLayout`].
/// For every group one coin flip picks the father (`int % 2 == 0`) or the
/// mother, and the whole group is copied field by field from that parent at
/// the same offset.
///
/// Trades the fine granularity of [`PivotCrossover`] for semantic coherence:
/// a triangle's colour and vertices always travel together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCrossover {
    layout: GeneLayout,
}

impl FeatureCrossover {
    pub fn new(layout: GeneLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &GeneLayout {
        &self.layout
    }
}

impl Recombinator for FeatureCrossover {
    fn recombine<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        mother: &[u8],
        father: &[u8],
    ) -> Result<Genome> {
        let width = self.layout.width();
        if width == 0 {
            return Err(EvolutionError::InvalidConfig(
                "feature layout has no fields".into(),
            ));
        }

        let mut child = vec![0u8; mother.len()];
        let mut writer = GenomeWriter::new(&mut child);
        let mut from_mother = GenomeReader::new(mother);
        let mut from_father = GenomeReader::new(father);

        // A trailing partial group is still attempted so that the codec
        // reports the overrun.
        let groups = mother.len().div_ceil(width);
        for group in 0..groups {
            let reader = if draw_below(rng, 2) == 0 {
                &mut from_father
            } else {
                &mut from_mother
            };
            reader.seek(group * width);
            writer.seek(group * width);
            self.layout.copy_group(reader, &mut writer)?;
        }

        Ok(child)
    }

    fn check_length(&self, genome_length: usize) -> Result<()> {
        match self.layout.group_count(genome_length) {
            Some(_) => Ok(()),
            None => Err(EvolutionError::InvalidConfig(format!(
                "genome length {genome_length} is not a multiple of the feature width {}",
                self.layout.width()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::FieldKind;
    use crate::random::create_rng;
    use crate::random::testing::ScriptedRng;
    use proptest::prelude::*;

    const MOTHER: [u8; 3] = [0, 0, 0];
    const FATHER: [u8; 3] = [255, 255, 255];

    #[test]
    fn test_few_bits_from_father() {
        let mut rng = ScriptedRng::new(&[2, 6]);
        let child = PivotCrossover.recombine(&mut rng, &MOTHER, &FATHER).unwrap();
        assert_eq!(child, vec![0, 0, 63]);
    }

    #[test]
    fn test_few_bits_from_mother() {
        // 30 % 3 == 0, 12 % 9 == 3
        let mut rng = ScriptedRng::new(&[30, 12]);
        let child = PivotCrossover.recombine(&mut rng, &MOTHER, &FATHER).unwrap();
        assert_eq!(child, vec![7, 255, 255]);
    }

    #[test]
    fn test_few_of_both() {
        let mut rng = ScriptedRng::new(&[1, 3]);
        let child = PivotCrossover.recombine(&mut rng, &MOTHER, &FATHER).unwrap();
        assert_eq!(child, vec![0, 7, 255]);
    }

    #[test]
    fn test_pivot_bit_zero_takes_mother_byte() {
        assert_eq!(PivotCrossover::cross_at(&MOTHER, &FATHER, 1, 0), vec![0, 0, 255]);
    }

    #[test]
    fn test_pivot_bit_eight_takes_father_byte() {
        assert_eq!(PivotCrossover::cross_at(&MOTHER, &FATHER, 1, 8), vec![0, 255, 255]);
        assert_eq!(PivotCrossover::cross_at(&MOTHER, &FATHER, 0, 8), vec![255, 255, 255]);
    }

    #[test]
    fn test_pivot_last_byte_all_mother() {
        assert_eq!(PivotCrossover::cross_at(&MOTHER, &FATHER, 2, 0), vec![0, 0, 0]);
    }

    #[test]
    fn test_blend_mixed_parents() {
        let mother = [0b1010_1010];
        let father = [0b0101_0101];
        // mask 0xF0: high nibble from mother, low nibble from father
        assert_eq!(
            PivotCrossover::cross_at(&mother, &father, 0, 4),
            vec![0b1010_0101]
        );
    }

    #[test]
    fn test_pivot_consumes_two_draws() {
        let mut rng = ScriptedRng::new(&[0, 0, 0]);
        PivotCrossover.recombine(&mut rng, &MOTHER, &FATHER).unwrap();
        assert_eq!(rng.consumed(), 2);
    }

    #[test]
    fn test_pivot_empty_genome() {
        let mut rng = create_rng(1);
        assert!(PivotCrossover.recombine(&mut rng, &[], &[]).unwrap().is_empty());
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_pivot_length_mismatch_panics() {
        PivotCrossover::cross_at(&[0, 0], &[0], 0, 0);
    }

    fn pair_layout() -> GeneLayout {
        GeneLayout::new()
            .with_field(FieldKind::U8)
            .with_field(FieldKind::U16)
    }

    #[test]
    fn test_feature_groups_follow_coin() {
        let mother: Vec<u8> = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
        let father: Vec<u8> = vec![11, 12, 13, 14, 15, 16, 17, 18, 19];
        // even -> father, odd -> mother
        let mut rng = ScriptedRng::new(&[0, 1, 2]);
        let child = FeatureCrossover::new(pair_layout())
            .recombine(&mut rng, &mother, &father)
            .unwrap();
        assert_eq!(child, vec![11, 12, 13, 4, 5, 6, 17, 18, 19]);
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn test_feature_does_not_alias_parents() {
        let mother = vec![1u8; 6];
        let father = vec![2u8; 6];
        let mut rng = create_rng(5);
        let mut child = FeatureCrossover::new(pair_layout())
            .recombine(&mut rng, &mother, &father)
            .unwrap();
        child.iter_mut().for_each(|b| *b = 0);
        assert_eq!(mother, vec![1u8; 6]);
        assert_eq!(father, vec![2u8; 6]);
    }

    #[test]
    fn test_feature_partial_group_is_codec_error() {
        let mut rng = create_rng(5);
        let err = FeatureCrossover::new(pair_layout())
            .recombine(&mut rng, &[0u8; 5], &[0u8; 5])
            .unwrap_err();
        assert!(matches!(err, EvolutionError::Codec(_)));
    }

    #[test]
    fn test_feature_check_length() {
        let op = FeatureCrossover::new(pair_layout());
        assert!(op.check_length(9).is_ok());
        assert!(op.check_length(10).is_err());
        assert!(PivotCrossover.check_length(10).is_ok());
    }

    #[test]
    fn test_feature_empty_layout() {
        let mut rng = create_rng(5);
        let err = FeatureCrossover::new(GeneLayout::new())
            .recombine(&mut rng, &[0u8; 4], &[0u8; 4])
            .unwrap_err();
        assert!(matches!(err, EvolutionError::InvalidConfig(_)));
    }

    proptest! {
        #[test]
        fn prop_pivot_child_is_single_cut(
            parents in (1usize..64).prop_flat_map(|n| (
                prop::collection::vec(any::<u8>(), n),
                prop::collection::vec(any::<u8>(), n),
            )),
            seed in any::<u64>(),
        ) {
            let (mother, father) = parents;
            let mut rng = create_rng(seed);
            let child = PivotCrossover.recombine(&mut rng, &mother, &father).unwrap();
            prop_assert_eq!(child.len(), mother.len());

            // Every bit of the child comes from the parent on its side of one cut.
            fn bit(g: &[u8], i: usize) -> u8 {
                (g[i / 8] >> (7 - i % 8)) & 1
            }
            let bits = mother.len() * 8;
            let cut = (0..=bits)
                .find(|&c| (0..bits).all(|i| {
                    let from = if i < c { &mother } else { &father };
                    bit(&child, i) == bit(from, i)
                }));
            prop_assert!(cut.is_some());
        }

        #[test]
        fn prop_feature_groups_are_whole(
            groups in 1usize..16,
            seed in any::<u64>(),
        ) {
            let layout = pair_layout();
            let len = layout.genome_length(groups);
            let mother: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let father: Vec<u8> = (0..len).map(|i| 200u8.wrapping_add(i as u8)).collect();
            let mut rng = create_rng(seed);
            let child = FeatureCrossover::new(layout)
                .recombine(&mut rng, &mother, &father)
                .unwrap();

            for chunk in 0..groups {
                let range = chunk * 3..chunk * 3 + 3;
                prop_assert!(
                    child[range.clone()] == mother[range.clone()]
                        || child[range.clone()] == father[range]
                );
            }
        }
    }
}
