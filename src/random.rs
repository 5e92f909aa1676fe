//! Random source helpers.
//!
//! The engine never owns a generator: every operation takes an explicit
//! `&mut R where R: Rng`. These helpers only build seeded generators and
//! perform the integer draws the operators are defined in terms of.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a seeded standard generator.
///
/// Two generators created from the same seed yield identical streams.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws `random_int % n`.
///
/// The genetic operators are defined on a raw integer reduced modulo `n`
/// (e.g. `% 9` for bit pivots), which `random_range` does not reproduce.
///
/// # Panics
/// Panics if `n == 0`.
pub fn draw_below<R: Rng + ?Sized>(rng: &mut R, n: usize) -> usize {
    assert!(n > 0, "cannot draw below zero");
    (rng.next_u64() % n as u64) as usize
}

/// Draws a uniform value in `[0, 1)`.
pub fn draw_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedRng;
    use super::*;
    use rand::RngCore;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..32 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_draw_below_is_modulo() {
        let mut rng = ScriptedRng::new(&[20, 9, 8]);
        assert_eq!(draw_below(&mut rng, 9), 2);
        assert_eq!(draw_below(&mut rng, 9), 0);
        assert_eq!(draw_below(&mut rng, 9), 8);
    }

    #[test]
    fn test_draw_below_in_range() {
        let mut rng = create_rng(42);
        for n in 1..50 {
            for _ in 0..20 {
                assert!(draw_below(&mut rng, n) < n);
            }
        }
    }

    #[test]
    fn test_draw_unit_in_range() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let u = draw_unit(&mut rng);
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_draw_unit_zero_from_zero_word() {
        let mut rng = ScriptedRng::new(&[0]);
        assert_eq!(draw_unit(&mut rng), 0.0);
    }

    #[test]
    #[should_panic(expected = "cannot draw below zero")]
    fn test_draw_below_zero_panics() {
        let mut rng = create_rng(1);
        draw_below(&mut rng, 0);
    }
}
