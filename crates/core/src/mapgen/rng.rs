//! Deterministic 48-bit linear-congruential engine shared by map and
//! encounter generation.
//!
//! Every draw must produce the same value for the same prior state on every
//! platform, so all arithmetic is fixed-width with explicit wrap-around and
//! the engine never holds floating-point state. Do not add draws that consume
//! the stream conditionally on anything but the documented inputs.

use crate::types::{RngError, Seed};

const MULTIPLIER: u64 = 0x5DEE_CE66D;
const ADDEND: u64 = 0xB;
const STATE_MASK: u64 = (1 << 48) - 1;

/// Linear-congruential engine with 48 bits of state.
///
/// One instance per logical random stream: one for a whole map build, one per
/// floor-scoped encounter lookup. Cloning an engine forks the stream at its
/// current position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRng {
    state: u64,
}

impl GameRng {
    /// Seeds the engine. Textual seeds are folded to a 32-bit value first;
    /// numeric seeds are used as-is. Either way the initial state is the
    /// seed scrambled with the multiplier and masked to 48 bits.
    pub fn new(seed: &Seed) -> Self {
        let raw = match seed {
            Seed::Numeric(value) => *value,
            Seed::Textual(text) => i64::from(fold_text_seed(text)),
        };
        Self { state: ((raw as u64) ^ MULTIPLIER) & STATE_MASK }
    }

    /// Advances the state once and returns its top `bits` bits.
    ///
    /// This is the sole state mutator; every public draw is built on it.
    fn next(&mut self, bits: u32) -> i32 {
        debug_assert!((1..=32).contains(&bits));
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & STATE_MASK;
        (self.state >> (48 - bits)) as u32 as i32
    }

    pub fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    /// Uniform draw in `[0, bound)`.
    ///
    /// Power-of-two bounds scale the top 31 bits directly; other bounds
    /// reject-and-retry draws whose remainder would be biased by the signed
    /// 32-bit boundary. The retry condition must stay exactly as written or
    /// the stream desynchronizes.
    pub fn next_i32_bounded(&mut self, bound: i32) -> Result<i32, RngError> {
        if bound <= 0 {
            return Err(RngError::NonPositiveBound);
        }
        if bound & (bound - 1) == 0 {
            return Ok(((i64::from(bound) * i64::from(self.next(31))) >> 31) as i32);
        }
        loop {
            let bits = self.next(31);
            let val = bits % bound;
            if bits.wrapping_sub(val).wrapping_add(bound - 1) >= 0 {
                return Ok(val);
            }
        }
    }

    /// Uniform draw in `[0, 1)` with 24 bits of precision.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next(24)) / f64::from(1 << 24)
    }

    pub fn next_bool(&mut self) -> bool {
        self.next(1) != 0
    }

    /// Fisher-Yates shuffle, walking from the last index down to 1.
    /// Returns a new sequence; the input is never mutated.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        for i in (1..shuffled.len()).rev() {
            let j = self
                .next_i32_bounded(i as i32 + 1)
                .expect("swap bound is at least one") as usize;
            shuffled.swap(i, j);
        }
        shuffled
    }

    /// Uniform pick from a non-empty pool.
    pub fn choice<'a, T>(&mut self, pool: &'a [T]) -> Result<&'a T, RngError> {
        if pool.is_empty() {
            return Err(RngError::EmptyPool);
        }
        let index = self.next_i32_bounded(pool.len() as i32)?;
        Ok(&pool[index as usize])
    }
}

/// Rolling hash over UTF-16 code units (`hash = hash * 31 + unit`), wrapped
/// to a signed 32-bit value, absolute value taken.
fn fold_text_seed(text: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in text.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng_from(value: i64) -> GameRng {
        GameRng::new(&Seed::Numeric(value))
    }

    #[test]
    fn reference_sequence_for_full_width_draws() {
        let mut rng = rng_from(42);
        let drawn: Vec<i32> = (0..6).map(|_| rng.next_i32()).collect();
        assert_eq!(
            drawn,
            [-1_170_105_035, 234_785_527, -1_360_544_799, 205_897_768, 1_325_939_940, -248_792_245]
        );

        let mut rng = rng_from(123);
        let drawn: Vec<i32> = (0..4).map(|_| rng.next_i32()).collect();
        assert_eq!(drawn, [-1_188_957_731, 1_018_954_901, -39_088_943, 1_295_249_578]);
    }

    #[test]
    fn reference_sequence_for_float_draws() {
        let mut rng = rng_from(42);
        let drawn: Vec<f64> = (0..4).map(|_| rng.next_f64()).collect();
        let expected =
            [0.727_563_679_218_292_2, 0.054_665_207_862_854_004, 0.683_223_426_342_010_5, 0.047_939_300_537_109_375];
        for (value, reference) in drawn.iter().zip(expected) {
            assert_eq!(*value, reference);
        }
    }

    #[test]
    fn reference_sequence_for_rejection_sampled_bounds() {
        let mut rng = rng_from(42);
        let drawn: Vec<i32> =
            (0..10).map(|_| rng.next_i32_bounded(7).expect("bound is positive")).collect();
        assert_eq!(drawn, [1, 5, 6, 3, 5, 4, 1, 3, 6, 3]);
    }

    #[test]
    fn reference_sequence_for_power_of_two_bounds() {
        let mut rng = rng_from(42);
        let drawn: Vec<i32> =
            (0..6).map(|_| rng.next_i32_bounded(8).expect("bound is positive")).collect();
        assert_eq!(drawn, [5, 0, 5, 0, 2, 7]);
    }

    #[test]
    fn reference_sequence_for_boolean_draws() {
        let mut rng = rng_from(42);
        let drawn: Vec<bool> = (0..8).map(|_| rng.next_bool()).collect();
        assert_eq!(drawn, [true, false, true, false, false, true, false, true]);
    }

    #[test]
    fn non_positive_bounds_are_rejected() {
        let mut rng = rng_from(42);
        assert_eq!(rng.next_i32_bounded(0), Err(RngError::NonPositiveBound));
        assert_eq!(rng.next_i32_bounded(-5), Err(RngError::NonPositiveBound));
        // A rejected bound must not have advanced the stream.
        assert_eq!(rng.next_i32(), -1_170_105_035);
    }

    #[test]
    fn bounded_draws_stay_in_range_and_near_uniform() {
        let mut rng = rng_from(42);
        let mut counts = [0_u32; 7];
        for _ in 0..100_000 {
            let value = rng.next_i32_bounded(7).expect("bound is positive");
            counts[value as usize] += 1;
        }
        for (bucket, count) in counts.iter().enumerate() {
            assert!(
                (13_500..15_100).contains(count),
                "bucket {bucket} count {count} outside the uniform band"
            );
        }
    }

    #[test]
    fn shuffle_permutes_without_mutating_the_input() {
        let original: Vec<u32> = (0..8).collect();
        let mut rng = rng_from(42);
        let shuffled = rng.shuffle(&original);
        assert_eq!(shuffled, [2, 6, 3, 1, 4, 0, 7, 5]);
        assert_eq!(original, (0..8).collect::<Vec<u32>>());
    }

    #[test]
    fn shuffle_of_short_sequences_is_identity() {
        let mut rng = rng_from(42);
        assert_eq!(rng.shuffle::<u32>(&[]), Vec::<u32>::new());
        assert_eq!(rng.shuffle(&[9]), vec![9]);
    }

    #[test]
    fn choice_picks_by_bounded_draw_and_rejects_empty_pools() {
        let pool = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
        let mut rng = rng_from(42);
        // First bounded draw under 10 for this seed lands on index 0.
        assert_eq!(rng.choice(&pool), Ok(&"a"));

        let empty: [&str; 0] = [];
        assert_eq!(rng.choice(&empty), Err(RngError::EmptyPool));
    }

    #[test]
    fn textual_seeds_fold_to_their_rolling_hash() {
        let mut from_text = GameRng::new(&Seed::from("abc"));
        let mut from_hash = rng_from(96_354);
        for _ in 0..5 {
            assert_eq!(from_text.next_i32(), from_hash.next_i32());
        }
        let mut rng = GameRng::new(&Seed::from("test-seed-1"));
        assert_eq!(rng.next_i32(), -864_987_333);
    }

    #[test]
    fn negative_rolling_hashes_fold_to_their_absolute_value() {
        let mut from_text = GameRng::new(&Seed::from("ascension-20"));
        let mut from_hash = rng_from(467_918_788);
        for _ in 0..5 {
            assert_eq!(from_text.next_i32(), from_hash.next_i32());
        }
    }
}
