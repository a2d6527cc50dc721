use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Numbers `1..=90` drawn without replacement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDrawPool")]
pub struct DrawPool {
    drawn: Vec<Number>,
    /// Ascending, always the complement of `drawn`.
    remaining: Vec<Number>,
}

#[derive(Deserialize)]
struct RawDrawPool {
    drawn: Vec<Number>,
    remaining: Vec<Number>,
}

impl TryFrom<RawDrawPool> for DrawPool {
    type Error = GameError;

    fn try_from(raw: RawDrawPool) -> Result<Self> {
        let mut seen: u128 = 0;
        for &number in &raw.drawn {
            let bit = 1u128 << number.min(127);
            if !is_valid_number(number) || seen & bit != 0 {
                return Err(GameError::InconsistentPool);
            }
            seen |= bit;
        }

        let complement = (1..=POOL_SIZE).filter(|&number| seen & (1u128 << number) == 0);
        if !raw.remaining.iter().copied().eq(complement) {
            return Err(GameError::InconsistentPool);
        }

        Ok(Self {
            drawn: raw.drawn,
            remaining: raw.remaining,
        })
    }
}

impl DrawPool {
    pub fn new() -> Self {
        Self {
            drawn: Vec::with_capacity(POOL_SIZE.into()),
            remaining: (1..=POOL_SIZE).collect(),
        }
    }

    /// Picks uniformly among the remaining numbers.
    pub fn draw<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<Number> {
        if self.remaining.is_empty() {
            return Err(GameError::PoolExhausted);
        }

        let index = rng.next_index(self.remaining.len());
        let number = self.remaining.remove(index);
        self.drawn.push(number);
        log::trace!("drew {} ({} left)", number, self.remaining.len());
        Ok(number)
    }

    /// Drawn numbers, oldest first.
    pub fn drawn(&self) -> &[Number] {
        &self.drawn
    }

    pub fn remaining(&self) -> &[Number] {
        &self.remaining
    }

    pub fn drawn_count(&self) -> usize {
        self.drawn.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    pub fn last(&self) -> Option<Number> {
        self.drawn.last().copied()
    }

    pub fn is_drawn(&self, number: Number) -> bool {
        is_valid_number(number) && self.remaining.binary_search(&number).is_err()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }
}

impl Default for DrawPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::random::scripted::Scripted;

    #[test]
    fn ninety_draws_exhaust_the_pool() {
        let mut pool = DrawPool::new();
        let mut rng = SmallRng::seed_from_u64(3);

        for drawn in 1..=usize::from(POOL_SIZE) {
            let number = pool.draw(&mut rng).unwrap();
            assert!(is_valid_number(number));
            assert_eq!(pool.drawn_count(), drawn);
            assert_eq!(pool.last(), Some(number));
        }

        assert!(pool.is_exhausted());
        assert_eq!(pool.draw(&mut rng), Err(GameError::PoolExhausted));
        assert_eq!(pool.drawn_count(), usize::from(POOL_SIZE));

        let mut sorted = pool.drawn().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=POOL_SIZE).collect::<Vec<_>>());
    }

    #[test]
    fn draw_order_never_repeats() {
        for seed in 0..50 {
            let mut pool = DrawPool::new();
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut seen = [false; POOL_SIZE as usize + 1];

            while let Ok(number) = pool.draw(&mut rng) {
                assert!(!seen[usize::from(number)], "seed {seed} repeated {number}");
                seen[usize::from(number)] = true;
            }
        }
    }

    #[test]
    fn serde_round_trip_mid_game() {
        let mut pool = DrawPool::new();
        let mut rng = SmallRng::seed_from_u64(8);
        for _ in 0..20 {
            pool.draw(&mut rng).unwrap();
        }

        let json = serde_json::to_value(&pool).unwrap();
        let restored: DrawPool = serde_json::from_value(json).unwrap();

        assert_eq!(restored, pool);
    }

    #[test]
    fn deserialize_rejects_inconsistent_lists() {
        let full: Vec<Number> = (1..=POOL_SIZE).collect();
        let without_five: Vec<Number> = full.iter().copied().filter(|&n| n != 5).collect();
        let mut unsorted = without_five.clone();
        unsorted.swap(0, 1);

        let cases = [
            // 5 drawn but still remaining
            serde_json::json!({ "drawn": [5], "remaining": full }),
            // 5 in neither list
            serde_json::json!({ "drawn": [], "remaining": without_five }),
            serde_json::json!({ "drawn": [5], "remaining": unsorted }),
            serde_json::json!({ "drawn": [5, 5], "remaining": without_five }),
            serde_json::json!({ "drawn": [0], "remaining": full }),
            serde_json::json!({ "drawn": [200], "remaining": full }),
        ];

        for json in cases {
            let err = serde_json::from_value::<DrawPool>(json.clone()).unwrap_err();
            assert!(
                err.to_string().contains("do not split"),
                "{json} gave {err}"
            );
        }
    }

    #[test]
    fn draw_picks_by_index_into_remaining() {
        let mut pool = DrawPool::new();
        let mut rng = Scripted::new([0, 0, 87]);

        assert_eq!(pool.draw(&mut rng), Ok(1));
        assert_eq!(pool.draw(&mut rng), Ok(2));
        assert_eq!(pool.draw(&mut rng), Ok(90));
        assert_eq!(pool.drawn(), [1, 2, 90]);
        assert_eq!(pool.remaining_count(), 87);
        assert_eq!(pool.remaining()[0], 3);
        assert!(pool.is_drawn(90));
        assert!(!pool.is_drawn(3));
        assert!(!pool.is_drawn(0));
    }
}
