use crate::domain::lotto::{Lotto, LOTTO_SIZE};
use crate::domain::lotto_number::{LottoNumber, MAX_NUMBER, MIN_NUMBER};
use crate::domain::ports::NumberGenerator;
use crate::utils::error::{LottoError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::VecDeque;

/// Draws six distinct numbers from the full range, sorted ascending.
pub struct RandomNumberGenerator {
    rng: StdRng,
    pool: Vec<LottoNumber>,
}

impl RandomNumberGenerator {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let pool = (MIN_NUMBER..=MAX_NUMBER)
            .filter_map(|n| LottoNumber::new(i64::from(n)).ok())
            .collect();
        Self { rng, pool }
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberGenerator for RandomNumberGenerator {
    fn generate(&mut self) -> Result<Lotto> {
        let mut picked: Vec<LottoNumber> = self
            .pool
            .choose_multiple(&mut self.rng, LOTTO_SIZE)
            .copied()
            .collect();
        picked.sort();
        Lotto::new(picked)
    }
}

/// Replays predetermined tickets in order.
#[derive(Debug, Default)]
pub struct FixedNumberGenerator {
    queue: VecDeque<Lotto>,
}

impl FixedNumberGenerator {
    pub fn new(lottos: impl IntoIterator<Item = Lotto>) -> Self {
        Self {
            queue: lottos.into_iter().collect(),
        }
    }
}

impl NumberGenerator for FixedNumberGenerator {
    fn generate(&mut self) -> Result<Lotto> {
        self.queue.pop_front().ok_or_else(|| LottoError::ProcessingError {
            message: "No predetermined tickets left".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_ticket_is_valid_and_sorted() {
        let mut generator = RandomNumberGenerator::new();
        for _ in 0..100 {
            let lotto = generator.generate().unwrap();
            let numbers = lotto.numbers();
            assert_eq!(numbers.len(), LOTTO_SIZE);
            assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RandomNumberGenerator::seeded(42);
        let mut b = RandomNumberGenerator::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.generate().unwrap(), b.generate().unwrap());
        }
    }

    #[test]
    fn test_fixed_generator_runs_out() {
        let lotto = Lotto::from_values(&[1, 2, 3, 4, 5, 6]).unwrap();
        let mut generator = FixedNumberGenerator::new(vec![lotto.clone()]);
        assert_eq!(generator.generate().unwrap(), lotto);
        assert!(matches!(
            generator.generate(),
            Err(LottoError::ProcessingError { .. })
        ));
    }
}
