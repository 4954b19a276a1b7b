use crate::domain::lotto::Lotto;
use crate::domain::money::{PurchaseAmount, DEFAULT_TICKET_PRICE};
use crate::domain::ports::NumberGenerator;
use crate::domain::rank::WinningStatistics;
use crate::utils::error::Result;

pub struct LottoGame<G: NumberGenerator> {
    purchase: PurchaseAmount,
    generator: G,
    lottos: Vec<Lotto>,
}

impl<G: NumberGenerator> LottoGame<G> {
    pub fn new(input: &str, generator: G) -> Result<Self> {
        Self::with_unit(input, DEFAULT_TICKET_PRICE, generator)
    }

    pub fn with_unit(input: &str, unit: u64, generator: G) -> Result<Self> {
        let purchase = PurchaseAmount::parse(input, unit)?;
        tracing::debug!(
            "Purchase amount {} accepted ({} tickets)",
            purchase.amount(),
            purchase.ticket_count()
        );
        Ok(Self {
            purchase,
            generator,
            lottos: Vec::new(),
        })
    }

    /// Generates one ticket per purchased unit, replacing any earlier draw.
    pub fn start(&mut self) -> Result<()> {
        let count = self.purchase.ticket_count();
        let lottos = (0..count)
            .map(|_| self.generator.generate())
            .collect::<Result<Vec<_>>>()?;
        tracing::info!("Generated {} lotto tickets", lottos.len());
        self.lottos = lottos;
        Ok(())
    }

    pub fn lottos(&self) -> &[Lotto] {
        &self.lottos
    }

    pub fn purchase(&self) -> &PurchaseAmount {
        &self.purchase
    }

    pub fn result(&self, winning: &Lotto) -> WinningStatistics {
        WinningStatistics::tally(&self.lottos, winning, &self.purchase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generator::{FixedNumberGenerator, RandomNumberGenerator};
    use crate::domain::rank::Rank;
    use crate::utils::error::LottoError;

    #[test]
    fn test_start_generates_one_ticket_per_unit() {
        let mut game = LottoGame::new("15000", RandomNumberGenerator::seeded(7)).unwrap();
        assert!(game.lottos().is_empty());
        game.start().unwrap();
        assert_eq!(game.lottos().len(), 15);
    }

    #[test]
    fn test_rejects_bad_amount() {
        assert!(matches!(
            LottoGame::new("1500", RandomNumberGenerator::new()),
            Err(LottoError::InvalidPurchaseUnit { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_amount_before_generating() {
        assert!(matches!(
            LottoGame::new("999999999999000", RandomNumberGenerator::new()),
            Err(LottoError::PurchaseAmountNotNumeric { .. })
        ));
    }

    #[test]
    fn test_result_with_fixed_tickets() {
        let tickets = vec![
            Lotto::from_values(&[1, 2, 3, 4, 5, 6]).unwrap(),
            Lotto::from_values(&[1, 2, 3, 4, 5, 45]).unwrap(),
        ];
        let mut game = LottoGame::new("2000", FixedNumberGenerator::new(tickets)).unwrap();
        game.start().unwrap();

        let winning = Lotto::from_values(&[1, 2, 3, 4, 5, 6]).unwrap();
        let stats = game.result(&winning);
        assert_eq!(stats.count(Rank::First), 1);
        assert_eq!(stats.count(Rank::Second), 1);
        assert_eq!(stats.total_prize(), 2_001_500_000);
    }

    #[test]
    fn test_generator_failure_propagates() {
        let mut game = LottoGame::new("2000", FixedNumberGenerator::default()).unwrap();
        assert!(game.start().is_err());
        assert!(game.lottos().is_empty());
    }
}
