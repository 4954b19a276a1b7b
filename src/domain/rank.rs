use crate::domain::lotto::Lotto;
use crate::domain::money::PurchaseAmount;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Miss,
}

impl Rank {
    /// Winning ranks from lowest to highest prize, as printed in reports.
    pub const WINNING: [Rank; 4] = [Rank::Fourth, Rank::Third, Rank::Second, Rank::First];

    pub fn from_match_count(count: usize) -> Self {
        match count {
            6 => Rank::First,
            5 => Rank::Second,
            4 => Rank::Third,
            3 => Rank::Fourth,
            _ => Rank::Miss,
        }
    }

    pub fn match_count(self) -> usize {
        match self {
            Rank::First => 6,
            Rank::Second => 5,
            Rank::Third => 4,
            Rank::Fourth => 3,
            Rank::Miss => 0,
        }
    }

    pub fn prize(self) -> u64 {
        match self {
            Rank::First => 2_000_000_000,
            Rank::Second => 1_500_000,
            Rank::Third => 50_000,
            Rank::Fourth => 5_000,
            Rank::Miss => 0,
        }
    }
}

/// Outcome of a set of tickets against one winning ticket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinningStatistics {
    counts: BTreeMap<Rank, usize>,
    total_prize: u64,
    purchase_amount: u64,
}

impl WinningStatistics {
    pub fn tally(lottos: &[Lotto], winning: &Lotto, purchase: &PurchaseAmount) -> Self {
        let mut counts: BTreeMap<Rank, usize> = Rank::WINNING.iter().map(|&r| (r, 0)).collect();
        counts.insert(Rank::Miss, 0);

        for lotto in lottos {
            let rank = Rank::from_match_count(lotto.match_count(winning.numbers()));
            *counts.entry(rank).or_insert(0) += 1;
        }

        let total_prize = counts
            .iter()
            .map(|(rank, &count)| rank.prize().saturating_mul(count as u64))
            .fold(0u64, u64::saturating_add);

        Self {
            counts,
            total_prize,
            purchase_amount: purchase.amount(),
        }
    }

    pub fn count(&self, rank: Rank) -> usize {
        self.counts.get(&rank).copied().unwrap_or(0)
    }

    pub fn total_prize(&self) -> u64 {
        self.total_prize
    }

    pub fn purchase_amount(&self) -> u64 {
        self.purchase_amount
    }

    pub fn profit_rate(&self) -> f64 {
        if self.purchase_amount == 0 {
            return 0.0;
        }
        self.total_prize as f64 / self.purchase_amount as f64
    }
}
