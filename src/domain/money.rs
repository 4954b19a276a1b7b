use crate::utils::error::{LottoError, Result};
use serde::Serialize;

pub const DEFAULT_TICKET_PRICE: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseAmount {
    amount: u64,
    unit: u64,
}

impl PurchaseAmount {
    /// Parses a purchase amount that must be a positive multiple of `unit`.
    pub fn parse(input: &str, unit: u64) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(LottoError::EmptyPurchaseAmount);
        }

        let not_numeric = || LottoError::PurchaseAmountNotNumeric {
            input: input.to_string(),
        };
        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(not_numeric());
        }
        // 與 32-bit 整數相同的上限，超過視為非數字
        let amount = trimmed
            .parse::<i32>()
            .map(|v| v as u64)
            .map_err(|_| not_numeric())?;

        if unit == 0 || amount == 0 || amount % unit != 0 {
            return Err(LottoError::InvalidPurchaseUnit { amount, unit });
        }
        Ok(Self { amount, unit })
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn unit(&self) -> u64 {
        self.unit
    }

    pub fn ticket_count(&self) -> usize {
        (self.amount / self.unit) as usize
    }
}
