use crate::utils::error::{LottoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 45;

/// A single lotto number, always within `MIN_NUMBER..=MAX_NUMBER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct LottoNumber(u8);

impl LottoNumber {
    pub fn new(value: i64) -> Result<Self> {
        if value < i64::from(MIN_NUMBER) || value > i64::from(MAX_NUMBER) {
            return Err(LottoError::NumberOutOfRange {
                value,
                min: MIN_NUMBER,
                max: MAX_NUMBER,
            });
        }
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for LottoNumber {
    type Error = LottoError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<LottoNumber> for u8 {
    fn from(number: LottoNumber) -> Self {
        number.0
    }
}

impl FromStr for LottoNumber {
    type Err = LottoError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        let value = token.parse::<i64>().map_err(|_| LottoError::NotANumber {
            token: token.to_string(),
        })?;
        Self::new(value)
    }
}

impl fmt::Display for LottoNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
