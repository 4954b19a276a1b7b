use crate::utils::error::{LottoError, Result};

/// Non-negative integers parsed from calculator tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numbers {
    values: Vec<u32>,
}

impl Numbers {
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        if tokens.is_empty() {
            return Err(LottoError::EmptyInput);
        }

        let values = tokens
            .iter()
            .map(|token| parse_number(token.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { values })
    }

    pub fn sum(&self) -> u64 {
        self.values.iter().map(|&v| u64::from(v)).sum()
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }
}

fn parse_number(token: &str) -> Result<u32> {
    let value = token.parse::<i32>().map_err(|_| LottoError::NotANumber {
        token: token.to_string(),
    })?;
    u32::try_from(value).map_err(|_| LottoError::NegativeNumber {
        value: i64::from(value),
    })
}
