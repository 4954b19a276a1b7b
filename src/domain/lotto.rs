use crate::domain::lotto_number::LottoNumber;
use crate::utils::error::{LottoError, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

pub const LOTTO_SIZE: usize = 6;

/// One lotto ticket: exactly six distinct numbers, kept in the order given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Lotto {
    numbers: Vec<LottoNumber>,
}

impl Lotto {
    pub fn new(numbers: Vec<LottoNumber>) -> Result<Self> {
        validate_empty(&numbers)?;
        validate_size(&numbers)?;
        validate_duplicate(&numbers)?;
        Ok(Self { numbers })
    }

    pub fn from_values(values: &[i64]) -> Result<Self> {
        let numbers = values
            .iter()
            .map(|&value| LottoNumber::new(value))
            .collect::<Result<Vec<_>>>()?;
        Self::new(numbers)
    }

    /// Counts how many of `winning` appear on this ticket.
    pub fn match_count(&self, winning: &[LottoNumber]) -> usize {
        winning.iter().filter(|number| self.contains(number)).count()
    }

    pub fn contains(&self, number: &LottoNumber) -> bool {
        self.numbers.contains(number)
    }

    pub fn numbers(&self) -> &[LottoNumber] {
        &self.numbers
    }
}

fn validate_empty(numbers: &[LottoNumber]) -> Result<()> {
    if numbers.is_empty() {
        return Err(LottoError::EmptyTicket);
    }
    Ok(())
}

fn validate_size(numbers: &[LottoNumber]) -> Result<()> {
    if numbers.len() != LOTTO_SIZE {
        return Err(LottoError::InvalidTicketSize {
            expected: LOTTO_SIZE,
            actual: numbers.len(),
        });
    }
    Ok(())
}

fn validate_duplicate(numbers: &[LottoNumber]) -> Result<()> {
    let distinct: HashSet<&LottoNumber> = numbers.iter().collect();
    if distinct.len() != LOTTO_SIZE {
        return Err(LottoError::DuplicateNumbers);
    }
    Ok(())
}

/// Parses comma separated numbers such as `"1, 2, 3, 4, 5, 6"`.
impl FromStr for Lotto {
    type Err = LottoError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(LottoError::EmptyTicket);
        }
        let numbers = s
            .split(',')
            .map(str::parse::<LottoNumber>)
            .collect::<Result<Vec<_>>>()?;
        Self::new(numbers)
    }
}

impl fmt::Display for Lotto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .numbers
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{}]", joined)
    }
}
