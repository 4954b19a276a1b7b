use crate::domain::numbers::Numbers;
use crate::domain::splitter::StringSplitter;
use crate::utils::error::Result;

pub struct StringAddCalculator;

impl StringAddCalculator {
    pub fn calculate(input: &str) -> Result<u64> {
        let tokens = StringSplitter::new(input).split()?;
        tracing::debug!("Split input into {} tokens", tokens.len());
        let numbers = Numbers::new(&tokens)?;
        Ok(numbers.sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::LottoError;

    #[test]
    fn test_calculate() {
        assert_eq!(StringAddCalculator::calculate("1,2,3").unwrap(), 6);
        assert_eq!(StringAddCalculator::calculate("1,2:3").unwrap(), 6);
        assert_eq!(StringAddCalculator::calculate("//;\n1;2;3").unwrap(), 6);
        assert_eq!(StringAddCalculator::calculate("7").unwrap(), 7);
    }

    #[test]
    fn test_calculate_errors() {
        assert!(matches!(
            StringAddCalculator::calculate("-1"),
            Err(LottoError::NegativeNumber { value: -1 })
        ));
        assert!(matches!(
            StringAddCalculator::calculate(""),
            Err(LottoError::EmptyInput)
        ));
        assert!(matches!(
            StringAddCalculator::calculate("1,x"),
            Err(LottoError::NotANumber { .. })
        ));
    }
}
