use crate::utils::error::{LottoError, Result};
use regex::Regex;

const DEFAULT_DELIMITERS: [char; 2] = [',', ':'];
const CUSTOM_PREFIX: &str = "//";
const CUSTOM_HEADER: &str = r"(?s)^//(.)\n(.*)$";

/// Splits calculator input on `,` and `:`, or on a custom delimiter declared
/// with a `//<d>\n` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringSplitter {
    input: String,
}

impl StringSplitter {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    pub fn split(&self) -> Result<Vec<String>> {
        if self.input.trim().is_empty() {
            return Err(LottoError::EmptyInput);
        }

        if !self.input.starts_with(CUSTOM_PREFIX) {
            return Ok(split_on(&self.input, &DEFAULT_DELIMITERS));
        }

        let header = Regex::new(CUSTOM_HEADER).map_err(|e| LottoError::ProcessingError {
            message: format!("Invalid delimiter pattern: {}", e),
        })?;
        let caps = header
            .captures(&self.input)
            .ok_or_else(|| LottoError::MalformedDelimiter {
                input: self.input.clone(),
            })?;
        let custom = caps[1].chars().next().ok_or_else(|| LottoError::MalformedDelimiter {
            input: self.input.clone(),
        })?;
        let body = &caps[2];
        if body.trim().is_empty() {
            return Err(LottoError::EmptyInput);
        }

        tracing::debug!("Using custom delimiter {:?}", custom);
        let delimiters = [DEFAULT_DELIMITERS[0], DEFAULT_DELIMITERS[1], custom];
        Ok(split_on(body, &delimiters))
    }
}

fn split_on(body: &str, delimiters: &[char]) -> Vec<String> {
    body.split(|c: char| delimiters.contains(&c))
        .map(|token| token.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delimiters() {
        let tokens = StringSplitter::new("1,2:3").split().unwrap();
        assert_eq!(tokens, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_custom_delimiter() {
        let tokens = StringSplitter::new("//;\n1;2,3").split().unwrap();
        assert_eq!(tokens, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_tokens_are_trimmed_and_empty_tokens_kept() {
        let tokens = StringSplitter::new(" 1 ,,2").split().unwrap();
        assert_eq!(tokens, vec!["1", "", "2"]);
    }

    #[test]
    fn test_blank_input() {
        assert!(matches!(StringSplitter::new("").split(), Err(LottoError::EmptyInput)));
        assert!(matches!(StringSplitter::new("  ").split(), Err(LottoError::EmptyInput)));
        assert!(matches!(StringSplitter::new("//;\n").split(), Err(LottoError::EmptyInput)));
    }

    #[test]
    fn test_custom_delimiter_keeps_later_newlines_in_body() {
        let tokens = StringSplitter::new("//|\n4|5\n").split().unwrap();
        assert_eq!(tokens, vec!["4", "5"]);
    }

    #[test]
    fn test_malformed_header() {
        assert!(matches!(
            StringSplitter::new("//;1;2").split(),
            Err(LottoError::MalformedDelimiter { .. })
        ));
    }
}
