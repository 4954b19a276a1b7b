use crate::domain::lotto::Lotto;
use crate::utils::error::Result;

/// Source of purchased tickets.
pub trait NumberGenerator {
    fn generate(&mut self) -> Result<Lotto>;
}
