pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::config::toml_config::GameConfig;
pub use crate::core::{
    calculator::StringAddCalculator,
    game::LottoGame,
    generator::{FixedNumberGenerator, RandomNumberGenerator},
};
pub use crate::domain::{lotto::Lotto, lotto_number::LottoNumber, numbers::Numbers};
pub use crate::utils::error::{LottoError, Result};
