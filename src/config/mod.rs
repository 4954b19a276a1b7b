pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "lotto")]
#[command(about = "Lotto simulation and string add calculator")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Sum numbers separated by ',' or ':' (or a "//<d>\n" custom delimiter)
    Sum {
        /// Expression to sum; `\n` escapes are expanded
        expression: String,
    },
    /// Buy tickets and check them against the winning numbers
    Play {
        /// Purchase amount
        #[arg(short, long)]
        amount: String,

        /// Winning numbers, e.g. "1,2,3,4,5,6"; prompted for when omitted
        #[arg(short, long)]
        winning: Option<String>,

        /// Seed for reproducible tickets
        #[arg(long)]
        seed: Option<u64>,

        /// Path to TOML configuration file
        #[arg(short, long)]
        config: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Sum { .. } => Ok(()),
            Command::Play {
                winning, config, ..
            } => {
                if let Some(winning) = winning {
                    validate_non_empty_string("winning", winning)?;
                }
                if let Some(config) = config {
                    validate_non_empty_string("config", config)?;
                }
                Ok(())
            }
        }
    }
}
