use crate::core::report::OutputFormat;
use crate::domain::money::DEFAULT_TICKET_PRICE;
use crate::utils::error::{LottoError, Result};
use crate::utils::validation::{validate_one_of, validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub game: GameSection,
    #[serde(default)]
    pub draw: DrawSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSection {
    #[serde(default = "default_ticket_price")]
    pub ticket_price: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawSection {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_ticket_price() -> u64 {
    DEFAULT_TICKET_PRICE
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for GameSection {
    fn default() -> Self {
        Self {
            ticket_price: default_ticket_price(),
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl GameConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LottoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LottoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LOTTO_SEED})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LottoError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn ticket_price(&self) -> u64 {
        self.game.ticket_price
    }

    pub fn seed(&self) -> Option<u64> {
        self.draw.seed
    }

    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_name(&self.output.format).unwrap_or_default()
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("game.ticket_price", self.game.ticket_price, 1)?;
        validate_one_of("output.format", &self.output.format, &OUTPUT_FORMATS)?;
        Ok(())
    }
}
