use thiserror::Error;

#[derive(Error, Debug)]
pub enum LottoError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Not a number: '{token}'")]
    NotANumber { token: String },

    #[error("Negative numbers are not allowed: {value}")]
    NegativeNumber { value: i64 },

    #[error("Malformed custom delimiter header: {input:?}")]
    MalformedDelimiter { input: String },

    #[error("Lotto ticket has no numbers")]
    EmptyTicket,

    #[error("Lotto ticket must have {expected} numbers, got {actual}")]
    InvalidTicketSize { expected: usize, actual: usize },

    #[error("Lotto numbers must not contain duplicates")]
    DuplicateNumbers,

    #[error("Lotto number {value} is out of range ({min}..={max})")]
    NumberOutOfRange { value: i64, min: u8, max: u8 },

    #[error("Purchase amount is empty")]
    EmptyPurchaseAmount,

    #[error("Purchase amount must contain digits only: '{input}'")]
    PurchaseAmountNotNumeric { input: String },

    #[error("Purchase amount {amount} is not a positive multiple of {unit}")]
    InvalidPurchaseUnit { amount: u64, unit: u64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, LottoError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Ticket,
    Purchase,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LottoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LottoError::EmptyInput
            | LottoError::NotANumber { .. }
            | LottoError::NegativeNumber { .. }
            | LottoError::MalformedDelimiter { .. } => ErrorCategory::Input,
            LottoError::EmptyTicket
            | LottoError::InvalidTicketSize { .. }
            | LottoError::DuplicateNumbers
            | LottoError::NumberOutOfRange { .. } => ErrorCategory::Ticket,
            LottoError::EmptyPurchaseAmount
            | LottoError::PurchaseAmountNotNumeric { .. }
            | LottoError::InvalidPurchaseUnit { .. } => ErrorCategory::Purchase,
            LottoError::ConfigValidationError { .. }
            | LottoError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            LottoError::IoError(_)
            | LottoError::SerializationError(_)
            | LottoError::ProcessingError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Ticket | ErrorCategory::Purchase => {
                ErrorSeverity::Medium
            }
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            LottoError::EmptyInput => "輸入值為空".to_string(),
            LottoError::NotANumber { token } => format!("'{}' 不是數字", token),
            LottoError::NegativeNumber { value } => format!("不允許負數: {}", value),
            LottoError::MalformedDelimiter { .. } => "自訂分隔符格式錯誤".to_string(),
            LottoError::EmptyTicket => "樂透號碼為空".to_string(),
            LottoError::InvalidTicketSize { expected, actual } => {
                format!("樂透必須是 {} 個號碼 (目前 {} 個)", expected, actual)
            }
            LottoError::DuplicateNumbers => "樂透號碼不可重複".to_string(),
            LottoError::NumberOutOfRange { value, min, max } => {
                format!("號碼 {} 超出範圍 {}~{}", value, min, max)
            }
            LottoError::EmptyPurchaseAmount => "請重新輸入金額".to_string(),
            LottoError::PurchaseAmountNotNumeric { .. } => "金額只能輸入數字".to_string(),
            LottoError::InvalidPurchaseUnit { unit, .. } => {
                format!("樂透購買單位為 {} 元", unit)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Use non-negative integers separated by ',' or ':', or a '//<d>\\n' header",
            ErrorCategory::Ticket => "Enter six distinct numbers between 1 and 45",
            ErrorCategory::Purchase => "Enter a positive amount in multiples of the ticket price",
            ErrorCategory::Configuration => "Check the config file and command line flags",
            ErrorCategory::System => "Re-run with --verbose and inspect the logs",
        }
    }
}
