use thiserror::Error;

#[derive(Error, Debug)]
pub enum CustomerError {
    #[error("Invalid argument: {field} cannot be empty")]
    InvalidArgument { field: String },

    #[error("Argument out of range: {field} = {value}")]
    OutOfRange { field: String, value: String },

    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("Record {row} is invalid: {source}")]
    InvalidRecord {
        row: usize,
        #[source]
        source: Box<CustomerError>,
    },

    #[error("Invalid string format: '{specifier}'")]
    InvalidFormat { specifier: String },

    #[error("Invalid format template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("Format item index {index} is out of range ({count} argument(s))")]
    ArgumentIndexOutOfRange { index: usize, count: usize },

    #[error("Unknown locale: '{code}'")]
    UnknownLocale { code: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 輸入資料不合法
    Validation,
    /// 格式字串或模板錯誤
    Format,
    Config,
    Io,
}

impl CustomerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CustomerError::InvalidArgument { .. }
            | CustomerError::OutOfRange { .. }
            | CustomerError::InvalidNumber { .. }
            | CustomerError::InvalidRecord { .. } => ErrorCategory::Validation,
            CustomerError::InvalidFormat { .. }
            | CustomerError::InvalidTemplate { .. }
            | CustomerError::ArgumentIndexOutOfRange { .. } => ErrorCategory::Format,
            CustomerError::UnknownLocale { .. }
            | CustomerError::ConfigError { .. }
            | CustomerError::ConfigValidationError { .. }
            | CustomerError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            CustomerError::IoError(_)
            | CustomerError::CsvError(_)
            | CustomerError::SerializationError(_) => ErrorCategory::Io,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Validation => format!("Customer data rejected: {}", self),
            ErrorCategory::Format => format!(
                "{} (valid specifiers: N, C, R, NC, NR, CR, NCR)",
                self
            ),
            ErrorCategory::Config => format!("Configuration problem: {}", self),
            ErrorCategory::Io => format!("Could not read or write data: {}", self),
        }
    }

    /// Process exit code used by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation => 2,
            ErrorCategory::Format => 3,
            ErrorCategory::Config => 4,
            ErrorCategory::Io => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, CustomerError>;
