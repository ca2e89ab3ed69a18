use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZooError {
    #[error("File '{path}' not found.")]
    FileNotFound { path: String },

    #[error("Error reading file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("line {line}: {reason} ({content})")]
    MalformedLine {
        line: u64,
        content: String,
        reason: String,
    },

    #[error("Invalid input format. Please use format 'day month time-range'")]
    InvalidInput,

    #[error("Invalid month '{month}'. Please enter a valid month name.")]
    InvalidMonth { month: String },

    #[error("Invalid time format. Please use format 'start-end' (e.g., '9-17')")]
    InvalidTimeFormat { value: String },

    #[error("{reason}")]
    InvalidTimeRange { reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ZooError {
    /// 只有單行資料錯誤可以跳過，其餘錯誤都會中止本次查詢
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ZooError::MalformedLine { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ZooError::MalformedLine { content, reason, .. } => {
                format!(
                    "Warning: Could not process animal data: {}. Error: {}",
                    content, reason
                )
            }
            // IoError already reads "Error reading file: ..."
            ZooError::IoError(_) => self.to_string(),
            other => format!("Error: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, ZooError>;
