use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoanCheckError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV report error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Division by zero: installments must be greater than zero")]
    DivisionByZero,

    #[error("Malformed record at line {line}: {message}")]
    MalformedRecord { line: usize, message: String },

    #[error("Case file not found: {path}")]
    SourceNotFound { path: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
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

impl LoanCheckError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SerializationError(_)
            | Self::MalformedRecord { .. }
            | Self::SourceNotFound { .. } => ErrorCategory::Input,
            Self::DivisionByZero => ErrorCategory::Arithmetic,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) | Self::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CsvError(_) => ErrorSeverity::Medium,
            Self::MalformedRecord { .. }
            | Self::SerializationError(_)
            | Self::SourceNotFound { .. }
            | Self::DivisionByZero
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check file permissions and available disk space",
            Self::SerializationError(_) | Self::MalformedRecord { .. } => {
                "Regenerate the case file with `loan-check generate` or fix the offending line"
            }
            Self::CsvError(_) => "Check that the report path is writable",
            Self::DivisionByZero => "Use an installment count greater than zero",
            Self::SourceNotFound { .. } => {
                "Run `loan-check generate` first or pass an existing file with --input"
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the configuration file and command-line arguments"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MalformedRecord { line, .. } => {
                format!("Line {} of the case file is not a valid case record", line)
            }
            Self::SourceNotFound { path } => format!("Case file '{}' does not exist", path),
            Self::DivisionByZero => "A case has zero installments".to_string(),
            other => other.to_string(),
        }
    }

    /// 依嚴重程度對應的程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, LoanCheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_classification() {
        let err = LoanCheckError::MalformedRecord {
            line: 7,
            message: "missing field `income`".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("line 7"));
        assert!(err.user_friendly_message().contains("Line 7"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: LoanCheckError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.exit_code(), 3);
    }
}
