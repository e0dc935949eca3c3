use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Pattern compilation failed: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Fetch of {url} failed: {message}")]
    FetchError { url: String, message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤嚴重程度，決定 CLI 的退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScoutError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ScoutError::HttpError(_) | ScoutError::FetchError { .. } => ErrorSeverity::Medium,
            ScoutError::CsvError(_)
            | ScoutError::ConfigValidationError { .. }
            | ScoutError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            ScoutError::IoError(_)
            | ScoutError::SerializationError(_)
            | ScoutError::PatternError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScoutError::HttpError(_) | ScoutError::FetchError { .. } => {
                "Check network connectivity and the vendor URL, then run again"
            }
            ScoutError::CsvError(_) => {
                "Make sure the vendor list is a CSV file with a header row and vendor,url columns"
            }
            ScoutError::IoError(_) => "Check that the input file exists and the output path is writable",
            ScoutError::SerializationError(_) => "Try the plain text report format instead",
            ScoutError::PatternError(_) => "Check the extra denylist keywords and pattern settings",
            ScoutError::ConfigValidationError { .. }
            | ScoutError::InvalidConfigValueError { .. } => {
                "Review the configuration values and fix the reported field"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = ScoutError::ConfigValidationError {
            field: "source.vendors_file".to_string(),
            message: "not found".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(
            err.to_string(),
            "Configuration error in source.vendors_file: not found"
        );
    }

    #[test]
    fn test_fetch_error_message_carries_url() {
        let err = ScoutError::FetchError {
            url: "https://example.com/notes".to_string(),
            message: "HTTP status 500".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.to_string().contains("https://example.com/notes"));
    }
}
