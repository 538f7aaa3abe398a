use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatavizError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatusError { url: String, status: u16 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Failed to bind {addr}: {message}")]
    BindError { addr: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Filesystem,
    Configuration,
    Server,
}

impl DatavizError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::HttpStatusError { .. } => ErrorCategory::Network,
            Self::CsvError(_) | Self::ValidationError { .. } => ErrorCategory::Data,
            Self::IoError(_) => ErrorCategory::Filesystem,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::BindError { .. } => ErrorCategory::Server,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(e) if e.is_timeout() => "The data source timed out".to_string(),
            Self::ApiError(e) if e.is_connect() => "Could not connect to the data source".to_string(),
            Self::ApiError(_) => "Request to the data source failed".to_string(),
            Self::HttpStatusError { status: 404, url } => {
                format!("No data published at {}", url)
            }
            Self::HttpStatusError { status, .. } => {
                format!("The data source answered with HTTP {}", status)
            }
            Self::CsvError(e) => format!("The downloaded data is not valid CSV: {}", e),
            Self::IoError(e) => format!("File operation failed: {}", e),
            Self::ValidationError { message } => message.clone(),
            Self::BindError { addr, .. } => format!("Cannot listen on {}", addr),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and the --base-url value",
            ErrorCategory::Data => "Check the --season and --summary-level values",
            ErrorCategory::Filesystem => "Check that the output path exists and is writable",
            ErrorCategory::Configuration => "Fix the command line flags or the config file",
            ErrorCategory::Server => "Pick another --port or stop the process using it",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Network => 3,
            ErrorCategory::Data | ErrorCategory::Filesystem | ErrorCategory::Server => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DatavizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_and_exit_codes() {
        let err = DatavizError::HttpStatusError {
            url: "http://example.com/x.csv".to_string(),
            status: 404,
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_friendly_message().contains("x.csv"));

        let err = DatavizError::MissingConfigError {
            field: "export.season".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 2);

        let err = DatavizError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::Filesystem);
        assert_eq!(err.exit_code(), 1);

        let err = DatavizError::BindError {
            addr: "localhost:8000".to_string(),
            message: "Address already in use".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Server);
        assert_eq!(err.user_friendly_message(), "Cannot listen on localhost:8000");
    }
}
