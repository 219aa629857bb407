use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Content store request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Content store returned {status} for {collection}")]
    StoreStatusError { collection: String, status: u16 },

    #[error("Record '{id}' not found in {collection}")]
    NotFound { collection: String, id: String },

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Content,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::ApiError(_) | SiteError::StoreStatusError { .. } => ErrorCategory::Network,
            SiteError::NotFound { .. } | SiteError::SerializationError(_) => {
                ErrorCategory::Content
            }
            SiteError::ConfigError { .. }
            | SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SiteError::ValidationError { .. } => ErrorCategory::Input,
            SiteError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 找不到記錄只是空狀態
            SiteError::NotFound { .. } => ErrorSeverity::Low,
            SiteError::ApiError(_) | SiteError::StoreStatusError { .. } => ErrorSeverity::Medium,
            SiteError::SerializationError(_) | SiteError::ValidationError { .. } => {
                ErrorSeverity::High
            }
            SiteError::ConfigError { .. }
            | SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorSeverity::High,
            SiteError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 可以透過重新請求恢復的錯誤
    pub fn is_retryable(&self) -> bool {
        match self {
            SiteError::ApiError(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            SiteError::StoreStatusError { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::ApiError(_) => {
                "Check the content store endpoint and your network connection, then retry".to_string()
            }
            SiteError::StoreStatusError { status, .. } if *status == 401 || *status == 403 => {
                "Check the store api_key in your configuration".to_string()
            }
            SiteError::StoreStatusError { .. } => "Retry later; the content store reported an error".to_string(),
            SiteError::NotFound { collection, .. } => {
                format!("Browse the {} listing for a valid link", collection)
            }
            SiteError::SerializationError(_) => {
                "The store returned records in an unexpected shape; check the collection schema".to_string()
            }
            SiteError::IoError(_) => "Check that the file exists and is readable".to_string(),
            SiteError::ConfigError { .. }
            | SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => {
                "Fix the configuration file or command line flags and try again".to_string()
            }
            SiteError::ValidationError { .. } => "Correct the input and submit again".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::ApiError(_) | SiteError::StoreStatusError { .. } => {
                "We couldn't load this content right now.".to_string()
            }
            SiteError::NotFound { .. } => "The page you're looking for doesn't exist.".to_string(),
            SiteError::ValidationError { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
