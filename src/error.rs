use serde_json::Value as JsonValue;
use thiserror::Error;
use tracing::warn;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid metric value: {metric} = {value}")]
    InvalidMetric { metric: String, value: f64 },

    #[error("invalid date: {message}")]
    InvalidDate { message: String },

    #[error("invalid time: {message}")]
    InvalidTime { message: String },

    #[error("validation failed: {message}")]
    Validation {
        message: String,
        details: Option<JsonValue>,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn invalid_metric(metric: impl Into<String>, value: f64) -> Self {
        let metric = metric.into();
        warn!(target: "app::score", %metric, value, "rejected metric value");
        AppError::InvalidMetric { metric, value }
    }

    pub fn invalid_date(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "app::trend", %message, "invalid date");
        AppError::InvalidDate { message }
    }

    pub fn invalid_time(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "app::reminder", %message, "invalid time");
        AppError::InvalidTime { message }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "app::validation", %message, "validation error");
        AppError::Validation {
            message,
            details: None,
        }
    }

    pub fn validation_with_details(message: impl Into<String>, details: JsonValue) -> Self {
        let message = message.into();
        warn!(target: "app::validation", %message, details = %details, "validation error with details");
        AppError::Validation {
            message,
            details: Some(details),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "app::other", %message, "other error");
        AppError::Other(message)
    }
}
