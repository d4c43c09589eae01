use shared::error::ApiException;
use thiserror::Error;

use crate::validation::ValidationError;

pub const STATUS_UNREACHABLE_MESSAGE: &str = "Cannot connect to server";

/// Failure of a single remote call, before it is turned into an
/// [`OperationError`] for display.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Server(#[from] ApiException),
    #[error("invalid server url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("{0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorOrigin {
    Status,
    Train,
    Predict,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Connectivity,
    TrainingFailure,
    PredictionFailure,
    ValidationFailure,
}

impl ErrorOrigin {
    pub fn kind(self) -> ErrorKind {
        match self {
            Self::Status => ErrorKind::Connectivity,
            Self::Train => ErrorKind::TrainingFailure,
            Self::Predict => ErrorKind::PredictionFailure,
            Self::Validation => ErrorKind::ValidationFailure,
        }
    }
}

/// The single user-visible error the analyzer holds at a time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct OperationError {
    origin: ErrorOrigin,
    message: String,
}

impl OperationError {
    pub fn new(origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            origin,
            message: message.into(),
        }
    }

    pub fn status_unreachable() -> Self {
        Self::new(ErrorOrigin::Status, STATUS_UNREACHABLE_MESSAGE)
    }

    pub fn training(err: &ServiceError) -> Self {
        Self::new(ErrorOrigin::Train, format!("Training failed: {err}"))
    }

    pub fn prediction(err: &ServiceError) -> Self {
        Self::new(ErrorOrigin::Predict, format!("Analysis failed: {err}"))
    }

    pub fn validation(err: ValidationError) -> Self {
        Self::new(ErrorOrigin::Validation, err.to_string())
    }

    pub fn origin(&self) -> ErrorOrigin {
        self.origin
    }

    pub fn kind(&self) -> ErrorKind {
        self.origin.kind()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
