use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    ForbiddenOperation(String),
    #[error("request to the backend failed")]
    ApiRequestError(#[source] reqwest::Error),
    #[error("backend rejected the request ({status}): {message}")]
    ApiResponseError { status: u16, message: String },
    #[error("failed to convert a backend record: {0}")]
    ConversionEntityError(String),
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Message suitable for showing to an operator, preferring the
    /// server-provided text when the backend rejected a call.
    pub fn operator_message(&self) -> String {
        match self {
            AppError::ApiResponseError { message, .. } => message.clone(),
            AppError::ApiRequestError(_) => {
                "Could not reach the reservation backend. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}
