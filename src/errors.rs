use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Rejected by server: {0}")]
    ValidationRejected(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Please answer all questions before submitting ({answered}/{total} answered)")]
    IncompleteAnswers { answered: usize, total: usize },

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Question index {index} is out of range (quiz has {len} questions)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("A submission is already in progress")]
    SubmitInFlight,

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::InvalidCredentials(_) => "INVALID_CREDENTIALS",
            AppError::NetworkError(_) => "NETWORK_ERROR",
            AppError::ValidationRejected(_) => "VALIDATION_REJECTED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ServerError(_) => "SERVER_ERROR",
            AppError::IncompleteAnswers { .. } => "INCOMPLETE_ANSWERS",
            AppError::InvalidOption(_) => "INVALID_OPTION",
            AppError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            AppError::SubmitInFlight => "SUBMIT_IN_FLIGHT",
            AppError::InvalidState(_) => "INVALID_STATE",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::StorageError(_) => "STORAGE_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// True for failures detected before anything was sent to the API.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            AppError::IncompleteAnswers { .. }
                | AppError::InvalidOption(_)
                | AppError::IndexOutOfRange { .. }
                | AppError::SubmitInFlight
                | AppError::InvalidState(_)
                | AppError::ValidationError(_)
        )
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::InternalError(format!("Malformed response: {}", err))
        } else {
            AppError::NetworkError(err.to_string())
        }
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("JSON error: {}", err))
    }
}
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StorageError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
