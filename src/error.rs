use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    TaskNotFound,
    ApplicantNotFound,
    HelperAlreadySelected,
    InvalidFilter,
    UnknownView,
    CatalogError,
    ConfigError,
    ValidationError,
    SubmissionFailed,
    IoError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::ApplicantNotFound => "APPLICANT_NOT_FOUND",
            Self::HelperAlreadySelected => "HELPER_ALREADY_SELECTED",
            Self::InvalidFilter => "INVALID_FILTER",
            Self::UnknownView => "UNKNOWN_VIEW",
            Self::CatalogError => "CATALOG_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::SubmissionFailed => "SUBMISSION_FAILED",
            Self::IoError => "IO_ERROR",
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TaskhelperError {
    pub code: ErrorCode,
    pub message: String,
}

impl TaskhelperError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn task_not_found(id: u32) -> Self {
        Self::new(ErrorCode::TaskNotFound, format!("Task not found: {id}"))
    }

    pub fn applicant_not_found(id: u32) -> Self {
        Self::new(
            ErrorCode::ApplicantNotFound,
            format!("Applicant not found: {id}"),
        )
    }

    pub fn helper_already_selected(name: &str) -> Self {
        Self::new(
            ErrorCode::HelperAlreadySelected,
            format!("A helper has already been selected: {name}"),
        )
    }

    /// Unknown value for one filter axis, e.g. `--price 1-2`.
    pub fn invalid_filter(axis: &str, value: &str, allowed: &[&str]) -> Self {
        Self::new(
            ErrorCode::InvalidFilter,
            format!(
                "Invalid {axis} '{value}'. Expected one of: {}",
                allowed.join(", ")
            ),
        )
    }

    pub fn unknown_view(view: &str, allowed: &[&str]) -> Self {
        Self::new(
            ErrorCode::UnknownView,
            format!("Unknown view '{view}'. Expected one of: {}", allowed.join(", ")),
        )
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CatalogError, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn submission(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SubmissionFailed, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::IoError, message)
    }
}
