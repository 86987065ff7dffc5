use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The destination root is not an existing directory. Raised before any mutation.
    #[error("destination path does not exist: {0}")]
    DestinationNotFound(String),
    /// The executor returned a non-zero status. Steps that ran before the failure
    /// are not rolled back.
    #[error("symlink executor exited with status {status}: {stderr}")]
    ExecutorFailure { status: i32, stderr: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ApiError {
    #[must_use]
    pub const fn error_id(&self) -> ErrorId {
        match self {
            ApiError::DestinationNotFound(_) => ErrorId::E_DESTINATION_NOT_FOUND,
            ApiError::ExecutorFailure { .. } => ErrorId::E_EXECUTOR,
            ApiError::InvalidInput(_) => ErrorId::E_INVALID_INPUT,
        }
    }

    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        exit_code_for(self.error_id())
    }
}

impl From<crate::types::errors::Error> for ApiError {
    fn from(e: crate::types::errors::Error) -> Self {
        match e.kind {
            crate::types::errors::ErrorKind::InvalidInput => ApiError::InvalidInput(e.msg),
        }
    }
}

// Stable identifiers emitted in facts; keep SCREAMING_SNAKE_CASE to match emitted IDs.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorId {
    E_DESTINATION_NOT_FOUND,
    E_EXECUTOR,
    E_INVALID_INPUT,
    E_GENERIC,
}

#[must_use]
pub const fn id_str(id: ErrorId) -> &'static str {
    match id {
        ErrorId::E_DESTINATION_NOT_FOUND => "E_DESTINATION_NOT_FOUND",
        ErrorId::E_EXECUTOR => "E_EXECUTOR",
        ErrorId::E_INVALID_INPUT => "E_INVALID_INPUT",
        ErrorId::E_GENERIC => "E_GENERIC",
    }
}

#[must_use]
pub const fn exit_code_for(id: ErrorId) -> i32 {
    match id {
        ErrorId::E_DESTINATION_NOT_FOUND => 10,
        ErrorId::E_EXECUTOR => 20,
        ErrorId::E_INVALID_INPUT => 30,
        ErrorId::E_GENERIC => 1,
    }
}
