//! Server error types

use axum::{http::StatusCode, response::Json};
use serde::Serialize;
use workstate_core::CoreError;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error enum
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Email already registered")]
    DuplicateUser,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User workflow state not found")]
    NotFound,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CoreError> for ServerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DuplicateUser(_) => ServerError::DuplicateUser,
            CoreError::InvalidCredentials => ServerError::InvalidCredentials,
            CoreError::NotFound(_) => ServerError::NotFound,
            CoreError::InvalidToken(msg) => ServerError::Unauthorized(msg),
            CoreError::TokenExpired => ServerError::Unauthorized("token expired".to_string()),
            CoreError::Invalid(msg) => ServerError::InvalidInput(msg),
            CoreError::Internal(msg) => ServerError::Internal(msg),
        }
    }
}

/// Error response DTO
#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: String,
    pub request_id: String,
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::DuplicateUser
            | ServerError::InvalidCredentials
            | ServerError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ServerError::DuplicateUser => "DUPLICATE_USER",
            ServerError::InvalidCredentials => "INVALID_CREDENTIALS",
            ServerError::NotFound => "NOT_FOUND",
            ServerError::Unauthorized(_) => "UNAUTHORIZED",
            ServerError::InvalidInput(_) => "INVALID_INPUT",
            ServerError::Internal(_) => "INTERNAL",
        }
    }

    pub fn to_http_response(&self, request_id: String) -> (StatusCode, Json<ErrorResponse>) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(request_id = %request_id, error = %self, "request failed");
        } else {
            tracing::debug!(request_id = %request_id, error = %self, "request rejected");
        }

        let response = ErrorResponse {
            detail: self.to_string(),
            code: self.code().to_string(),
            request_id,
        };

        (status, Json(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_statuses() {
        let cases = [
            (CoreError::DuplicateUser("a@x.com".into()), StatusCode::BAD_REQUEST, "DUPLICATE_USER"),
            (CoreError::InvalidCredentials, StatusCode::BAD_REQUEST, "INVALID_CREDENTIALS"),
            (CoreError::NotFound("a@x.com".into()), StatusCode::NOT_FOUND, "NOT_FOUND"),
            (CoreError::TokenExpired, StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            (CoreError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
        ];
        for (core, status, code) in cases {
            let err = ServerError::from(core);
            assert_eq!(err.status_code(), status);
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn client_messages_do_not_leak_email() {
        let err = ServerError::from(CoreError::NotFound("a@x.com".into()));
        let (_, Json(body)) = err.to_http_response("req-1".into());
        assert_eq!(body.detail, "User workflow state not found");
        assert_eq!(body.request_id, "req-1");
    }
}
