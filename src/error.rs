//! Error types for the character API
//!
//! Every failure is a `CharacterError` value. The `IntoResponse` impl below is
//! the only place where error kinds become HTTP status codes.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Character Error Enum ==
/// Unified error type for the character API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CharacterError {
    /// Missing, empty or incorrect auth header
    #[error("Unauthorized")]
    Unauthorized,

    /// Token request with the wrong username or password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Operation on an id that is not in the store
    #[error("Character with id {0} not found")]
    NotFound(String),

    /// Add on an id that is already in the store
    #[error("Character with id {0} already exists")]
    AlreadyExists(String),

    /// Identifier is not a single uppercase ASCII letter
    #[error("Invalid character: {0}, must be a single upper character")]
    InvalidCharacter(String),

    /// Value is outside 1..=255
    #[error("Invalid number: {0}, must be between 1 and 255")]
    InvalidNumber(i32),

    /// Malformed or missing request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl CharacterError {
    /// HTTP status code this error kind maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CharacterError::Unauthorized => StatusCode::UNAUTHORIZED,
            CharacterError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            CharacterError::NotFound(_) => StatusCode::NOT_FOUND,
            CharacterError::AlreadyExists(_) => StatusCode::CONFLICT,
            CharacterError::InvalidCharacter(_)
            | CharacterError::InvalidNumber(_)
            | CharacterError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// == Extractor Rejections ==
impl From<QueryRejection> for CharacterError {
    fn from(rejection: QueryRejection) -> Self {
        CharacterError::InvalidRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CharacterError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the character API.
pub type Result<T> = std::result::Result<T, CharacterError>;
