//! Request DTOs for the character API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for `POST /token`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TokenRequest {
    /// Login name
    pub username: String,
    /// Login password
    pub password: String,
}

/// Query string of `PUT`/`POST /character/:id`
///
/// `number` may instead arrive as a bare JSON integer body, so it is optional
/// here and resolved by the handler.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NumberParams {
    /// Value to store for the character
    #[serde(default)]
    pub number: Option<i32>,
}
