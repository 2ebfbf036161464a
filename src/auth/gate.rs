//! Auth Gate Middleware
//!
//! Checks the `X-Auth-Token` header before a protected handler runs. The router
//! only attaches this middleware to routes the route table marks as requiring
//! auth, so the gate itself never needs to know about anonymous routes.

use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::auth::{ACCEPTED_TOKEN, AUTH_HEADER_NAME};
use crate::error::CharacterError;

/// Identity attached to requests that passed the gate.
///
/// Carries no claims or roles; its presence only means "authenticated".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthenticatedIdentity;

/// Result of inspecting the auth header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Header carried the accepted token
    Success(AuthenticatedIdentity),
    /// Header was present but empty, so no authentication was attempted
    NoResult,
    /// Header missing or wrong
    Fail(&'static str),
}

/// Classifies the auth header of a request.
pub fn authenticate(headers: &HeaderMap) -> AuthOutcome {
    let Some(value) = headers.get(AUTH_HEADER_NAME) else {
        return AuthOutcome::Fail("Unauthorized");
    };

    if value.is_empty() {
        return AuthOutcome::NoResult;
    }

    match value.to_str() {
        Ok(token) if token == ACCEPTED_TOKEN => AuthOutcome::Success(AuthenticatedIdentity),
        _ => AuthOutcome::Fail("Unauthorized"),
    }
}

/// Middleware rejecting requests without a valid `X-Auth-Token`.
///
/// On success the request carries an `AuthenticatedIdentity` extension.
pub async fn auth_gate(mut request: Request, next: Next) -> Response {
    match authenticate(request.headers()) {
        AuthOutcome::Success(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        AuthOutcome::NoResult => {
            debug!(path = %request.uri().path(), "empty auth header, no authentication result");
            CharacterError::Unauthorized.into_response()
        }
        AuthOutcome::Fail(reason) => {
            warn!(path = %request.uri().path(), reason, "authentication failed");
            CharacterError::Unauthorized.into_response()
        }
    }
}
