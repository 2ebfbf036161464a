//! API Handlers
//!
//! HTTP request handlers for the token and character endpoints. Every
//! failure is returned as a `CharacterError`; its `IntoResponse` impl picks
//! the status code.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use tracing::{info, warn};

use crate::auth::check_credentials;
use crate::config::Config;
use crate::error::{CharacterError, Result};
use crate::models::{ErrorResponse, HealthResponse, NumberParams, TokenRequest};
use crate::store::{validate_identifier, validate_value, CharacterStore};

/// Application state shared across all handlers.
///
/// Contains the character store wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe character store
    pub store: Arc<RwLock<CharacterStore>>,
    /// Validate ids and numbers in PUT/POST before touching the store
    pub strict_validation: bool,
}

impl AppState {
    /// Creates a new AppState around the given store, without strict validation.
    pub fn new(store: CharacterStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            strict_validation: false,
        }
    }

    /// Creates a new AppState from configuration with an empty store.
    pub fn from_config(config: &Config) -> Self {
        Self {
            strict_validation: config.strict_validation,
            ..Self::new(CharacterStore::new())
        }
    }

    /// Enables or disables strict validation.
    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }

    // Validation is off by default: the handlers accept any id and any
    // integer. STRICT_VALIDATION=true restricts writes to A-Z and 1..=255.
    fn check_write(&self, id: &str, number: i32) -> Result<()> {
        if self.strict_validation {
            validate_identifier(id)?;
            validate_value(number)?;
        }
        Ok(())
    }
}

/// Picks `number` from the query string, falling back to a JSON integer body.
fn resolve_number(params: NumberParams, body: &Bytes) -> Result<i32> {
    if let Some(number) = params.number {
        return Ok(number);
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(CharacterError::InvalidRequest(
            "number is required".to_string(),
        ));
    }

    serde_json::from_slice(body).map_err(|e| {
        CharacterError::InvalidRequest(format!("number must be an integer: {}", e))
    })
}

/// Handler for POST /token
///
/// Exchanges the fixed username/password pair for the fixed token. A body
/// that does not parse as credentials is rejected the same way as wrong ones.
#[utoipa::path(
    post,
    path = "/token",
    operation_id = "GetToken",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Access token", body = String, content_type = "text/plain"),
        (status = 401, description = "Invalid username or password", body = ErrorResponse)
    )
)]
pub async fn token_handler(
    payload: std::result::Result<Json<TokenRequest>, JsonRejection>,
) -> Result<&'static str> {
    let Json(req) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "unreadable token request");
        CharacterError::InvalidCredentials
    })?;

    match check_credentials(&req.username, &req.password) {
        Ok(token) => {
            info!(username = %req.username, "issued token");
            Ok(token)
        }
        Err(e) => {
            warn!(username = %req.username, "rejected token request");
            Err(e)
        }
    }
}

/// Handler for GET /character
///
/// Returns the ids currently in the store.
#[utoipa::path(
    get,
    path = "/character",
    operation_id = "ListOfCharacters",
    responses(
        (status = 200, description = "Stored character ids", body = [String]),
        (status = 401, description = "Missing or wrong access token", body = ErrorResponse)
    )
)]
pub async fn list_handler(State(state): State<AppState>) -> Json<Vec<String>> {
    let store = state.store.read().await;
    Json(store.list_keys())
}

/// Handler for GET /character/:id
///
/// Returns the value stored for `id`.
#[utoipa::path(
    get,
    path = "/character/{id}",
    operation_id = "GetCharacter",
    params(("id" = String, Path, description = "Character id")),
    responses(
        (status = 200, description = "Stored number", body = i32),
        (status = 404, description = "Character not found", body = ErrorResponse)
    )
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<i32>> {
    let store = state.store.read().await;
    store
        .get(&id)
        .map(Json)
        .ok_or(CharacterError::NotFound(id))
}

/// Handler for POST /character/:id
///
/// Replaces the value of an existing id.
#[utoipa::path(
    post,
    path = "/character/{id}",
    operation_id = "PostCharacter",
    params(
        ("id" = String, Path, description = "Character id"),
        ("number" = i32, Query, description = "New number")
    ),
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Missing or invalid number", body = ErrorResponse),
        (status = 404, description = "Character not found", body = ErrorResponse)
    )
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    params: std::result::Result<Query<NumberParams>, QueryRejection>,
    body: Bytes,
) -> Result<()> {
    let Query(params) = params?;
    let number = resolve_number(params, &body)?;
    state.check_write(&id, number)?;

    let mut store = state.store.write().await;
    store.update(&id, number)
}

/// Handler for PUT /character/:id
///
/// Adds a new id; fails if it already exists.
#[utoipa::path(
    put,
    path = "/character/{id}",
    operation_id = "PutCharacter",
    params(
        ("id" = String, Path, description = "Character id"),
        ("number" = i32, Query, description = "Number to store")
    ),
    responses(
        (status = 200, description = "Added"),
        (status = 400, description = "Missing or invalid number", body = ErrorResponse),
        (status = 409, description = "Character already exists", body = ErrorResponse)
    )
)]
pub async fn add_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    params: std::result::Result<Query<NumberParams>, QueryRejection>,
    body: Bytes,
) -> Result<()> {
    let Query(params) = params?;
    let number = resolve_number(params, &body)?;
    state.check_write(&id, number)?;

    let mut store = state.store.write().await;
    store.add(id, number)
}

/// Handler for DELETE /character/:id
#[utoipa::path(
    delete,
    path = "/character/{id}",
    operation_id = "DeleteCharacter",
    params(("id" = String, Path, description = "Character id")),
    responses(
        (status = 200, description = "Removed"),
        (status = 404, description = "Character not found", body = ErrorResponse)
    )
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<()> {
    let mut store = state.store.write().await;
    store.remove(&id)
}

/// Handler for GET /health
///
/// Returns health status of the server.
#[utoipa::path(
    get,
    path = "/health",
    operation_id = "Health",
    responses((status = 200, description = "Server is healthy", body = HealthResponse))
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(n: i32) -> std::result::Result<Query<NumberParams>, QueryRejection> {
        Ok(Query(NumberParams { number: Some(n) }))
    }

    #[tokio::test]
    async fn test_token_handler() {
        let ok = token_handler(Ok(Json(TokenRequest {
            username: "user".to_string(),
            password: "password".to_string(),
        })))
        .await;
        assert_eq!(ok, Ok("secret"));

        let err = token_handler(Ok(Json(TokenRequest {
            username: "x".to_string(),
            password: "y".to_string(),
        })))
        .await;
        assert_eq!(err, Err(CharacterError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_add_and_get_handler() {
        let state = AppState::new(CharacterStore::new());

        let result = add_handler(
            State(state.clone()),
            Path("A".to_string()),
            number(5),
            Bytes::new(),
        )
        .await;
        assert!(result.is_ok());

        let response = get_handler(State(state), Path("A".to_string()))
            .await
            .unwrap();
        assert_eq!(response.0, 5);
    }

    #[tokio::test]
    async fn test_get_missing() {
        let state = AppState::new(CharacterStore::new());

        let result = get_handler(State(state), Path("A".to_string())).await;
        assert!(matches!(result, Err(CharacterError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_missing() {
        let state = AppState::new(CharacterStore::new());

        let result = update_handler(
            State(state),
            Path("A".to_string()),
            number(7),
            Bytes::new(),
        )
        .await;
        assert_eq!(result, Err(CharacterError::NotFound("A".to_string())));
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let state = AppState::new(CharacterStore::new());
        state.store.write().await.add("A", 1).unwrap();

        assert!(delete_handler(State(state.clone()), Path("A".to_string()))
            .await
            .is_ok());
        assert!(state.store.read().await.is_empty());

        let again = delete_handler(State(state), Path("A".to_string())).await;
        assert!(matches!(again, Err(CharacterError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_handler() {
        let state = AppState::new(CharacterStore::new());
        state.store.write().await.add("B", 2).unwrap();

        let response = list_handler(State(state)).await;
        assert_eq!(response.0, vec!["B".to_string()]);
    }

    #[tokio::test]
    async fn test_lenient_by_default() {
        let state = AppState::new(CharacterStore::new());

        let result = add_handler(
            State(state.clone()),
            Path("hello".to_string()),
            number(9000),
            Bytes::new(),
        )
        .await;
        assert!(result.is_ok());
        assert_eq!(state.store.read().await.get("hello"), Some(9000));
    }

    #[tokio::test]
    async fn test_strict_validation_rejects() {
        let state = AppState::new(CharacterStore::new()).with_strict_validation(true);

        let bad_id = add_handler(
            State(state.clone()),
            Path("a".to_string()),
            number(5),
            Bytes::new(),
        )
        .await;
        assert_eq!(bad_id, Err(CharacterError::InvalidCharacter("a".to_string())));

        let bad_number = add_handler(
            State(state.clone()),
            Path("A".to_string()),
            number(0),
            Bytes::new(),
        )
        .await;
        assert_eq!(bad_number, Err(CharacterError::InvalidNumber(0)));

        assert!(state.store.read().await.is_empty());
    }

    #[test]
    fn test_resolve_number_sources() {
        let from_query = resolve_number(NumberParams { number: Some(3) }, &Bytes::from("9"));
        assert_eq!(from_query, Ok(3));

        let from_body = resolve_number(NumberParams::default(), &Bytes::from(" 9\n"));
        assert_eq!(from_body, Ok(9));

        let missing = resolve_number(NumberParams::default(), &Bytes::new());
        assert!(matches!(missing, Err(CharacterError::InvalidRequest(_))));

        let not_int = resolve_number(NumberParams::default(), &Bytes::from("\"five\""));
        assert!(matches!(not_int, Err(CharacterError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_bad_query_becomes_invalid_request() {
        let state = AppState::new(CharacterStore::new());
        let uri: axum::http::Uri = "/character/A?number=five".parse().unwrap();

        let result = add_handler(
            State(state.clone()),
            Path("A".to_string()),
            Query::<NumberParams>::try_from_uri(&uri),
            Bytes::new(),
        )
        .await;
        assert!(matches!(result, Err(CharacterError::InvalidRequest(_))));
        assert!(state.store.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
