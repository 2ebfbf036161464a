//! API Routes
//!
//! The route table and the Axum router built from it. Which routes sit behind
//! the auth gate is decided here, per table entry, and the same table feeds
//! the auth header of the OpenAPI document. Swagger UI and `/openapi.json`
//! are merged outside the table and are never gated.

use axum::{
    http::Method,
    middleware,
    routing::{delete, get, post, put, MethodRouter},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::docs::ApiDoc;
use super::handlers::{
    add_handler, delete_handler, get_handler, health_handler, list_handler, token_handler,
    update_handler, AppState,
};
use crate::auth::auth_gate;

/// Operation served by a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    IssueToken,
    ListCharacters,
    GetCharacter,
    UpdateCharacter,
    AddCharacter,
    DeleteCharacter,
    Health,
}

impl Endpoint {
    fn method_router(self) -> MethodRouter<AppState> {
        match self {
            Endpoint::IssueToken => post(token_handler),
            Endpoint::ListCharacters => get(list_handler),
            Endpoint::GetCharacter => get(get_handler),
            Endpoint::UpdateCharacter => post(update_handler),
            Endpoint::AddCharacter => put(add_handler),
            Endpoint::DeleteCharacter => delete(delete_handler),
            Endpoint::Health => get(health_handler),
        }
    }
}

/// One row of the route table.
#[derive(Debug, Clone)]
pub struct RouteSpec {
    pub endpoint: Endpoint,
    pub method: Method,
    /// Axum path pattern (`:name` for captures)
    pub path: &'static str,
    pub operation_id: &'static str,
    pub summary: &'static str,
    /// Route is exempt from authentication
    pub anonymous: bool,
    /// Route asks for an authenticated caller; overridden by `anonymous`
    pub authorize: bool,
}

impl RouteSpec {
    /// Whether the auth gate runs for this route.
    ///
    /// Every route without the anonymous marker is gated, whether or not it
    /// carries `authorize`. The OpenAPI header rule uses the same test.
    pub fn requires_auth(&self) -> bool {
        !self.anonymous
    }
}

/// Every route the server exposes.
pub static ROUTES: [RouteSpec; 7] = [
    RouteSpec {
        endpoint: Endpoint::IssueToken,
        method: Method::POST,
        path: "/token",
        operation_id: "GetToken",
        summary: "Exchange username and password for an access token",
        anonymous: true,
        authorize: true,
    },
    RouteSpec {
        endpoint: Endpoint::ListCharacters,
        method: Method::GET,
        path: "/character",
        operation_id: "ListOfCharacters",
        summary: "List the ids of all stored characters",
        anonymous: false,
        authorize: true,
    },
    RouteSpec {
        endpoint: Endpoint::GetCharacter,
        method: Method::GET,
        path: "/character/:id",
        operation_id: "GetCharacter",
        summary: "Get the number stored for a character",
        anonymous: false,
        authorize: true,
    },
    RouteSpec {
        endpoint: Endpoint::UpdateCharacter,
        method: Method::POST,
        path: "/character/:id",
        operation_id: "PostCharacter",
        summary: "Update the number of an existing character",
        anonymous: false,
        authorize: true,
    },
    RouteSpec {
        endpoint: Endpoint::AddCharacter,
        method: Method::PUT,
        path: "/character/:id",
        operation_id: "PutCharacter",
        summary: "Add a new character with a number",
        anonymous: false,
        authorize: true,
    },
    RouteSpec {
        endpoint: Endpoint::DeleteCharacter,
        method: Method::DELETE,
        path: "/character/:id",
        operation_id: "DeleteCharacter",
        summary: "Remove a character",
        anonymous: false,
        authorize: true,
    },
    RouteSpec {
        endpoint: Endpoint::Health,
        method: Method::GET,
        path: "/health",
        operation_id: "Health",
        summary: "Server health check",
        anonymous: true,
        authorize: false,
    },
];

/// Creates the main router from the route table.
///
/// # Middleware
/// - Auth gate: attached per route when `requires_auth()` holds
/// - Swagger UI at `/swagger-ui`, spec at `/openapi.json`, both anonymous
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Same-path entries are merged into one method router by axum
    let router = ROUTES.iter().fold(Router::new(), |router, spec| {
        let method_router = spec.endpoint.method_router();
        let method_router = if spec.requires_auth() {
            method_router.route_layer(middleware::from_fn(auth_gate))
        } else {
            method_router
        };
        router.route(spec.path, method_router)
    });

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
